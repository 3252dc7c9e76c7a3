//! WASM bindings for the glint overlay.
//!
//! The extension content script imports this module, asks the host
//! runtime for a mount point and the bundled stylesheet text, and calls
//! [`Overlay::mount`]. Everything after that runs on the page's event
//! loop.

mod overlay;
mod types;

pub use overlay::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
