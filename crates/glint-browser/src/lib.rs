//! Browser DOM layer for the glint overlay.
//!
//! This crate provides DOM construction and browser event wiring for the
//! core render pipeline. It assumes a `wasm32-unknown-unknown` target
//! environment.
//!
//! # Architecture
//!
//! - `mount`: overlay element construction and edit-state styling
//! - `dom`: `RenderSurface` over the view pane and page chrome
//! - `dropzone`: drag-and-drop wiring and async file reads
//! - `editable`: textarea seeding and input wiring
//! - `page`: location scheme and local-page text extraction
//!
//! # Re-exports
//!
//! This crate re-exports `glint-core` for convenience, so consumers only
//! need to depend on `glint-browser`.

pub use glint_core;
pub use glint_core::*;

pub mod dom;
pub mod dropzone;
pub mod editable;
pub mod mount;
pub mod page;

pub use dom::DomSurface;
pub use dropzone::DropZone;
pub use mount::{OverlayHandle, apply_edit_state, build_overlay, mount_stylesheet};
