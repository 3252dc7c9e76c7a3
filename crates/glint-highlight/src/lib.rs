//! Highlighting layer for the glint overlay.
//!
//! Markup generation is classed HTML (theme-independent), so the wasm
//! build carries grammars but no theme dump; theming arrives as a
//! stylesheet generated natively by the `css` module and handed to the
//! overlay by the host.

pub mod code_pretty;
pub mod theme;

#[cfg(all(feature = "syntax-css", not(all(target_family = "wasm", target_os = "unknown"))))]
pub mod css;

pub use code_pretty::{SYNTAX_SET, SyntectHighlighter, highlight_html, write_highlighted};
pub use theme::{DEFAULT_THEME, FontScheme, OverlayTheme};
