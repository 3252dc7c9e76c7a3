//! Option types crossing the JS boundary.

use serde::Deserialize;
use wasm_bindgen::{JsError, JsValue};

/// Mount-time options handed over by the content script.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayOptions {
    /// Theme name; only recorded on the pipeline, markup itself is
    /// theme-independent.
    pub theme: String,
    /// Whether the edit affordance is offered at all.
    pub editable: bool,
    /// Initial split orientation for editable mode.
    pub split_vertical: bool,
    /// Discard highlight results that resolve after a later-issued call
    /// has already been applied, instead of the reference
    /// last-completed-wins behavior.
    pub latest_wins: bool,
    /// Stylesheet text retrieved from the host runtime's bundled assets.
    pub styles: Option<String>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            theme: glint_highlight::DEFAULT_THEME.to_string(),
            editable: true,
            split_vertical: true,
            latest_wins: false,
            styles: None,
        }
    }
}

impl OverlayOptions {
    /// Parse options from a JS value; `undefined`/`null` yield defaults.
    pub fn from_js(value: JsValue) -> Result<Self, JsError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsError::new(&format!("Invalid overlay options: {e}")))
    }
}
