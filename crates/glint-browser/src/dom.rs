//! `RenderSurface` implementation over the live DOM.

use web_sys::HtmlElement;

use glint_core::RenderSurface;

use crate::mount::OverlayHandle;

/// The view pane plus the chrome the pipeline is allowed to touch.
#[derive(Clone)]
pub struct DomSurface {
    view: HtmlElement,
    edit_pane: HtmlElement,
}

impl DomSurface {
    pub fn new(handle: &OverlayHandle) -> Self {
        Self { view: handle.view.clone(), edit_pane: handle.edit_pane.clone() }
    }
}

impl RenderSurface for DomSurface {
    fn swap_view(&self, markup: &str) {
        // Wholesale replacement: the old subtree is discarded before the
        // new markup is parsed in, so stale and fresh output never mix.
        self.view.set_inner_html(markup);
    }

    fn adapt_chrome(&self) {
        // The markup is attached by now, so computed styles are available.
        let Ok(Some(block)) = self.view.query_selector("pre") else {
            // Nothing rendered to sample from; skip silently.
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(style)) = window.get_computed_style(&block) else {
            return;
        };
        let Ok(background) = style.get_property_value("background-color") else {
            return;
        };
        if background.is_empty() {
            return;
        }

        if let Some(body) = gloo_utils::document().body() {
            let _ = body.style().set_property("background-color", &background);
        }
        let _ = self.edit_pane.style().set_property("background-color", &background);
        tracing::debug!(%background, "propagated theme background to chrome");
    }
}
