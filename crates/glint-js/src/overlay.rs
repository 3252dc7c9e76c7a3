//! The overlay instance exposed to JavaScript.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use glint_browser::{
    DomSurface, DropZone, OverlayHandle, apply_edit_state, build_overlay, dropzone, editable,
    mount_stylesheet, page,
};
use glint_core::{
    ApplyPolicy, EditState, Mode, RenderPipeline, SourceDocument, document_from_drop, select_mode,
};
use glint_highlight::SyntectHighlighter;

use crate::types::OverlayOptions;

type Pipeline = RenderPipeline<SyntectHighlighter, DomSurface>;

struct Inner {
    pipeline: Pipeline,
    handle: OverlayHandle,
    state: Cell<EditState>,
    mounted: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
    dropzone: RefCell<Option<DropZone>>,
}

impl Inner {
    /// Seed the input control and render the document, replacing whatever
    /// was shown before.
    fn open(self: &Rc<Self>, doc: SourceDocument) {
        editable::seed_input(&self.handle.input, &doc.content);
        let inner = self.clone();
        spawn_local(async move {
            // Failures are logged by the pipeline; the previous view
            // stays in place.
            let _ = inner.pipeline.render(doc).await;
        });
    }
}

/// The overlay instance for one page view.
///
/// Wraps the core pipeline with WASM bindings for the content script.
#[wasm_bindgen]
pub struct Overlay {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
impl Overlay {
    /// Mount the overlay into a container and activate it for the current
    /// page: local files render immediately, everything else becomes a
    /// drop target.
    #[wasm_bindgen]
    pub fn mount(container: &HtmlElement, options: JsValue) -> Result<Overlay, JsError> {
        let options = OverlayOptions::from_js(options)?;

        let handle = build_overlay(container).map_err(js_error)?;
        if let Some(ref css) = options.styles {
            mount_stylesheet(&handle.root, css).map_err(js_error)?;
        }
        if !options.editable {
            let _ = handle.toolbar.style().set_property("display", "none");
        }

        let policy = if options.latest_wins {
            ApplyPolicy::LatestIssued
        } else {
            ApplyPolicy::CompletionOrder
        };
        let surface = DomSurface::new(&handle);
        let pipeline =
            RenderPipeline::new(SyntectHighlighter, surface, options.theme.as_str(), policy);

        let inner = Rc::new(Inner {
            pipeline,
            handle,
            state: Cell::new(EditState {
                is_editing: false,
                is_split_vertical: options.split_vertical,
            }),
            mounted: Cell::new(true),
            listeners: RefCell::new(Vec::new()),
            dropzone: RefCell::new(None),
        });
        apply_edit_state(&inner.handle, inner.state.get());

        let overlay = Overlay { inner };
        overlay.wire_controls(options.editable);
        overlay.activate();
        Ok(overlay)
    }

    /// Whether the overlay is still mounted.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Remove the overlay from the page and drop all event wiring.
    #[wasm_bindgen]
    pub fn unmount(&self) {
        self.inner.handle.root.remove();
        self.inner.listeners.borrow_mut().clear();
        self.inner.dropzone.borrow_mut().take();
        self.inner.mounted.set(false);
    }

    /// Show or hide the edit pane.
    #[wasm_bindgen(js_name = setEditing)]
    pub fn set_editing(&self, editing: bool) {
        let mut state = self.inner.state.get();
        state.is_editing = editing;
        self.inner.state.set(state);
        apply_edit_state(&self.inner.handle, state);
    }

    /// Flip the split orientation of editable mode.
    #[wasm_bindgen(js_name = toggleSplit)]
    pub fn toggle_split(&self) {
        let mut state = self.inner.state.get();
        state.toggle_split();
        self.inner.state.set(state);
        apply_edit_state(&self.inner.handle, state);
    }

    /// Open text handed over by the host, as if it had been dropped.
    #[wasm_bindgen(js_name = openText)]
    pub fn open_text(&self, content: &str, file_name: &str) {
        self.inner.open(SourceDocument::new(content, file_name));
    }

    /// The current document content, if one is open.
    #[wasm_bindgen(js_name = getContent)]
    pub fn get_content(&self) -> Option<String> {
        self.inner.pipeline.current_content()
    }

    /// The language tag fixed when the current document was opened.
    #[wasm_bindgen(js_name = getLanguage)]
    pub fn get_language(&self) -> Option<String> {
        self.inner.pipeline.current_language().map(|l| l.as_str().to_string())
    }
}

// Internal methods (not exposed to JS)
impl Overlay {
    fn wire_controls(&self, editable_enabled: bool) {
        let mut listeners = self.inner.listeners.borrow_mut();

        let edit_inner = self.inner.clone();
        listeners.push(EventListener::new(&self.inner.handle.edit_button, "click", move |_| {
            let mut state = edit_inner.state.get();
            state.toggle_editing();
            edit_inner.state.set(state);
            apply_edit_state(&edit_inner.handle, state);
        }));

        let split_inner = self.inner.clone();
        listeners.push(EventListener::new(&self.inner.handle.split_button, "click", move |_| {
            let mut state = split_inner.state.get();
            state.toggle_split();
            split_inner.state.set(state);
            apply_edit_state(&split_inner.handle, state);
        }));

        if editable_enabled {
            let input_inner = self.inner.clone();
            listeners.push(editable::wire_input(&self.inner.handle.input, move |value| {
                let inner = input_inner.clone();
                spawn_local(async move {
                    let _ = inner.pipeline.rerender_edited(value).await;
                });
            }));
        }
    }

    fn activate(&self) {
        match select_mode(&page::location_scheme()) {
            Mode::LocalFile => {
                // One-shot: extract the rendered page text and highlight
                // it; no further automatic re-render.
                self.inner.open(page::local_document());
            }
            Mode::DropTarget => {
                if let Err(err) = dropzone::placeholder(&self.inner.handle.view) {
                    tracing::warn!(?err, "failed to build dropzone placeholder");
                }
                let drop_inner = self.inner.clone();
                let zone = dropzone::install(&self.inner.handle, move |file| {
                    if let Some(doc) = document_from_drop(vec![file]) {
                        drop_inner.open(doc);
                    }
                });
                *self.inner.dropzone.borrow_mut() = Some(zone);
            }
        }
    }
}

fn js_error(value: JsValue) -> JsError {
    JsError::new(&format!("{value:?}"))
}
