//! Overlay element construction.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};

use glint_core::EditState;

/// Handles to the overlay's DOM elements.
///
/// Built once per mount; the textarea in particular is never rebuilt so
/// focus and cursor position survive view re-renders.
pub struct OverlayHandle {
    pub root: HtmlElement,
    pub toolbar: HtmlElement,
    pub edit_button: HtmlElement,
    pub split_button: HtmlElement,
    pub view: HtmlElement,
    pub edit_pane: HtmlElement,
    pub input: HtmlTextAreaElement,
}

fn html_element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("created element is not an HtmlElement"))
}

/// Build the overlay structure inside `container`:
///
/// ```text
/// div.glint-root
/// ├── div.glint-toolbar [Edit] [Split]
/// ├── div.glint-view
/// └── div.glint-edit > textarea.glint-input
/// ```
pub fn build_overlay(container: &Element) -> Result<OverlayHandle, JsValue> {
    let document = gloo_utils::document();

    let root = html_element(&document, "div", "glint-root")?;
    let toolbar = html_element(&document, "div", "glint-toolbar")?;
    let edit_button = html_element(&document, "button", "glint-btn-edit")?;
    edit_button.set_text_content(Some("Edit"));
    let split_button = html_element(&document, "button", "glint-btn-split")?;
    split_button.set_text_content(Some("Split"));
    let view = html_element(&document, "div", "glint-view")?;
    let edit_pane = html_element(&document, "div", "glint-edit")?;

    let input = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| JsValue::from_str("created element is not a textarea"))?;
    input.set_class_name("glint-input");
    input.set_spellcheck(false);

    toolbar.append_child(&edit_button)?;
    toolbar.append_child(&split_button)?;
    edit_pane.append_child(&input)?;
    root.append_child(&toolbar)?;
    root.append_child(&view)?;
    root.append_child(&edit_pane)?;
    container.append_child(&root)?;

    Ok(OverlayHandle { root, toolbar, edit_button, split_button, view, edit_pane, input })
}

/// Append the host-provided stylesheet text inside the overlay root.
pub fn mount_stylesheet(root: &HtmlElement, css: &str) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    root.append_child(&style)?;
    Ok(())
}

/// Reflect an [`EditState`] onto the overlay's class list; the stylesheet
/// does the rest.
pub fn apply_edit_state(handle: &OverlayHandle, state: EditState) {
    let classes = handle.root.class_list();
    let _ = classes.toggle_with_force("glint-editing", state.is_editing);
    let _ = classes.toggle_with_force("glint-split-vertical", state.is_split_vertical);
}
