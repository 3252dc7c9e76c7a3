//! WASM browser tests for glint-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use glint_browser::{
    DomSurface, EditState, RenderSurface, apply_edit_state, build_overlay, dropzone, editable,
    mount_stylesheet,
};

fn fresh_container() -> web_sys::Element {
    let document = gloo_utils::document();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn overlay_structure_is_built() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();

    assert_eq!(handle.root.class_name(), "glint-root");
    assert!(container.query_selector(".glint-view").unwrap().is_some());
    assert!(container.query_selector(".glint-edit .glint-input").unwrap().is_some());
    assert!(container.query_selector(".glint-btn-edit").unwrap().is_some());
    assert!(container.query_selector(".glint-btn-split").unwrap().is_some());
    assert_eq!(handle.input.spellcheck(), false);
}

#[wasm_bindgen_test]
fn edit_state_is_reflected_as_classes() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();

    apply_edit_state(&handle, EditState::default());
    assert!(!handle.root.class_list().contains("glint-editing"));
    assert!(handle.root.class_list().contains("glint-split-vertical"));

    let mut state = EditState::default();
    state.toggle_editing();
    state.toggle_split();
    apply_edit_state(&handle, state);
    assert!(handle.root.class_list().contains("glint-editing"));
    assert!(!handle.root.class_list().contains("glint-split-vertical"));
}

#[wasm_bindgen_test]
fn swap_replaces_view_contents_wholesale() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();
    let surface = DomSurface::new(&handle);

    surface.swap_view("<pre class=\"glint-code\">old</pre>");
    surface.swap_view("<pre class=\"glint-code\">new</pre>");

    assert_eq!(handle.view.child_element_count(), 1);
    assert!(handle.view.inner_html().contains("new"));
    assert!(!handle.view.inner_html().contains("old"));
}

#[wasm_bindgen_test]
fn adapt_chrome_without_rendered_block_is_a_no_op() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();
    let surface = DomSurface::new(&handle);

    // Empty view pane: must not panic, must not touch anything.
    surface.adapt_chrome();
}

#[wasm_bindgen_test]
fn adapt_chrome_propagates_computed_background() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();
    mount_stylesheet(&handle.root, ".glint-code { background-color: rgb(43, 48, 59); }").unwrap();
    let surface = DomSurface::new(&handle);

    surface.swap_view("<pre class=\"glint-code\">x</pre>");
    surface.adapt_chrome();

    let body = gloo_utils::document().body().unwrap();
    assert_eq!(
        body.style().get_property_value("background-color").unwrap(),
        "rgb(43, 48, 59)"
    );
    assert_eq!(
        handle.edit_pane.style().get_property_value("background-color").unwrap(),
        "rgb(43, 48, 59)"
    );
}

#[wasm_bindgen_test]
fn dropzone_placeholder_lands_in_view_pane() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();

    dropzone::placeholder(&handle.view).unwrap();
    let zone = container.query_selector(".glint-dropzone").unwrap().unwrap();
    assert_eq!(zone.text_content().as_deref(), Some("Drag and drop files here"));
}

#[wasm_bindgen_test]
fn input_event_reports_current_value() {
    let container = fresh_container();
    let handle = build_overlay(&container).unwrap();

    editable::seed_input(&handle.input, "let x = 1;");
    assert_eq!(handle.input.value(), "let x = 1;");

    let seen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let seen_in_cb = seen.clone();
    let _listener = editable::wire_input(&handle.input, move |value| {
        *seen_in_cb.borrow_mut() = Some(value);
    });

    handle.input.set_value("let x = 2;");
    let event = web_sys::Event::new("input").unwrap();
    handle.input.dispatch_event(&event).unwrap();

    assert_eq!(seen.borrow().as_deref(), Some("let x = 2;"));
}
