//! Drag-and-drop wiring for the drop-target activation mode.

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, HtmlElement};

use glint_core::DroppedFile;

use crate::mount::OverlayHandle;

const ACTIVE_CLASS: &str = "glint-drop-active";

/// Live drag-and-drop wiring. Dropping this value unregisters the
/// handlers.
pub struct DropZone {
    _listeners: Vec<EventListener>,
}

/// Create the placeholder affordance inside the view pane.
///
/// The first successful render replaces it; that is fine because the
/// event handlers live on the overlay root, not on this element.
pub fn placeholder(view: &HtmlElement) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let zone = document.create_element("div")?;
    zone.set_class_name("glint-dropzone");
    zone.set_text_content(Some("Drag and drop files here"));
    view.append_child(&zone)?;
    Ok(())
}

/// Install drag handlers on the overlay root.
///
/// On a valid drop the first file is read fully into memory and handed to
/// `on_file`; an empty payload is ignored without any state change.
pub fn install<F>(handle: &OverlayHandle, on_file: F) -> DropZone
where
    F: Fn(DroppedFile) + Clone + 'static,
{
    let root = handle.root.clone();

    let enter_root = root.clone();
    let on_enter = EventListener::new(&root, "dragenter", move |event| {
        event.prevent_default();
        let _ = enter_root.class_list().add_1(ACTIVE_CLASS);
    });

    let over_root = root.clone();
    let on_over = EventListener::new(&root, "dragover", move |event| {
        // preventDefault here is what makes the element a drop target.
        event.prevent_default();
        let _ = over_root.class_list().add_1(ACTIVE_CLASS);
    });

    let leave_root = root.clone();
    let on_leave = EventListener::new(&root, "dragleave", move |_| {
        let _ = leave_root.class_list().remove_1(ACTIVE_CLASS);
    });

    let drop_root = root.clone();
    let on_drop = EventListener::new(&root, "drop", move |event| {
        event.prevent_default();
        let _ = drop_root.class_list().remove_1(ACTIVE_CLASS);

        let Some(drag) = event.dyn_ref::<DragEvent>() else {
            return;
        };
        let Some(file) = first_dropped_file(drag) else {
            tracing::debug!("drop with empty file payload, ignoring");
            return;
        };

        let on_file = on_file.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match read_file_text(&file).await {
                Ok(dropped) => on_file(dropped),
                Err(err) => {
                    tracing::warn!(?err, "failed to read dropped file");
                }
            }
        });
    });

    DropZone { _listeners: vec![on_enter, on_over, on_leave, on_drop] }
}

fn first_dropped_file(event: &DragEvent) -> Option<File> {
    let files = event.data_transfer()?.files()?;
    if files.length() == 0 {
        return None;
    }
    files.get(0)
}

/// Read a dropped file fully into memory.
async fn read_file_text(file: &File) -> Result<DroppedFile, JsValue> {
    let text: JsValue = JsFuture::from(file.text()).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("file contents are not text"))?;
    Ok(DroppedFile { name: file.name().into(), text })
}
