//! Textarea wiring for editable mode.

use gloo_events::EventListener;
use web_sys::HtmlTextAreaElement;

/// Seed the input control with document content.
pub fn seed_input(input: &HtmlTextAreaElement, content: &str) {
    input.set_value(content);
}

/// Wire the input control's `input` event to a callback receiving the
/// current value.
///
/// The control itself is never replaced on re-render, so focus and cursor
/// position survive each keystroke.
pub fn wire_input<F>(input: &HtmlTextAreaElement, on_change: F) -> EventListener
where
    F: Fn(String) + 'static,
{
    let target = input.clone();
    EventListener::new(input, "input", move |_| on_change(target.value()))
}
