//! Page-level inputs for activation: location scheme and local-file text.

use glint_core::{SourceDocument, file_name_from_path};

/// The page's access scheme as reported by `Location.protocol`
/// (e.g. `"file:"`, `"https:"`).
pub fn location_scheme() -> String {
    gloo_utils::window().location().protocol().unwrap_or_default()
}

/// The page's path, for deriving a file name in local-file mode.
pub fn page_path() -> String {
    gloo_utils::window().location().pathname().unwrap_or_default()
}

/// The page's already-rendered text content.
pub fn page_text() -> String {
    gloo_utils::document()
        .body()
        .map(|body| body.inner_text())
        .unwrap_or_default()
}

/// Build the document for local-file mode from the visible page text and
/// the final path segment.
pub fn local_document() -> SourceDocument {
    SourceDocument::new(page_text(), file_name_from_path(&page_path()))
}
