//! In-memory document model for one render cycle.

use smol_str::SmolStr;

use crate::language::{LanguageId, classify};

/// Sentinel name used when a document arrives without a usable file name.
pub const FALLBACK_FILE_NAME: &str = "unknown.txt";

/// Raw text content paired with its originating file name.
///
/// Replaced wholesale on each new drop; no history is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub content: String,
    pub file_name: SmolStr,
}

impl SourceDocument {
    /// Create a document, substituting [`FALLBACK_FILE_NAME`] for an empty
    /// file name.
    pub fn new(content: impl Into<String>, file_name: impl Into<SmolStr>) -> Self {
        let file_name: SmolStr = file_name.into();
        let file_name = if file_name.is_empty() {
            SmolStr::new_static(FALLBACK_FILE_NAME)
        } else {
            file_name
        };
        Self { content: content.into(), file_name }
    }

    /// The language derived from this document's file name.
    pub fn language(&self) -> LanguageId {
        classify(&self.file_name)
    }
}

/// One entry of a drag-and-drop payload, already read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: SmolStr,
    pub text: String,
}

/// Build a document from a drop payload.
///
/// The first entry wins; an empty payload yields `None` and callers take
/// no action.
pub fn document_from_drop(files: Vec<DroppedFile>) -> Option<SourceDocument> {
    let first = files.into_iter().next()?;
    Some(SourceDocument::new(first.text, first.name))
}

/// Extract the final segment of a URL path as a file name.
///
/// Falls back to [`FALLBACK_FILE_NAME`] when the path has no usable
/// segment (empty path or trailing slash).
pub fn file_name_from_path(path: &str) -> SmolStr {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => SmolStr::new(segment),
        _ => SmolStr::new_static(FALLBACK_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_name_falls_back_to_sentinel() {
        let doc = SourceDocument::new("x", "");
        assert_eq!(doc.file_name, FALLBACK_FILE_NAME);
        assert_eq!(doc.language(), LanguageId::Text);
    }

    #[test]
    fn language_derives_from_file_name() {
        let doc = SourceDocument::new("print(1)", "demo.py");
        assert_eq!(doc.language(), LanguageId::Python);
    }

    #[test]
    fn empty_drop_payload_yields_none() {
        assert_eq!(document_from_drop(Vec::new()), None);
    }

    #[test]
    fn first_dropped_file_wins() {
        let doc = document_from_drop(vec![
            DroppedFile { name: "a.js".into(), text: "let x;".into() },
            DroppedFile { name: "b.py".into(), text: "pass".into() },
        ])
        .unwrap();
        assert_eq!(doc.file_name, "a.js");
        assert_eq!(doc.content, "let x;");
    }

    #[test]
    fn path_segment_extraction() {
        assert_eq!(file_name_from_path("/home/user/demo.py"), "demo.py");
        assert_eq!(file_name_from_path("/unknown"), "unknown");
        assert_eq!(file_name_from_path("/dir/"), FALLBACK_FILE_NAME);
        assert_eq!(file_name_from_path(""), FALLBACK_FILE_NAME);
    }

    #[test]
    fn extensionless_path_classifies_as_text() {
        let name = file_name_from_path("/unknown");
        assert_eq!(classify(&name), LanguageId::Text);
    }
}
