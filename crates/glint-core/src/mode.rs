//! Activation mode selection.

/// How the overlay activates for the current page view, chosen once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The page is a local file: read its rendered text and highlight it
    /// immediately, once.
    LocalFile,
    /// Remote page: wait for a user-initiated file drop.
    DropTarget,
}

/// Select the activation mode from the page's access scheme.
///
/// Accepts both bare schemes (`"file"`) and `Location.protocol` values
/// with a trailing colon (`"file:"`).
pub fn select_mode(scheme: &str) -> Mode {
    match scheme.trim_end_matches(':') {
        "file" => Mode::LocalFile,
        _ => Mode::DropTarget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_scheme_selects_local_file() {
        assert_eq!(select_mode("file"), Mode::LocalFile);
        assert_eq!(select_mode("file:"), Mode::LocalFile);
    }

    #[test]
    fn other_schemes_select_drop_target() {
        assert_eq!(select_mode("https:"), Mode::DropTarget);
        assert_eq!(select_mode("http:"), Mode::DropTarget);
        assert_eq!(select_mode(""), Mode::DropTarget);
    }
}
