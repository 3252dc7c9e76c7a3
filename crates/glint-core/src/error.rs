//! Error types shared across the workspace.

use smol_str::SmolStr;
use thiserror::Error;

/// Failure from the highlighting collaborator.
///
/// Classification never fails (unknown extensions resolve to plain text),
/// so these only surface from the highlight or stylesheet steps. A
/// failure is terminal for that single render attempt; no retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HighlightError {
    #[error("unknown theme: {0}")]
    UnknownTheme(SmolStr),
    #[error("highlight parse failed: {0}")]
    Parse(String),
    #[error("stylesheet generation failed: {0}")]
    Stylesheet(String),
}
