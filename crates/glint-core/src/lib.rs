//! Platform-free core for the glint syntax-highlighting overlay.
//!
//! This crate holds everything that does not need a DOM: file-name to
//! language classification, the in-memory document model, activation mode
//! selection, and the render pipeline that drives a `Highlighter`
//! collaborator and a `RenderSurface`. The browser layer provides one
//! implementation of each seam; tests provide another.
//!
//! # Architecture
//!
//! - `language`: `LanguageId` and extension-based classification
//! - `document`: `SourceDocument`, drop payloads, path helpers
//! - `mode`: local-file vs drop-target activation
//! - `state`: edit/split UI state
//! - `pipeline`: highlight-then-swap orchestration and apply policies

pub mod document;
pub mod error;
pub mod language;
pub mod mode;
pub mod pipeline;
pub mod state;

pub use document::{DroppedFile, FALLBACK_FILE_NAME, SourceDocument, document_from_drop, file_name_from_path};
pub use error::HighlightError;
pub use language::{LanguageId, classify};
pub use mode::{Mode, select_mode};
pub use pipeline::{ApplyPolicy, Highlighter, RenderPipeline, RenderSurface};
pub use state::EditState;
