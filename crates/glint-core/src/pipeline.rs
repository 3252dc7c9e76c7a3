//! Highlight-then-swap orchestration.
//!
//! The pipeline owns the current [`SourceDocument`] and drives two seams:
//! a [`Highlighter`] collaborator that turns text into markup, and a
//! [`RenderSurface`] that swaps markup into the display region and adapts
//! the surrounding chrome. Rendering and style adaptation are separate
//! steps so each is testable without a live DOM.
//!
//! All work runs on a single event loop; there is no queuing or
//! cancellation of in-flight calls. What happens when calls race is
//! governed by [`ApplyPolicy`].

use std::cell::{Cell, RefCell};

use smol_str::SmolStr;

use crate::document::SourceDocument;
use crate::error::HighlightError;
use crate::language::{LanguageId, classify};

/// The external highlighting collaborator.
///
/// The call may be slow (grammar loading) and must be awaited; the DOM
/// swap only happens after it resolves. Everything runs on the page's
/// single event loop, so no `Send` bound is wanted here.
#[allow(async_fn_in_trait)]
pub trait Highlighter {
    async fn highlight(
        &self,
        code: &str,
        language: LanguageId,
        theme: &str,
    ) -> Result<String, HighlightError>;
}

/// The display region and surrounding chrome owned by the pipeline.
pub trait RenderSurface {
    /// Replace the display region's contents wholesale with new markup.
    /// Old markup is fully discarded; stale and fresh markup never
    /// interleave.
    fn swap_view(&self, markup: &str);

    /// Propagate the rendered block's effective style outward (body and
    /// edit-pane background). Invoked only after `swap_view`, since style
    /// computation requires the markup to be attached.
    fn adapt_chrome(&self);
}

/// What to do when concurrent highlight calls resolve out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyPolicy {
    /// Reference behavior: whichever call resolves last wins the display,
    /// even if a later-issued call already applied. Can show stale output
    /// under a fast typist.
    #[default]
    CompletionOrder,
    /// Hardened behavior: results carrying a sequence number lower than
    /// the last applied one are discarded.
    LatestIssued,
}

struct OpenDocument {
    doc: SourceDocument,
    /// Fixed at open time; edits never re-derive it from content.
    language: LanguageId,
}

/// Orchestrates classify → highlight → swap → adapt for one page view.
pub struct RenderPipeline<H, S> {
    highlighter: H,
    surface: S,
    theme: SmolStr,
    policy: ApplyPolicy,
    current: RefCell<Option<OpenDocument>>,
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl<H: Highlighter, S: RenderSurface> RenderPipeline<H, S> {
    pub fn new(highlighter: H, surface: S, theme: impl Into<SmolStr>, policy: ApplyPolicy) -> Self {
        Self {
            highlighter,
            surface,
            theme: theme.into(),
            policy,
            current: RefCell::new(None),
            issued: Cell::new(0),
            applied: Cell::new(0),
        }
    }

    /// Open a document and render it, replacing any previous document in
    /// full. Exactly one view swap per successful call.
    pub async fn render(&self, doc: SourceDocument) -> Result<(), HighlightError> {
        let language = classify(&doc.file_name);
        let content = doc.content.clone();
        tracing::debug!(file = %doc.file_name, language = %language, "opening document");
        *self.current.borrow_mut() = Some(OpenDocument { doc, language });
        self.run(content, language).await
    }

    /// Re-render edited content against the language fixed when the
    /// current document was opened. No-op when nothing is open.
    pub async fn rerender_edited(&self, content: String) -> Result<(), HighlightError> {
        let language = {
            let mut current = self.current.borrow_mut();
            let Some(open) = current.as_mut() else {
                return Ok(());
            };
            open.doc.content = content.clone();
            open.language
        };
        self.run(content, language).await
    }

    /// The language of the currently open document, if any.
    pub fn current_language(&self) -> Option<LanguageId> {
        self.current.borrow().as_ref().map(|open| open.language)
    }

    /// The current document content, if any.
    pub fn current_content(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|open| open.doc.content.clone())
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    async fn run(&self, content: String, language: LanguageId) -> Result<(), HighlightError> {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);

        match self.highlighter.highlight(&content, language, &self.theme).await {
            Ok(markup) => {
                if self.policy == ApplyPolicy::LatestIssued && seq < self.applied.get() {
                    tracing::debug!(seq, applied = self.applied.get(), "discarding superseded render");
                    return Ok(());
                }
                self.applied.set(seq);
                self.surface.swap_view(&markup);
                self.surface.adapt_chrome();
                Ok(())
            }
            Err(err) => {
                // Previous view stays in place; the failure is terminal
                // for this attempt only.
                tracing::warn!(error = %err, language = %language, "highlight failed, keeping previous view");
                Err(err)
            }
        }
    }
}
