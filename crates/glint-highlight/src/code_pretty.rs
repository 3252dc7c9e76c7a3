//! Classed-HTML code highlighting.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use glint_core::{HighlightError, Highlighter, LanguageId};

/// Grammar set shared by every highlight call. Loaded lazily on first
/// use, inside the first suspended highlight call.
pub static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class style shared between markup generation and CSS generation.
pub const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Token used to look up a grammar for a language, `None` for plain text.
fn grammar_token(language: LanguageId) -> Option<&'static str> {
    match language {
        LanguageId::JavaScript => Some("js"),
        LanguageId::TypeScript => Some("ts"),
        LanguageId::Python => Some("py"),
        LanguageId::Html => Some("html"),
        LanguageId::Css => Some("css"),
        LanguageId::Php => Some("php"),
        LanguageId::Json => Some("json"),
        LanguageId::Markdown => Some("md"),
        LanguageId::Yaml => Some("yaml"),
        LanguageId::Text => None,
    }
}

fn syntax_for(ss: &SyntaxSet, language: LanguageId) -> &SyntaxReference {
    let found = grammar_token(language).and_then(|token| ss.find_syntax_by_token(token));
    if found.is_none() && language != LanguageId::Text {
        // Grammar missing from the bundled set; plain text still escapes
        // the content correctly.
        tracing::debug!(language = %language, "no grammar for language, highlighting as plain text");
    }
    found.unwrap_or_else(|| ss.find_syntax_plain_text())
}

/// Write highlighted markup for `code` into `output`.
///
/// The output is a single `<pre class="glint-code">` block with spaced
/// scope classes; the generator escapes all content, including the plain
/// text fallback. Deterministic: identical input yields byte-identical
/// output.
pub fn write_highlighted(
    ss: &SyntaxSet,
    language: LanguageId,
    code: &str,
    output: &mut String,
) -> Result<(), HighlightError> {
    let syntax = syntax_for(ss, language);
    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, ss, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|e| HighlightError::Parse(e.to_string()))?;
    }

    output.push_str("<pre class=\"glint-code\"><code class=\"language-");
    output.push_str(language.as_str());
    output.push_str("\">");
    output.push_str(&generator.finalize());
    output.push_str("</code></pre>\n");
    Ok(())
}

/// Convenience wrapper over [`write_highlighted`] using the shared
/// grammar set.
pub fn highlight_html(code: &str, language: LanguageId) -> Result<String, HighlightError> {
    let mut output = String::with_capacity(code.len() * 2);
    write_highlighted(&SYNTAX_SET, language, code, &mut output)?;
    Ok(output)
}

/// [`Highlighter`] backed by syntect classed HTML.
///
/// The theme name is carried through the pipeline contract but does not
/// affect classed markup; theming is applied by the mounted stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntectHighlighter;

impl Highlighter for SyntectHighlighter {
    async fn highlight(
        &self,
        code: &str,
        language: LanguageId,
        _theme: &str,
    ) -> Result<String, HighlightError> {
        highlight_html(code, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_source_gets_scope_spans() {
        let html = highlight_html("print(1)\n", LanguageId::Python).unwrap();
        assert!(html.starts_with("<pre class=\"glint-code\"><code class=\"language-python\">"));
        assert!(html.contains("<span"));
        assert!(html.contains("print"));
    }

    #[test]
    fn output_is_deterministic() {
        let a = highlight_html("let x = 1;\n", LanguageId::JavaScript).unwrap();
        let b = highlight_html("let x = 1;\n", LanguageId::JavaScript).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn plain_text_escapes_markup() {
        let html = highlight_html("<script>alert(1)</script>", LanguageId::Text).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_input_yields_an_empty_block() {
        let html = highlight_html("", LanguageId::Text).unwrap();
        assert_eq!(html, "<pre class=\"glint-code\"><code class=\"language-text\"></code></pre>\n");
    }
}
