//! File-name to language classification.

/// A logical source-language tag used to select a highlighting grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Python,
    Html,
    Css,
    Php,
    Json,
    Markdown,
    Yaml,
    /// Fallback for unknown or missing extensions.
    #[default]
    Text,
}

impl LanguageId {
    /// The logical tag for this language, as exposed to hosts and used in
    /// `language-*` markup classes.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Python => "python",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Php => "php",
            LanguageId::Json => "json",
            LanguageId::Markdown => "markdown",
            LanguageId::Yaml => "yaml",
            LanguageId::Text => "text",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a file name to a [`LanguageId`] by its extension.
///
/// The extension is the substring after the final `.`, matched
/// case-insensitively. Unknown or missing extensions classify as
/// [`LanguageId::Text`]. Pure and total: any input yields a language.
pub fn classify(file_name: &str) -> LanguageId {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return LanguageId::Text;
    };

    match ext.to_ascii_lowercase().as_str() {
        "js" => LanguageId::JavaScript,
        "ts" => LanguageId::TypeScript,
        "py" => LanguageId::Python,
        "html" => LanguageId::Html,
        "css" => LanguageId::Css,
        "php" => LanguageId::Php,
        "json" => LanguageId::Json,
        "md" => LanguageId::Markdown,
        "yaml" | "yml" => LanguageId::Yaml,
        _ => LanguageId::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_classify() {
        let cases = [
            ("file.js", LanguageId::JavaScript),
            ("file.ts", LanguageId::TypeScript),
            ("file.py", LanguageId::Python),
            ("file.html", LanguageId::Html),
            ("file.css", LanguageId::Css),
            ("file.php", LanguageId::Php),
            ("file.json", LanguageId::Json),
            ("file.md", LanguageId::Markdown),
            ("file.yaml", LanguageId::Yaml),
            ("file.yml", LanguageId::Yaml),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(name), expected, "{name}");
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(classify("file.JS"), LanguageId::JavaScript);
        assert_eq!(classify("file.Js"), LanguageId::JavaScript);
        assert_eq!(classify("file.PY"), LanguageId::Python);
    }

    #[test]
    fn missing_or_empty_extension_is_text() {
        assert_eq!(classify("file"), LanguageId::Text);
        assert_eq!(classify("file."), LanguageId::Text);
        assert_eq!(classify(""), LanguageId::Text);
    }

    #[test]
    fn last_extension_segment_wins() {
        assert_eq!(classify("a.b.py"), LanguageId::Python);
        assert_eq!(classify("archive.tar.js"), LanguageId::JavaScript);
    }

    #[test]
    fn unknown_extension_is_text() {
        assert_eq!(classify("file.xyz"), LanguageId::Text);
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(LanguageId::JavaScript.to_string(), "javascript");
        assert_eq!(LanguageId::Text.to_string(), "text");
    }
}
