//! Stylesheet generation from built-in themes. Native only; the wasm
//! build receives the generated text as a bundled asset from the host.

use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::html::css_for_theme_with_class_style;

use glint_core::HighlightError;

use crate::code_pretty::CLASS_STYLE;
use crate::theme::OverlayTheme;

fn resolve(name: &str) -> Result<Theme, HighlightError> {
    let set = ThemeSet::load_defaults();
    set.themes
        .get(name)
        .cloned()
        .ok_or_else(|| HighlightError::UnknownTheme(name.into()))
}

fn color_to_css(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Background color of a named theme as a CSS hex string.
pub fn theme_background(name: &str) -> Result<Option<String>, HighlightError> {
    let theme = resolve(name)?;
    Ok(theme.settings.background.map(color_to_css))
}

/// Full overlay stylesheet for a theme: layout and pane rules plus the
/// scope-class rules emitted by syntect.
pub fn stylesheet_for_theme(theme: &OverlayTheme) -> Result<String, HighlightError> {
    let resolved = resolve(&theme.syntect_theme_name)?;
    let background = resolved
        .settings
        .background
        .map(color_to_css)
        .unwrap_or_else(|| "#2b303b".to_string());
    let foreground = resolved
        .settings
        .foreground
        .map(color_to_css)
        .unwrap_or_else(|| "#c0c5ce".to_string());

    let scope_css = css_for_theme_with_class_style(&resolved, CLASS_STYLE)
        .map_err(|e| HighlightError::Stylesheet(e.to_string()))?;

    Ok(format!(
        r#".glint-root {{
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}}

.glint-root.glint-split-vertical.glint-editing {{
    display: grid;
    grid-template-columns: 1fr 1fr;
}}

.glint-root.glint-split-vertical.glint-editing .glint-toolbar {{
    grid-column: 1 / -1;
}}

.glint-view {{
    min-height: 2rem;
}}

.glint-edit {{
    display: none;
}}

.glint-root.glint-editing .glint-edit {{
    display: block;
}}

.glint-code {{
    background-color: {background};
    color: {foreground};
    font-family: {mono};
    font-size: 14px;
    padding: 10px;
    margin: 0;
    overflow: auto;
}}

.glint-input {{
    width: 100%;
    height: 100%;
    min-height: 10rem;
    resize: none;
    background: {background};
    color: {foreground};
    font-family: {mono};
    font-size: 14px;
    border: none;
    outline: none;
    padding: 10px;
    box-sizing: border-box;
}}

.glint-dropzone {{
    border: 2px dashed #ccc;
    padding: 20px;
    margin-top: 20px;
    text-align: center;
}}

.glint-drop-active .glint-dropzone {{
    background: rgba(128, 128, 128, 0.25);
}}

.glint-toolbar button {{
    font: inherit;
    margin-right: 0.25rem;
}}

{scope_css}"#,
        background = background,
        foreground = foreground,
        mono = theme.fonts.monospace,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn default_theme_background_is_known() {
        let bg = theme_background(DEFAULT_THEME).unwrap();
        assert_eq!(bg.as_deref(), Some("#2b303b"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let err = theme_background("no-such-theme").unwrap_err();
        assert_eq!(err, HighlightError::UnknownTheme("no-such-theme".into()));
    }

    #[test]
    fn stylesheet_contains_layout_and_scope_rules() {
        let css = stylesheet_for_theme(&OverlayTheme::default()).unwrap();
        assert!(css.contains(".glint-code"));
        assert!(css.contains("background-color: #2b303b"));
        assert!(css.contains(".glint-dropzone"));
        // syntect scope rules come after the layout rules.
        assert!(css.contains("keyword"));
    }

    #[test]
    fn stylesheet_is_deterministic() {
        let theme = OverlayTheme::default();
        assert_eq!(
            stylesheet_for_theme(&theme).unwrap(),
            stylesheet_for_theme(&theme).unwrap()
        );
    }
}
