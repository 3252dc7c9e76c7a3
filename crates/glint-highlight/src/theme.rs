//! Theme configuration for the overlay.

use smol_str::SmolStr;

/// Name of the fixed session theme when the host does not pick one.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Visual configuration for one overlay session.
#[derive(Debug, Clone)]
pub struct OverlayTheme {
    /// Key into syntect's built-in theme set.
    pub syntect_theme_name: SmolStr,
    pub fonts: FontScheme,
}

#[derive(Debug, Clone)]
pub struct FontScheme {
    pub monospace: SmolStr,
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self {
            syntect_theme_name: SmolStr::new_static(DEFAULT_THEME),
            fonts: FontScheme::default(),
        }
    }
}

impl OverlayTheme {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self { syntect_theme_name: name.into(), ..Self::default() }
    }
}

impl Default for FontScheme {
    fn default() -> Self {
        Self {
            monospace: SmolStr::new(
                "'IBM Plex Mono', 'Cascadia Code', 'Roboto Mono', Consolas, monospace",
            ),
        }
    }
}
