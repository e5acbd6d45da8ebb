//! Design tokens derived from the light/dark mode and the font-size setting.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Used for the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn all() -> [ThemeMode; 2] {
        [ThemeMode::Light, ThemeMode::Dark]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Typography {
    pub font_family: &'static str,
    pub base_size_px: u8,
    pub heading_scale: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Spacing {
    pub unit_px: u8,
    pub sidebar_open_px: u16,
    pub sidebar_closed_px: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesignTokens {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
}

const LIGHT: Palette = Palette {
    primary: "#1565c0",
    secondary: "#00897b",
    background: "#f4f6f8",
    surface: "#ffffff",
    text: "#1c2430",
    text_muted: "#5f6b7a",
    border: "#dde3ea",
    error: "#c62828",
    success: "#2e7d32",
};

const DARK: Palette = Palette {
    primary: "#64b5f6",
    secondary: "#4db6ac",
    background: "#121820",
    surface: "#1c2430",
    text: "#e8edf2",
    text_muted: "#9aa7b5",
    border: "#2e3a48",
    error: "#ef9a9a",
    success: "#81c784",
};

pub const MIN_FONT_SIZE_PX: u8 = 12;
pub const MAX_FONT_SIZE_PX: u8 = 20;

impl DesignTokens {
    pub fn new(mode: ThemeMode, font_size_px: u8) -> Self {
        let palette = match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        };
        Self {
            mode,
            palette,
            typography: Typography {
                font_family: "'Roboto', 'Segoe UI', sans-serif",
                base_size_px: font_size_px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX),
                heading_scale: 1.25,
            },
            spacing: Spacing {
                unit_px: 8,
                sidebar_open_px: 240,
                sidebar_closed_px: 64,
            },
        }
    }

    /// CSS custom properties for the `<body>` style attribute.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let s = &self.spacing;
        [
            ("--color-primary", p.primary.to_string()),
            ("--color-secondary", p.secondary.to_string()),
            ("--color-background", p.background.to_string()),
            ("--color-surface", p.surface.to_string()),
            ("--color-text", p.text.to_string()),
            ("--color-text-muted", p.text_muted.to_string()),
            ("--color-border", p.border.to_string()),
            ("--color-error", p.error.to_string()),
            ("--color-success", p.success.to_string()),
            ("--font-family", t.font_family.to_string()),
            ("--font-size-base", format!("{}px", t.base_size_px)),
            ("--heading-scale", t.heading_scale.to_string()),
            ("--spacing-unit", format!("{}px", s.unit_px)),
            ("--sidebar-open", format!("{}px", s.sidebar_open_px)),
            ("--sidebar-closed", format!("{}px", s.sidebar_closed_px)),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        let light = DesignTokens::new(ThemeMode::Light, 14);
        let dark = DesignTokens::new(ThemeMode::Dark, 14);
        assert_ne!(light.palette.background, dark.palette.background);
        assert_eq!(dark.mode.as_str(), "dark");
    }

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(DesignTokens::new(ThemeMode::Light, 4).typography.base_size_px, 12);
        assert_eq!(DesignTokens::new(ThemeMode::Light, 99).typography.base_size_px, 20);
    }

    #[test]
    fn test_css_variables_contain_font_size() {
        let css = DesignTokens::new(ThemeMode::Dark, 16).css_variables();
        assert!(css.contains("--font-size-base: 16px;"));
        assert!(css.contains("--color-background: #121820;"));
    }
}
