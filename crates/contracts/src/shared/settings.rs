use serde::{Deserialize, Serialize};

use super::i18n::Language;
use super::theme::{DesignTokens, ThemeMode, MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};

pub const DEFAULT_FONT_SIZE_PX: u8 = 14;

/// User-adjustable display settings. Kept in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme_mode: ThemeMode,
    pub font_size_px: u8,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            language: Language::En,
        }
    }
}

impl Settings {
    pub fn set_font_size(&mut self, px: u8) {
        self.font_size_px = px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX);
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    pub fn tokens(&self) -> DesignTokens {
        DesignTokens::new(self.theme_mode, self.font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_clamped_on_set() {
        let mut s = Settings::default();
        s.set_font_size(30);
        assert_eq!(s.font_size_px, MAX_FONT_SIZE_PX);
        s.set_font_size(0);
        assert_eq!(s.font_size_px, MIN_FONT_SIZE_PX);
    }

    #[test]
    fn test_toggle_theme_changes_tokens() {
        let mut s = Settings::default();
        s.toggle_theme();
        assert_eq!(s.theme_mode, ThemeMode::Dark);
        assert_eq!(s.tokens().mode, ThemeMode::Dark);
    }
}
