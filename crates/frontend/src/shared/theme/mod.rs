//! Theme and display settings.
//!
//! Theme mode, font size and language live in one in-memory [`Settings`]
//! value. The derived design tokens are written to `<body>` as CSS custom
//! properties plus a `data-theme` attribute. Nothing is persisted: a page
//! reload starts from the defaults.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use contracts::shared::i18n::Language;
use contracts::shared::settings::Settings;
use contracts::shared::theme::{DesignTokens, ThemeMode};
use leptos::prelude::*;
use web_sys::window;

/// Apply design tokens to the document body.
fn apply_tokens(tokens: &DesignTokens) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("style", &tokens.css_variables());
    let _ = body.set_attribute("data-theme", tokens.mode.as_str());
}

/// Settings context type.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<Settings>,
}

impl SettingsContext {
    pub fn new() -> Self {
        Self {
            settings: RwSignal::new(Settings::default()),
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.with(|s| s.theme_mode)
    }

    pub fn font_size_px(&self) -> u8 {
        self.settings.with(|s| s.font_size_px)
    }

    pub fn language(&self) -> Language {
        self.settings.with(|s| s.language)
    }

    pub fn set_theme_mode(&self, mode: ThemeMode) {
        self.settings.update(|s| s.theme_mode = mode);
    }

    pub fn toggle_theme(&self) {
        self.settings.update(|s| s.toggle_theme());
    }

    pub fn set_font_size(&self, px: u8) {
        self.settings.update(|s| s.set_font_size(px));
    }

    pub fn set_language(&self, language: Language) {
        log::debug!("language -> {}", language.code());
        self.settings.update(|s| s.language = language);
    }

    pub fn reset(&self) {
        self.settings.set(Settings::default());
    }
}

impl Default for SettingsContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides settings context to children components and keeps the body
/// styling in sync with it.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let context = SettingsContext::new();
    provide_context(context);

    Effect::new(move |_| {
        let tokens = context.settings.with(|s| s.tokens());
        apply_tokens(&tokens);
    });

    children()
}

/// Hook to use the settings context.
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
        .expect("SettingsContext not found. Wrap your app with ThemeProvider.")
}
