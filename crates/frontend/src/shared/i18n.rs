use crate::shared::theme::use_settings;
use contracts::shared::i18n::translate;

/// Reactive translation of `key` in the current settings language.
pub fn tr(key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let settings = use_settings();
    move || translate(settings.language(), key)
}
