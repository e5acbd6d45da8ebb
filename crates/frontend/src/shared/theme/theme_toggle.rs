use super::use_settings;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use contracts::shared::theme::ThemeMode;
use leptos::prelude::*;

/// Header button switching between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let settings = use_settings();
    let title = tr("theme");

    view! {
        <button
            class="top-header__icon-btn"
            title=title
            on:click=move |_| settings.toggle_theme()
        >
            {move || match settings.theme_mode() {
                ThemeMode::Light => icon("moon"),
                ThemeMode::Dark => icon("sun"),
            }}
        </button>
    }
}
