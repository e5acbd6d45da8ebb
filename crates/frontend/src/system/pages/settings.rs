use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::theme::use_settings;
use contracts::shared::i18n::Language;
use contracts::shared::theme::{ThemeMode, MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};
use leptos::prelude::*;
use thaw::*;

/// Submitted wizard drafts of this session as (reference, pretty JSON), sorted
/// by reference descending.
fn submitted_rows(states: &std::collections::HashMap<String, serde_json::Value>) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = states
        .iter()
        .map(|(reference, draft)| {
            let pretty = serde_json::to_string_pretty(draft).unwrap_or_default();
            (reference.clone(), pretty)
        })
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = use_settings();
    let ctx = use_global_context();

    // Radio groups work on strings; mirror them into the settings context.
    let theme_value = RwSignal::new(settings.settings.with_untracked(|s| s.theme_mode.as_str().to_string()));
    let language_value = RwSignal::new(settings.settings.with_untracked(|s| s.language.code().to_string()));

    Effect::new(move |prev: Option<String>| {
        let current = theme_value.get();
        if prev.is_some() {
            settings.set_theme_mode(ThemeMode::from_str(&current));
        }
        current
    });

    Effect::new(move |prev: Option<String>| {
        let current = language_value.get();
        if prev.is_some() {
            if let Some(language) = Language::parse(&current) {
                settings.set_language(language);
            }
        }
        current
    });

    // Keep the radios in step with changes made elsewhere (header toggle, reset).
    Effect::new(move |_| {
        let mode = settings.theme_mode().as_str().to_string();
        if theme_value.get_untracked() != mode {
            theme_value.set(mode);
        }
        let code = settings.language().code().to_string();
        if language_value.get_untracked() != code {
            language_value.set(code);
        }
    });

    let on_font_size = move |ev: leptos::ev::Event| {
        if let Ok(px) = event_target_value(&ev).parse::<u8>() {
            settings.set_font_size(px);
        }
    };

    let light = tr("light");
    let dark = tr("dark");

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=Signal::derive(tr("settings"))>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| settings.reset()>
                    {tr("reset")}
                </Button>
            </PageHeader>

            <div class="page__content form-narrow">
                <Flex vertical=true gap=FlexGap::Large>
                    <div class="form-group">
                        <Label>{tr("theme")}</Label>
                        <RadioGroup value=theme_value>
                            <Radio value={ThemeMode::Light.as_str()} label={light()} />
                            <Radio value={ThemeMode::Dark.as_str()} label={dark()} />
                        </RadioGroup>
                    </div>

                    <div class="form-group">
                        <Label>
                            {tr("font_size")} ": " {move || format!("{}px", settings.font_size_px())}
                        </Label>
                        <input
                            type="range"
                            min={MIN_FONT_SIZE_PX.to_string()}
                            max={MAX_FONT_SIZE_PX.to_string()}
                            step="1"
                            prop:value=move || settings.font_size_px().to_string()
                            on:input=on_font_size
                        />
                    </div>

                    <div class="form-group">
                        <Label>{tr("language")}</Label>
                        <RadioGroup value=language_value>
                            {Language::all()
                                .into_iter()
                                .map(|l| view! { <Radio value={l.code()} label={l.display_name()} /> })
                                .collect_view()}
                        </RadioGroup>
                    </div>
                </Flex>

                <h3 class="section-title">{tr("submitted_forms")}</h3>
                {move || {
                    let rows = ctx.form_states.with(submitted_rows);
                    if rows.is_empty() {
                        view! { <div class="empty-state">{tr("no_records")}</div> }.into_any()
                    } else {
                        rows.into_iter()
                            .map(|(reference, pretty)| view! {
                                <details class="submitted-form">
                                    <summary>{reference}</summary>
                                    <pre>{pretty}</pre>
                                </details>
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_submitted_rows_sorted_by_reference() {
        let states = HashMap::from([
            ("SUP-0001".to_string(), serde_json::json!({ "company_name": "A" })),
            ("VND-0002".to_string(), serde_json::json!({ "business_name": "B" })),
        ]);
        let rows = submitted_rows(&states);
        assert_eq!(rows[0].0, "VND-0002");
        assert!(rows[1].1.contains("company_name"));
    }
}
