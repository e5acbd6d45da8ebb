//! Building blocks shared by the wizard pages.
//!
//! Field components are bound to one draft field through a getter/setter
//! pair of plain `fn` pointers, so the same component serves every draft
//! type without per-field closures.

use contracts::shared::wizard::{Wizard, WizardError, WizardEvent, WizardForm};
use contracts::usecases::common::FileHandle;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Draft types a wizard page can hold in a signal.
pub trait DraftForm: WizardForm + Serialize + Default + Send + Sync + 'static {}

impl<F> DraftForm for F where F: WizardForm + Serialize + Default + Send + Sync + 'static {}

/// Metadata of the first file picked in an `<input type="file">`.
fn picked_file(ev: &leptos::ev::Event) -> Option<FileHandle> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let file = input.files()?.item(0)?;
    Some(FileHandle {
        name: file.name(),
        size_bytes: file.size() as u64,
        mime_type: file.type_(),
    })
}

/// Step titles with the active one highlighted.
#[component]
pub fn WizardSteps<F: DraftForm>(wizard: RwSignal<Wizard<F>>) -> impl IntoView {
    let active = Memo::new(move |_| wizard.with(|w| w.active_step()));

    view! {
        <ol class="wizard-steps">
            {F::steps()
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let title = F::step_title(*step);
                    view! {
                        <li
                            class="wizard-steps__item"
                            class:wizard-steps__item--active=move || active.get() == index
                            class:wizard-steps__item--done={move || active.get() > index}
                        >
                            <span class="wizard-steps__number">{index + 1}</span>
                            <span class="wizard-steps__title">{title}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn TextField<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                class="form-control"
                type={input_type.unwrap_or("text")}
                placeholder=placeholder
                prop:value=move || wizard.with(|w| get(&w.form))
                on:input=move |ev| wizard.update(|w| set(&mut w.form, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                class="form-control"
                rows="3"
                prop:value=move || wizard.with(|w| get(&w.form))
                on:input=move |ev| wizard.update(|w| set(&mut w.form, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn SelectField<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    label: &'static str,
    options: &'static [&'static str],
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                class="form-control"
                prop:value=move || wizard.with(|w| get(&w.form))
                on:change=move |ev| wizard.update(|w| set(&mut w.form, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|o| view! { <option value={*o}>{*o}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn CheckField<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView {
    view! {
        <label class="form-check">
            <input
                type="checkbox"
                prop:checked=move || wizard.with(|w| get(&w.form))
                on:change=move |ev| wizard.update(|w| set(&mut w.form, event_target_checked(&ev)))
            />
            <span>{label}</span>
        </label>
    }
}

/// Upload field. Only name, size and type of the picked file are kept.
#[component]
pub fn FileField<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    label: &'static str,
    get: fn(&F) -> Option<FileHandle>,
    set: fn(&mut F, Option<FileHandle>),
) -> impl IntoView {
    let picked = move || wizard.with(|w| get(&w.form));

    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="file-field">
                <label class="file-field__button">
                    {icon("upload")}
                    <span>"Choose file"</span>
                    <input
                        type="file"
                        style="display: none;"
                        on:change=move |ev| {
                            let file = picked_file(&ev);
                            wizard.update(|w| set(&mut w.form, file));
                        }
                    />
                </label>
                {move || match picked() {
                    Some(file) => view! {
                        <span class="file-field__name">
                            {icon("file-text")}
                            {format!("{} ({})", file.name, file.size_label())}
                        </span>
                        <button
                            class="button button--icon"
                            title="Remove"
                            on:click=move |_| wizard.update(|w| set(&mut w.form, None))
                        >
                            {icon("x")}
                        </button>
                    }
                    .into_any(),
                    None => view! { <span class="file-field__empty">"No file chosen"</span> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Read-only "label: value" line on a review step.
#[component]
pub fn ReviewRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "-".to_string() } else { value };
    view! {
        <div class="review-row">
            <span class="review-row__label">{label}</span>
            <span class="review-row__value">{value}</span>
        </div>
    }
}

/// Back / Next (Submit on the last step). A gated step that refuses to
/// advance lists its missing fields.
/// `on_complete` receives the generated reference.
#[component]
pub fn WizardNav<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    on_complete: Callback<String>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let on_next = move |_| {
        let mut result = None;
        wizard.update(|w| result = Some(w.next()));
        match result {
            Some(Ok(WizardEvent::Advanced { step })) => {
                log::debug!("wizard step {}", step);
                set_error.set(None);
            }
            Some(Ok(WizardEvent::Completed { reference })) => {
                set_error.set(None);
                on_complete.run(reference);
            }
            Some(Err(e @ WizardError::MissingFields { .. })) => {
                set_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    let on_back = move |_| {
        set_error.set(None);
        wizard.update(|w| w.back());
    };

    let next_label = tr("next");
    let submit_label = tr("submit");

    view! {
        <Show when=move || error.get().is_some()>
            <MessageBar intent=MessageBarIntent::Warning>
                {move || error.get().unwrap_or_default()}
            </MessageBar>
        </Show>

        <div class="wizard-nav">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || !wizard.with(|w| w.can_go_back()))
                on_click=on_back
            >
                {icon("chevron-left")}
                {tr("back")}
            </Button>
            <span class="wizard-nav__counter">
                {move || wizard.with(|w| format!("{} / {}", w.active_step() + 1, w.step_count()))}
            </span>
            <Button appearance=ButtonAppearance::Primary on_click=on_next>
                {move || if wizard.with(|w| w.is_last()) { submit_label() } else { next_label() }}
                {icon("chevron-right")}
            </Button>
        </div>
    }
}

/// Completion handler for a wizard page: keeps a JSON snapshot of the
/// submitted draft for the session and opens the confirmation.
pub fn submit_handler<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    submitted: RwSignal<Option<String>>,
) -> Callback<String> {
    let ctx = use_global_context();
    Callback::new(move |reference: String| {
        match wizard.with_untracked(|w| serde_json::to_value(&w.form)) {
            Ok(snapshot) => ctx.set_form_state(reference.clone(), snapshot),
            Err(e) => log::warn!("could not snapshot {}: {}", reference, e),
        }
        submitted.set(Some(reference));
    })
}

/// Confirmation shown after submit. Closing it starts a fresh draft.
#[component]
pub fn SubmittedModal<F: DraftForm>(
    wizard: RwSignal<Wizard<F>>,
    submitted: RwSignal<Option<String>>,
    title: &'static str,
) -> impl IntoView {
    let close = Callback::new(move |_: ()| {
        submitted.set(None);
        wizard.update(|w| w.reset(F::default()));
    });

    view! {
        {move || submitted.get().map(|reference| view! {
            <Modal title=title on_close=close>
                <div class="submitted">
                    <div class="submitted__icon">{icon("check")}</div>
                    <p>{tr("submitted")}</p>
                    <p>
                        {tr("reference")} ": "
                        <strong>{reference}</strong>
                    </p>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                        {tr("start_over")}
                    </Button>
                </div>
            </Modal>
        })}
    }
}
