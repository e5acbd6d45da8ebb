use contracts::shared::wizard::Wizard;
use contracts::usecases::u501_workshop_registration::{WorkshopDraft, WorkshopStep, WORKSHOP_TYPES};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::common::{
    submit_handler, CheckField, FileField, ReviewRow, SelectField, SubmittedModal, TextAreaField,
    TextField, WizardNav, WizardSteps,
};

fn step_body(wizard: RwSignal<Wizard<WorkshopDraft>>, step: WorkshopStep) -> AnyView {
    match step {
        WorkshopStep::BasicDetails => view! {
            <TextField wizard=wizard label="Workshop name"
                get={|f: &WorkshopDraft| f.workshop_name.clone()} set={|f: &mut WorkshopDraft, v| f.workshop_name = v} />
            <SelectField wizard=wizard label="Workshop type" options=WORKSHOP_TYPES
                get={|f: &WorkshopDraft| f.workshop_type.clone()} set={|f: &mut WorkshopDraft, v| f.workshop_type = v} />
            <TextField wizard=wizard label="Registration number"
                get={|f: &WorkshopDraft| f.registration_no.clone()} set={|f: &mut WorkshopDraft, v| f.registration_no = v} />
            <TextField wizard=wizard label="Established (year)" input_type="number" placeholder="2015"
                get={|f: &WorkshopDraft| f.established_year.clone()} set={|f: &mut WorkshopDraft, v| f.established_year = v} />
        }
        .into_any(),
        WorkshopStep::Address => view! {
            <TextAreaField wizard=wizard label="Address"
                get={|f: &WorkshopDraft| f.address_line.clone()} set={|f: &mut WorkshopDraft, v| f.address_line = v} />
            <TextField wizard=wizard label="City"
                get={|f: &WorkshopDraft| f.city.clone()} set={|f: &mut WorkshopDraft, v| f.city = v} />
            <TextField wizard=wizard label="District"
                get={|f: &WorkshopDraft| f.district.clone()} set={|f: &mut WorkshopDraft, v| f.district = v} />
            <TextField wizard=wizard label="State"
                get={|f: &WorkshopDraft| f.state.clone()} set={|f: &mut WorkshopDraft, v| f.state = v} />
            <TextField wizard=wizard label="Pincode" placeholder="411001"
                get={|f: &WorkshopDraft| f.pincode.clone()} set={|f: &mut WorkshopDraft, v| f.pincode = v} />
        }
        .into_any(),
        WorkshopStep::Owner => view! {
            <TextField wizard=wizard label="Owner name"
                get={|f: &WorkshopDraft| f.owner_name.clone()} set={|f: &mut WorkshopDraft, v| f.owner_name = v} />
            <TextField wizard=wizard label="Owner phone" input_type="tel"
                get={|f: &WorkshopDraft| f.owner_phone.clone()} set={|f: &mut WorkshopDraft, v| f.owner_phone = v} />
            <TextField wizard=wizard label="Owner email" input_type="email"
                get={|f: &WorkshopDraft| f.owner_email.clone()} set={|f: &mut WorkshopDraft, v| f.owner_email = v} />
            <TextField wizard=wizard label="ID proof number" placeholder="Aadhaar / PAN"
                get={|f: &WorkshopDraft| f.owner_id_proof.clone()} set={|f: &mut WorkshopDraft, v| f.owner_id_proof = v} />
        }
        .into_any(),
        WorkshopStep::Facilities => view! {
            <TextField wizard=wizard label="Inspection bays" input_type="number"
                get={|f: &WorkshopDraft| f.inspection_bays.to_string()}
                set={|f: &mut WorkshopDraft, v| f.inspection_bays = v.trim().parse().unwrap_or(0)} />
            <CheckField wizard=wizard label="Brake tester"
                get={|f: &WorkshopDraft| f.has_brake_tester} set={|f: &mut WorkshopDraft, v| f.has_brake_tester = v} />
            <CheckField wizard=wizard label="Emission analyzer"
                get={|f: &WorkshopDraft| f.has_emission_analyzer} set={|f: &mut WorkshopDraft, v| f.has_emission_analyzer = v} />
            <CheckField wizard=wizard label="Headlight tester"
                get={|f: &WorkshopDraft| f.has_headlight_tester} set={|f: &mut WorkshopDraft, v| f.has_headlight_tester = v} />
        }
        .into_any(),
        WorkshopStep::Documents => view! {
            <FileField wizard=wizard label="Workshop license"
                get={|f: &WorkshopDraft| f.license_doc.clone()} set={|f: &mut WorkshopDraft, v| f.license_doc = v} />
            <FileField wizard=wizard label="Insurance certificate"
                get={|f: &WorkshopDraft| f.insurance_doc.clone()} set={|f: &mut WorkshopDraft, v| f.insurance_doc = v} />
        }
        .into_any(),
        WorkshopStep::Review => review(wizard),
    }
}

fn review(wizard: RwSignal<Wizard<WorkshopDraft>>) -> AnyView {
    let draft = wizard.with_untracked(|w| w.form.clone());
    let missing = draft.all_missing();
    let file_name = |f: &Option<contracts::usecases::common::FileHandle>| {
        f.as_ref().map(|f| f.name.clone()).unwrap_or_default()
    };

    view! {
        {(!missing.is_empty()).then(|| view! {
            <MessageBar intent=MessageBarIntent::Warning>
                {format!("Still missing: {}", missing.join(", "))}
            </MessageBar>
        })}
        <div class="review-section">
            <h3>"Basic Details"</h3>
            <ReviewRow label="Workshop name" value=draft.workshop_name.clone() />
            <ReviewRow label="Workshop type" value=draft.workshop_type.clone() />
            <ReviewRow label="Registration number" value=draft.registration_no.clone() />
            <ReviewRow label="Established" value=draft.established_year.clone() />
        </div>
        <div class="review-section">
            <h3>"Address"</h3>
            <ReviewRow
                label="Address"
                value={format!("{}, {}, {}, {} {}", draft.address_line, draft.city, draft.district, draft.state, draft.pincode)}
            />
        </div>
        <div class="review-section">
            <h3>"Owner"</h3>
            <ReviewRow label="Name" value=draft.owner_name.clone() />
            <ReviewRow label="Phone" value=draft.owner_phone.clone() />
            <ReviewRow label="Email" value=draft.owner_email.clone() />
        </div>
        <div class="review-section">
            <h3>"Facilities"</h3>
            <ReviewRow label="Inspection bays" value=draft.inspection_bays.to_string() />
            <ReviewRow label="Equipment" value=draft.facilities_summary() />
        </div>
        <div class="review-section">
            <h3>"Documents"</h3>
            <ReviewRow label="License" value={file_name(&draft.license_doc)} />
            <ReviewRow label="Insurance" value={file_name(&draft.insurance_doc)} />
        </div>
    }
    .into_any()
}

/// LAW-MIS USER: register a new workshop. Steps are not gated; the review
/// step lists whatever is still empty.
#[component]
pub fn WorkshopRegistrationPage() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(WorkshopDraft::default()));
    let submitted = RwSignal::new(None::<String>);
    let on_complete = submit_handler(wizard, submitted);

    // Rebuild the step body only when the step changes, not on every keystroke.
    let step = Memo::new(move |_| wizard.with(|w| w.current_step()));

    view! {
        <PageFrame page_id="u501_workshop_registration--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=Signal::derive(tr("add_workshop")) />

            <div class="page__content">
                <WizardSteps wizard=wizard />
                <div class="wizard-body">
                    {move || step_body(wizard, step.get())}
                </div>
                <WizardNav wizard=wizard on_complete=on_complete />
            </div>

            <SubmittedModal wizard=wizard submitted=submitted title="Workshop registered" />
        </PageFrame>
    }
}
