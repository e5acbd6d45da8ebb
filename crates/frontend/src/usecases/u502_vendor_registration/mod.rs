use contracts::shared::wizard::Wizard;
use contracts::usecases::common::FileHandle;
use contracts::usecases::u502_vendor_registration::{VendorDraft, VendorStep, BUSINESS_TYPES};
use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::common::{
    submit_handler, CheckField, FileField, ReviewRow, SelectField, SubmittedModal, TextAreaField,
    TextField, WizardNav, WizardSteps,
};

fn step_body(wizard: RwSignal<Wizard<VendorDraft>>, step: VendorStep) -> AnyView {
    match step {
        VendorStep::Business => view! {
            <TextField wizard=wizard label="Business name"
                get={|f: &VendorDraft| f.business_name.clone()} set={|f: &mut VendorDraft, v| f.business_name = v} />
            <SelectField wizard=wizard label="Business type" options=BUSINESS_TYPES
                get={|f: &VendorDraft| f.business_type.clone()} set={|f: &mut VendorDraft, v| f.business_type = v} />
            <TextField wizard=wizard label="GSTIN" placeholder="27AAPFU0939F1ZV"
                get={|f: &VendorDraft| f.gstin.clone()} set={|f: &mut VendorDraft, v| f.gstin = v.to_uppercase()} />
            <TextField wizard=wizard label="PAN" placeholder="AAPFU0939F"
                get={|f: &VendorDraft| f.pan.clone()} set={|f: &mut VendorDraft, v| f.pan = v.to_uppercase()} />
        }
        .into_any(),
        VendorStep::Contact => view! {
            <TextField wizard=wizard label="Contact person"
                get={|f: &VendorDraft| f.contact_person.clone()} set={|f: &mut VendorDraft, v| f.contact_person = v} />
            <TextField wizard=wizard label="Phone" input_type="tel"
                get={|f: &VendorDraft| f.phone.clone()} set={|f: &mut VendorDraft, v| f.phone = v} />
            <TextField wizard=wizard label="Email" input_type="email"
                get={|f: &VendorDraft| f.email.clone()} set={|f: &mut VendorDraft, v| f.email = v} />
            <TextAreaField wizard=wizard label="Business address"
                get={|f: &VendorDraft| f.address.clone()} set={|f: &mut VendorDraft, v| f.address = v} />
        }
        .into_any(),
        VendorStep::Bank => view! {
            <TextField wizard=wizard label="Account holder"
                get={|f: &VendorDraft| f.account_holder.clone()} set={|f: &mut VendorDraft, v| f.account_holder = v} />
            <TextField wizard=wizard label="Account number"
                get={|f: &VendorDraft| f.account_number.clone()} set={|f: &mut VendorDraft, v| f.account_number = v} />
            <TextField wizard=wizard label="IFSC" placeholder="HDFC0001234"
                get={|f: &VendorDraft| f.ifsc.clone()} set={|f: &mut VendorDraft, v| f.ifsc = v.to_uppercase()} />
            <TextField wizard=wizard label="Bank name"
                get={|f: &VendorDraft| f.bank_name.clone()} set={|f: &mut VendorDraft, v| f.bank_name = v} />
        }
        .into_any(),
        VendorStep::Documents => view! {
            <FileField wizard=wizard label="GST certificate"
                get={|f: &VendorDraft| f.gst_certificate.clone()} set={|f: &mut VendorDraft, v| f.gst_certificate = v} />
            <FileField wizard=wizard label="PAN card"
                get={|f: &VendorDraft| f.pan_card.clone()} set={|f: &mut VendorDraft, v| f.pan_card = v} />
            <FileField wizard=wizard label="Cancelled cheque (optional)"
                get={|f: &VendorDraft| f.cancelled_cheque.clone()} set={|f: &mut VendorDraft, v| f.cancelled_cheque = v} />
        }
        .into_any(),
        VendorStep::Review => review(wizard),
    }
}

fn review(wizard: RwSignal<Wizard<VendorDraft>>) -> AnyView {
    let draft = wizard.with_untracked(|w| w.form.clone());
    let file_name = |f: &Option<FileHandle>| f.as_ref().map(|f| f.name.clone()).unwrap_or_default();

    view! {
        <div class="review-section">
            <h3>"Business"</h3>
            <ReviewRow label="Business name" value=draft.business_name.clone() />
            <ReviewRow label="Business type" value=draft.business_type.clone() />
            <ReviewRow label="GSTIN" value=draft.gstin.clone() />
            <ReviewRow label="PAN" value=draft.pan.clone() />
        </div>
        <div class="review-section">
            <h3>"Contact"</h3>
            <ReviewRow label="Contact person" value=draft.contact_person.clone() />
            <ReviewRow label="Phone" value=draft.phone.clone() />
            <ReviewRow label="Email" value=draft.email.clone() />
            <ReviewRow label="Address" value=draft.address.clone() />
        </div>
        <div class="review-section">
            <h3>"Bank"</h3>
            <ReviewRow label="Account holder" value=draft.account_holder.clone() />
            <ReviewRow label="Account number" value=draft.masked_account() />
            <ReviewRow label="IFSC" value=draft.ifsc.clone() />
            <ReviewRow label="Bank" value=draft.bank_name.clone() />
        </div>
        <div class="review-section">
            <h3>"Documents"</h3>
            <ReviewRow label="GST certificate" value={file_name(&draft.gst_certificate)} />
            <ReviewRow label="PAN card" value={file_name(&draft.pan_card)} />
            <ReviewRow label="Cancelled cheque" value={file_name(&draft.cancelled_cheque)} />
        </div>
        <CheckField wizard=wizard label="I accept the vendor terms and conditions"
            get={|f: &VendorDraft| f.accept_terms} set={|f: &mut VendorDraft, v| f.accept_terms = v} />
    }
    .into_any()
}

/// LAW-MIS VENDOR onboarding. Every step must be complete before moving on.
#[component]
pub fn VendorRegistrationPage() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(VendorDraft::default()));
    let submitted = RwSignal::new(None::<String>);
    let on_complete = submit_handler(wizard, submitted);
    let step = Memo::new(move |_| wizard.with(|w| w.current_step()));

    view! {
        <PageFrame page_id="u502_vendor_registration--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=Signal::derive(tr("vendor_registration")) />

            <div class="page__content">
                <WizardSteps wizard=wizard />
                <div class="wizard-body">
                    {move || step_body(wizard, step.get())}
                </div>
                <WizardNav wizard=wizard on_complete=on_complete />
            </div>

            <SubmittedModal wizard=wizard submitted=submitted title="Vendor registration submitted" />
        </PageFrame>
    }
}
