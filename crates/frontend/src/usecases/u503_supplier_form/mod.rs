use contracts::shared::wizard::Wizard;
use contracts::usecases::u503_supplier_form::{SupplierDraft, SupplierStep, PAYMENT_TERMS};
use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::common::{
    submit_handler, CheckField, ReviewRow, SelectField, SubmittedModal, TextField, WizardNav,
    WizardSteps,
};

fn step_body(wizard: RwSignal<Wizard<SupplierDraft>>, step: SupplierStep) -> AnyView {
    match step {
        SupplierStep::Company => view! {
            <TextField wizard=wizard label="Company name"
                get={|f: &SupplierDraft| f.company_name.clone()} set={|f: &mut SupplierDraft, v| f.company_name = v} />
            <TextField wizard=wizard label="Registration number"
                get={|f: &SupplierDraft| f.registration_no.clone()} set={|f: &mut SupplierDraft, v| f.registration_no = v} />
            <TextField wizard=wizard label="Website" input_type="url" placeholder="https://"
                get={|f: &SupplierDraft| f.website.clone()} set={|f: &mut SupplierDraft, v| f.website = v} />
        }
        .into_any(),
        SupplierStep::Contact => view! {
            <TextField wizard=wizard label="Contact name"
                get={|f: &SupplierDraft| f.contact_name.clone()} set={|f: &mut SupplierDraft, v| f.contact_name = v} />
            <TextField wizard=wizard label="Phone" input_type="tel"
                get={|f: &SupplierDraft| f.phone.clone()} set={|f: &mut SupplierDraft, v| f.phone = v} />
            <TextField wizard=wizard label="Email" input_type="email"
                get={|f: &SupplierDraft| f.email.clone()} set={|f: &mut SupplierDraft, v| f.email = v} />
        }
        .into_any(),
        SupplierStep::Products => view! {
            <TextField wizard=wizard label="Product categories" placeholder="Tyres, Batteries, Lubricants"
                get={|f: &SupplierDraft| f.product_categories.clone()} set={|f: &mut SupplierDraft, v| f.product_categories = v} />
            <TextField wizard=wizard label="Lead time (days)" input_type="number"
                get={|f: &SupplierDraft| f.lead_time_days.clone()} set={|f: &mut SupplierDraft, v| f.lead_time_days = v} />
            <TextField wizard=wizard label="Minimum order quantity" input_type="number"
                get={|f: &SupplierDraft| f.min_order_qty.clone()} set={|f: &mut SupplierDraft, v| f.min_order_qty = v} />
        }
        .into_any(),
        SupplierStep::Terms => terms(wizard),
    }
}

fn terms(wizard: RwSignal<Wizard<SupplierDraft>>) -> AnyView {
    let draft = wizard.with_untracked(|w| w.form.clone());

    view! {
        <div class="review-section">
            <h3>"Summary"</h3>
            <ReviewRow label="Company" value=draft.company_name.clone() />
            <ReviewRow label="Contact" value={format!("{} {} {}", draft.contact_name, draft.phone, draft.email)} />
            <ReviewRow label="Categories" value={draft.categories().join(", ")} />
            <ReviewRow label="Lead time" value={format!("{} days", draft.lead_time_days.trim())} />
        </div>
        <SelectField wizard=wizard label="Payment terms" options=PAYMENT_TERMS
            get={|f: &SupplierDraft| f.payment_terms.clone()} set={|f: &mut SupplierDraft, v| f.payment_terms = v} />
        <CheckField wizard=wizard label="I accept the supplier agreement"
            get={|f: &SupplierDraft| f.accept_terms} set={|f: &mut SupplierDraft, v| f.accept_terms = v} />
    }
    .into_any()
}

/// LAW-MIS VENDOR: add a supplier to the vendor's network.
#[component]
pub fn SupplierFormPage() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new(SupplierDraft::default()));
    let submitted = RwSignal::new(None::<String>);
    let on_complete = submit_handler(wizard, submitted);
    let step = Memo::new(move |_| wizard.with(|w| w.current_step()));

    view! {
        <PageFrame page_id="u503_supplier_form--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=Signal::derive(tr("add_supplier")) />

            <div class="page__content">
                <WizardSteps wizard=wizard />
                <div class="wizard-body">
                    {move || step_body(wizard, step.get())}
                </div>
                <WizardNav wizard=wizard on_complete=on_complete />
            </div>

            <SubmittedModal wizard=wizard submitted=submitted title="Supplier added" />
        </PageFrame>
    }
}
