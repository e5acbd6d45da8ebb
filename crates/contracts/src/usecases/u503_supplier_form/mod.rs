//! Supplier onboarding form used by vendors.

use serde::{Deserialize, Serialize};

use crate::shared::wizard::{collect_missing, StepGate, WizardForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierStep {
    Company,
    Contact,
    Products,
    Terms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub company_name: String,
    pub registration_no: String,
    pub website: String,

    pub contact_name: String,
    pub phone: String,
    pub email: String,

    pub product_categories: String,
    pub lead_time_days: String,
    pub min_order_qty: String,

    pub payment_terms: String,
    pub accept_terms: bool,
}

pub const PAYMENT_TERMS: &[&str] = &["Advance", "Net 15", "Net 30", "Net 45"];

impl SupplierDraft {
    /// Categories typed as a comma separated list.
    pub fn categories(&self) -> Vec<String> {
        self.product_categories
            .split(',')
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl WizardForm for SupplierDraft {
    type Step = SupplierStep;

    const REFERENCE_PREFIX: &'static str = "SUP";
    const GATE: StepGate = StepGate::RequiredFields;

    fn steps() -> &'static [SupplierStep] {
        &[
            SupplierStep::Company,
            SupplierStep::Contact,
            SupplierStep::Products,
            SupplierStep::Terms,
        ]
    }

    fn step_title(step: SupplierStep) -> &'static str {
        match step {
            SupplierStep::Company => "Company",
            SupplierStep::Contact => "Contact",
            SupplierStep::Products => "Products",
            SupplierStep::Terms => "Terms",
        }
    }

    fn missing_fields(&self, step: SupplierStep) -> Vec<&'static str> {
        match step {
            SupplierStep::Company => collect_missing(&[
                ("Company name", self.company_name.as_str()),
                ("Registration number", self.registration_no.as_str()),
            ]),
            SupplierStep::Contact => collect_missing(&[
                ("Contact name", self.contact_name.as_str()),
                ("Phone", self.phone.as_str()),
                ("Email", self.email.as_str()),
            ]),
            SupplierStep::Products => {
                let mut missing = Vec::new();
                if self.categories().is_empty() {
                    missing.push("Product categories");
                }
                if self.lead_time_days.trim().parse::<u32>().is_err() {
                    missing.push("Lead time (days)");
                }
                missing
            }
            SupplierStep::Terms => {
                let mut missing = collect_missing(&[("Payment terms", self.payment_terms.as_str())]);
                if !self.accept_terms {
                    missing.push("Terms acceptance");
                }
                missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Wizard, WizardEvent};

    #[test]
    fn test_categories_split() {
        let draft = SupplierDraft {
            product_categories: " Emission, ,Brakes ,".into(),
            ..Default::default()
        };
        assert_eq!(draft.categories(), vec!["Emission", "Brakes"]);
    }

    #[test]
    fn test_lead_time_must_be_a_number() {
        let draft = SupplierDraft {
            product_categories: "Brakes".into(),
            lead_time_days: "soon".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.missing_fields(SupplierStep::Products),
            vec!["Lead time (days)"]
        );
    }

    #[test]
    fn test_full_walkthrough_completes() {
        let draft = SupplierDraft {
            company_name: "Apex".into(),
            registration_no: "U12345MH2020PTC000001".into(),
            contact_name: "Neha".into(),
            phone: "+91 90000 00000".into(),
            email: "neha@apex.example".into(),
            product_categories: "Brakes".into(),
            lead_time_days: "7".into(),
            payment_terms: "Net 30".into(),
            accept_terms: true,
            ..Default::default()
        };
        let mut w = Wizard::new(draft);
        for _ in 0..3 {
            assert!(matches!(w.next(), Ok(WizardEvent::Advanced { .. })));
        }
        assert!(matches!(w.next(), Ok(WizardEvent::Completed { .. })));
        w.back();
        assert_eq!(w.active_step(), 2);
    }
}
