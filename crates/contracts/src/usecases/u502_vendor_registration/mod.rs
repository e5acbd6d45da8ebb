//! Vendor registration wizard (LAW-MIS vendor marketplace).

use serde::{Deserialize, Serialize};

use crate::shared::wizard::{blank, collect_missing, StepGate, WizardForm};
use crate::usecases::common::{missing_file, FileHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorStep {
    Business,
    Contact,
    Bank,
    Documents,
    Review,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorDraft {
    pub business_name: String,
    pub business_type: String,
    pub gstin: String,
    pub pan: String,

    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,

    pub gst_certificate: Option<FileHandle>,
    pub pan_card: Option<FileHandle>,
    pub cancelled_cheque: Option<FileHandle>,

    pub accept_terms: bool,
}

pub const BUSINESS_TYPES: &[&str] = &[
    "Proprietorship",
    "Partnership",
    "Private Limited",
    "LLP",
];

/// 15-character GSTIN shape check (no checksum).
pub fn gstin_looks_valid(gstin: &str) -> bool {
    let gstin = gstin.trim();
    gstin.len() == 15 && gstin.chars().all(|c| c.is_ascii_alphanumeric())
}

/// 11-character IFSC: 4 letters, a zero, 6 alphanumerics.
pub fn ifsc_looks_valid(ifsc: &str) -> bool {
    let ifsc = ifsc.trim().as_bytes();
    ifsc.len() == 11
        && ifsc[..4].iter().all(|b| b.is_ascii_alphabetic())
        && ifsc[4] == b'0'
        && ifsc[5..].iter().all(|b| b.is_ascii_alphanumeric())
}

impl WizardForm for VendorDraft {
    type Step = VendorStep;

    const REFERENCE_PREFIX: &'static str = "VND";
    const GATE: StepGate = StepGate::RequiredFields;

    fn steps() -> &'static [VendorStep] {
        &[
            VendorStep::Business,
            VendorStep::Contact,
            VendorStep::Bank,
            VendorStep::Documents,
            VendorStep::Review,
        ]
    }

    fn step_title(step: VendorStep) -> &'static str {
        match step {
            VendorStep::Business => "Business Details",
            VendorStep::Contact => "Contact Details",
            VendorStep::Bank => "Bank Details",
            VendorStep::Documents => "Documents",
            VendorStep::Review => "Review & Submit",
        }
    }

    fn missing_fields(&self, step: VendorStep) -> Vec<&'static str> {
        match step {
            VendorStep::Business => {
                let mut missing = collect_missing(&[
                    ("Business name", self.business_name.as_str()),
                    ("Business type", self.business_type.as_str()),
                    ("PAN", self.pan.as_str()),
                ]);
                if !gstin_looks_valid(&self.gstin) {
                    missing.push("GSTIN");
                }
                missing
            }
            VendorStep::Contact => collect_missing(&[
                ("Contact person", self.contact_person.as_str()),
                ("Phone", self.phone.as_str()),
                ("Email", self.email.as_str()),
            ]),
            VendorStep::Bank => {
                let mut missing = collect_missing(&[
                    ("Account holder", self.account_holder.as_str()),
                    ("Account number", self.account_number.as_str()),
                ]);
                if !ifsc_looks_valid(&self.ifsc) {
                    missing.push("IFSC");
                }
                missing
            }
            VendorStep::Documents => [
                missing_file("GST certificate", &self.gst_certificate),
                missing_file("PAN card", &self.pan_card),
            ]
            .into_iter()
            .flatten()
            .collect(),
            VendorStep::Review => {
                if self.accept_terms {
                    Vec::new()
                } else {
                    vec!["Terms acceptance"]
                }
            }
        }
    }
}

impl VendorDraft {
    pub fn masked_account(&self) -> String {
        let digits = self.account_number.trim();
        if blank(digits) {
            return String::new();
        }
        let visible: String = digits
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("XXXX{}", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Wizard, WizardError, WizardEvent};

    fn filled_business() -> VendorDraft {
        VendorDraft {
            business_name: "Apex Test Equipments".into(),
            business_type: "LLP".into(),
            gstin: "27ABCDE1234F1Z5".into(),
            pan: "ABCDE1234F".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_business_step_is_gated() {
        let mut w = Wizard::new(VendorDraft::default());
        match w.next() {
            Err(WizardError::MissingFields { step, fields }) => {
                assert_eq!(step, "Business Details");
                assert!(fields.contains(&"GSTIN"));
            }
            other => panic!("unexpected {:?}", other),
        }
        w.form = filled_business();
        assert_eq!(w.next(), Ok(WizardEvent::Advanced { step: 1 }));
        assert!(!w.can_advance());
    }

    #[test]
    fn test_ifsc_shape() {
        assert!(ifsc_looks_valid("SBIN0001234"));
        assert!(!ifsc_looks_valid("SBIN1001234"));
        assert!(!ifsc_looks_valid("SBIN000123"));
    }

    #[test]
    fn test_review_requires_terms() {
        let draft = VendorDraft::default();
        assert_eq!(draft.missing_fields(VendorStep::Review), vec!["Terms acceptance"]);
    }

    #[test]
    fn test_masked_account() {
        let draft = VendorDraft {
            account_number: "001234567890".into(),
            ..Default::default()
        };
        assert_eq!(draft.masked_account(), "XXXX7890");
        assert_eq!(VendorDraft::default().masked_account(), "");
    }
}
