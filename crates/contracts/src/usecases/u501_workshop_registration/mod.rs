//! Workshop registration wizard (LAW-MIS user).
//!
//! Steps are not gated: the applicant can move through every step with
//! empty fields. The review step lists what is still missing.

use serde::{Deserialize, Serialize};

use crate::shared::wizard::{collect_missing, StepGate, WizardForm};
use crate::usecases::common::{missing_file, FileHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkshopStep {
    BasicDetails,
    Address,
    Owner,
    Facilities,
    Documents,
    Review,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkshopDraft {
    // Basic details
    pub workshop_name: String,
    pub workshop_type: String,
    pub registration_no: String,
    pub established_year: String,

    // Address
    pub address_line: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub pincode: String,

    // Owner
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
    pub owner_id_proof: String,

    // Facilities
    pub inspection_bays: u32,
    pub has_brake_tester: bool,
    pub has_emission_analyzer: bool,
    pub has_headlight_tester: bool,

    // Documents
    pub license_doc: Option<FileHandle>,
    pub insurance_doc: Option<FileHandle>,
}

pub const WORKSHOP_TYPES: &[&str] = &[
    "Automated Testing Station",
    "Authorised Service Centre",
    "Independent Garage",
];

impl WorkshopDraft {
    /// Required fields that are still empty, across all steps.
    pub fn all_missing(&self) -> Vec<&'static str> {
        Self::steps()
            .iter()
            .flat_map(|step| self.missing_fields(*step))
            .collect()
    }

    pub fn facilities_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.has_brake_tester {
            parts.push("Brake tester");
        }
        if self.has_emission_analyzer {
            parts.push("Emission analyzer");
        }
        if self.has_headlight_tester {
            parts.push("Headlight tester");
        }
        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl WizardForm for WorkshopDraft {
    type Step = WorkshopStep;

    const REFERENCE_PREFIX: &'static str = "WS";
    const GATE: StepGate = StepGate::Ungated;

    fn steps() -> &'static [WorkshopStep] {
        &[
            WorkshopStep::BasicDetails,
            WorkshopStep::Address,
            WorkshopStep::Owner,
            WorkshopStep::Facilities,
            WorkshopStep::Documents,
            WorkshopStep::Review,
        ]
    }

    fn step_title(step: WorkshopStep) -> &'static str {
        match step {
            WorkshopStep::BasicDetails => "Basic Details",
            WorkshopStep::Address => "Address",
            WorkshopStep::Owner => "Owner Details",
            WorkshopStep::Facilities => "Facilities",
            WorkshopStep::Documents => "Documents",
            WorkshopStep::Review => "Review & Submit",
        }
    }

    fn missing_fields(&self, step: WorkshopStep) -> Vec<&'static str> {
        match step {
            WorkshopStep::BasicDetails => collect_missing(&[
                ("Workshop name", self.workshop_name.as_str()),
                ("Workshop type", self.workshop_type.as_str()),
                ("Registration number", self.registration_no.as_str()),
            ]),
            WorkshopStep::Address => collect_missing(&[
                ("Address", self.address_line.as_str()),
                ("City", self.city.as_str()),
                ("State", self.state.as_str()),
                ("Pincode", self.pincode.as_str()),
            ]),
            WorkshopStep::Owner => collect_missing(&[
                ("Owner name", self.owner_name.as_str()),
                ("Owner phone", self.owner_phone.as_str()),
            ]),
            WorkshopStep::Facilities => {
                if self.inspection_bays == 0 {
                    vec!["Inspection bays"]
                } else {
                    Vec::new()
                }
            }
            WorkshopStep::Documents => missing_file("Workshop license", &self.license_doc)
                .into_iter()
                .collect(),
            WorkshopStep::Review => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Wizard, WizardEvent};

    #[test]
    fn test_workshop_wizard_is_ungated() {
        let mut w = Wizard::new(WorkshopDraft::default());
        assert_eq!(w.gate(), StepGate::Ungated);
        for expected in 1..WorkshopDraft::steps().len() {
            assert_eq!(w.next(), Ok(WizardEvent::Advanced { step: expected }));
        }
        assert!(w.is_last());
        match w.next() {
            Ok(WizardEvent::Completed { reference }) => assert!(reference.starts_with("WS-")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_all_missing_lists_every_step() {
        let draft = WorkshopDraft::default();
        let missing = draft.all_missing();
        assert!(missing.contains(&"Workshop name"));
        assert!(missing.contains(&"Inspection bays"));
        assert!(missing.contains(&"Workshop license"));
    }

    #[test]
    fn test_facilities_summary() {
        let mut draft = WorkshopDraft::default();
        assert_eq!(draft.facilities_summary(), "None");
        draft.has_brake_tester = true;
        draft.has_headlight_tester = true;
        assert_eq!(draft.facilities_summary(), "Brake tester, Headlight tester");
    }
}
