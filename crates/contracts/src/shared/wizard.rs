//! Multi-step form wizard engine.
//!
//! A wizard is an ordered list of steps over one flat draft struct. Whether
//! "Next" is blocked by unfilled required fields is a per-wizard choice
//! ([`StepGate`]).

use std::fmt::Debug;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepGate {
    /// Next is always available
    Ungated,
    /// Next is blocked until the step's required fields are filled
    RequiredFields,
}

/// Draft of a wizard-driven form.
pub trait WizardForm: Clone + Debug {
    type Step: Copy + Eq + Debug + Send + Sync + 'static;

    /// Prefix of the synthetic reference shown on completion.
    const REFERENCE_PREFIX: &'static str;
    const GATE: StepGate;

    fn steps() -> &'static [Self::Step];

    fn step_title(step: Self::Step) -> &'static str;

    /// Labels of the required fields of `step` that are still empty.
    fn missing_fields(&self, step: Self::Step) -> Vec<&'static str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Advanced { step: usize },
    Completed { reference: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please fill in: {}", .fields.join(", "))]
    MissingFields {
        step: &'static str,
        fields: Vec<&'static str>,
    },
}

/// Client-side reference number. Not unique, not stored anywhere.
pub fn generate_reference(prefix: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, raw[..8].to_uppercase())
}

#[derive(Debug, Clone)]
pub struct Wizard<F: WizardForm> {
    pub form: F,
    active: usize,
    gate: StepGate,
    reference: Option<String>,
}

impl<F: WizardForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self::with_gate(form, F::GATE)
    }

    pub fn with_gate(form: F, gate: StepGate) -> Self {
        Self {
            form,
            active: 0,
            gate,
            reference: None,
        }
    }

    pub fn active_step(&self) -> usize {
        self.active
    }

    pub fn current_step(&self) -> F::Step {
        F::steps()[self.active]
    }

    pub fn step_count(&self) -> usize {
        F::steps().len()
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.step_count()
    }

    pub fn can_go_back(&self) -> bool {
        self.active > 0
    }

    pub fn gate(&self) -> StepGate {
        self.gate
    }

    pub fn missing_for_current(&self) -> Vec<&'static str> {
        self.form.missing_fields(self.current_step())
    }

    /// Whether the forward button is enabled.
    pub fn can_advance(&self) -> bool {
        match self.gate {
            StepGate::Ungated => true,
            StepGate::RequiredFields => self.missing_for_current().is_empty(),
        }
    }

    /// Last generated reference, if the wizard was submitted.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn back(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    /// Move forward, or submit on the last step. Every submit produces
    /// exactly one `Completed` event with a fresh reference.
    pub fn next(&mut self) -> Result<WizardEvent, WizardError> {
        if !self.can_advance() {
            let step = self.current_step();
            return Err(WizardError::MissingFields {
                step: F::step_title(step),
                fields: self.missing_for_current(),
            });
        }
        if self.is_last() {
            let reference = generate_reference(F::REFERENCE_PREFIX);
            log::info!("{} submitted, reference {}", F::REFERENCE_PREFIX, reference);
            self.reference = Some(reference.clone());
            return Ok(WizardEvent::Completed { reference });
        }
        self.active += 1;
        Ok(WizardEvent::Advanced { step: self.active })
    }

    /// Start over with an empty draft.
    pub fn reset(&mut self, form: F) {
        self.form = form;
        self.active = 0;
        self.reference = None;
    }
}

/// `true` when the trimmed value is empty.
pub fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collect labels of blank required fields.
pub fn collect_missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| blank(value))
        .map(|(label, _)| *label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        One,
        Two,
        Three,
    }

    #[derive(Debug, Clone, Default)]
    struct Draft {
        name: String,
    }

    impl WizardForm for Draft {
        type Step = Step;
        const REFERENCE_PREFIX: &'static str = "TST";
        const GATE: StepGate = StepGate::RequiredFields;

        fn steps() -> &'static [Step] {
            &[Step::One, Step::Two, Step::Three]
        }

        fn step_title(step: Step) -> &'static str {
            match step {
                Step::One => "One",
                Step::Two => "Two",
                Step::Three => "Three",
            }
        }

        fn missing_fields(&self, step: Step) -> Vec<&'static str> {
            match step {
                Step::One => collect_missing(&[("Name", self.name.as_str())]),
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn test_back_at_first_step_is_noop() {
        let mut w = Wizard::new(Draft::default());
        assert!(!w.can_go_back());
        w.back();
        assert_eq!(w.active_step(), 0);
    }

    #[test]
    fn test_gated_step_blocks_next() {
        let mut w = Wizard::new(Draft::default());
        assert!(!w.can_advance());
        let err = w.next().unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingFields {
                step: "One",
                fields: vec!["Name"]
            }
        );
        assert_eq!(w.active_step(), 0);
        w.form.name = "Ravi".into();
        assert_eq!(w.next(), Ok(WizardEvent::Advanced { step: 1 }));
    }

    #[test]
    fn test_ungated_wizard_advances_with_empty_fields() {
        let mut w = Wizard::with_gate(Draft::default(), StepGate::Ungated);
        assert_eq!(w.next(), Ok(WizardEvent::Advanced { step: 1 }));
    }

    #[test]
    fn test_next_at_last_step_completes_once_per_call() {
        let mut w = Wizard::with_gate(Draft::default(), StepGate::Ungated);
        w.next().unwrap();
        w.next().unwrap();
        assert!(w.is_last());

        let first = w.next().unwrap();
        assert_eq!(w.active_step(), 2);
        let second = w.next().unwrap();
        assert_eq!(w.active_step(), 2);

        match (first, second) {
            (
                WizardEvent::Completed { reference: a },
                WizardEvent::Completed { reference: b },
            ) => {
                assert!(a.starts_with("TST-"));
                assert_eq!(a.len(), "TST-".len() + 8);
                assert_eq!(w.reference(), Some(b.as_str()));
            }
            other => panic!("expected two completions, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut w = Wizard::with_gate(Draft::default(), StepGate::Ungated);
        w.next().unwrap();
        w.reset(Draft::default());
        assert_eq!(w.active_step(), 0);
        assert_eq!(w.reference(), None);
    }

    #[test]
    fn test_missing_fields_message() {
        let err = WizardError::MissingFields {
            step: "Bank",
            fields: vec!["IFSC", "Account number"],
        };
        assert_eq!(err.to_string(), "Please fill in: IFSC, Account number");
    }
}
