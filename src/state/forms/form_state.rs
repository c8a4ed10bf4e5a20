//! Form state management: steps, fields and the current step index

use super::field::{FieldKind, FieldOption, FormField};

pub const INSTALLATION_TYPE: &str = "installationType";
pub const LOCATION: &str = "location";
pub const INSTALLATION_LOCATION: &str = "installationLocation";
pub const ENERGY_PROVIDER: &str = "energyProvider";
pub const ENERGY_TYPE: &str = "energyType";
pub const MONTHLY_BILL: &str = "monthlyBill";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const PRIVACY_AGREEMENT: &str = "privacyAgreement";

const INSTALLATION_TYPES: &[FieldOption] = &[
    FieldOption::new("residential", "Residential"),
    FieldOption::new("commercial", "Commercial"),
    FieldOption::new("rural", "Rural"),
    FieldOption::new("industrial", "Industrial"),
];

const INSTALLATION_LOCATIONS: &[FieldOption] = &[
    FieldOption::new("roof", "Roof"),
    FieldOption::new("ground", "Ground"),
    FieldOption::new("carport", "Carport"),
];

const ENERGY_TYPES: &[FieldOption] = &[
    FieldOption::new("single-phase", "Single-phase"),
    FieldOption::new("two-phase", "Two-phase"),
    FieldOption::new("three-phase", "Three-phase"),
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// One screen of the form
#[derive(Debug, Clone)]
pub struct Step {
    /// Stable key ("step1".."step7")
    pub key: String,
    pub title: String,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl Step {
    pub fn new(key: &str, title: &str, fields: Vec<FormField>) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            fields,
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Flag the named fields
    pub fn flag(&mut self, names: &[String]) {
        for field in self.fields.iter_mut() {
            if names.contains(&field.name) {
                field.flag();
            }
        }
    }
}

impl Form for Step {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
}

/// Ordered steps plus the zero-based current index.
///
/// Always holds at least one step and `current_index < steps.len()`. The
/// index is only moved by the step navigator.
#[derive(Debug, Clone)]
pub struct FormState {
    steps: Vec<Step>,
    current_index: usize,
}

impl FormState {
    /// Build a form from its steps; `None` when there are no steps
    #[cfg(test)]
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self {
            steps,
            current_index: 0,
        })
    }

    /// The seven-step solar lead form
    pub fn solar_lead() -> Self {
        Self {
            steps: solar_lead_steps(),
            current_index: 0,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.steps.len()
    }

    #[cfg(test)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current_index]
    }

    pub fn current_step_mut(&mut self) -> &mut Step {
        &mut self.steps[self.current_index]
    }

    /// Progress through the form, `(current_index + 1) / len * 100`
    pub fn progress_percent(&self) -> f64 {
        (self.current_index + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    /// Find a field on any step
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.steps.iter().find_map(|s| s.field(name))
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps.iter_mut().find_map(|s| s.field_mut(name))
    }

    /// Raw value of a field, empty strings treated as absent
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name)
            .map(FormField::as_text)
            .filter(|v| !v.is_empty())
    }

    pub(in crate::state) fn set_current_index(&mut self, index: usize) {
        self.current_index = index.min(self.steps.len() - 1);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::solar_lead()
    }
}

fn solar_lead_steps() -> Vec<Step> {
    vec![
        Step::new(
            "step1",
            "Installation type",
            vec![FormField::select(
                INSTALLATION_TYPE,
                "What kind of installation?",
                INSTALLATION_TYPES,
                false,
            )],
        ),
        Step::new(
            "step2",
            "Location",
            vec![FormField::text(LOCATION, "City", FieldKind::Text, true)],
        ),
        Step::new(
            "step3",
            "Installation location",
            vec![FormField::select(
                INSTALLATION_LOCATION,
                "Where will the panels go?",
                INSTALLATION_LOCATIONS,
                true,
            )],
        ),
        Step::new(
            "step4",
            "Energy provider",
            vec![FormField::text(
                ENERGY_PROVIDER,
                "Energy provider",
                FieldKind::Text,
                true,
            )],
        ),
        Step::new(
            "step5",
            "Energy type",
            vec![
                FormField::select(ENERGY_TYPE, "Connection type", ENERGY_TYPES, true),
                FormField::text(MONTHLY_BILL, "Average monthly bill", FieldKind::Text, true),
            ],
        ),
        Step::new(
            "step6",
            "Contact",
            vec![
                FormField::text(NAME, "Name", FieldKind::Text, true),
                FormField::text(EMAIL, "E-mail", FieldKind::Email, true),
                FormField::text(PHONE, "Phone", FieldKind::Tel, true),
            ],
        ),
        Step::new(
            "step7",
            "Privacy",
            vec![FormField::checkbox(
                PRIVACY_AGREEMENT,
                "I agree to the privacy policy",
                true,
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_solar_lead_has_seven_steps() {
            let form = FormState::solar_lead();
            assert_eq!(form.step_count(), 7);
            let keys: Vec<&str> = form.steps().iter().map(|s| s.key.as_str()).collect();
            assert_eq!(
                keys,
                vec!["step1", "step2", "step3", "step4", "step5", "step6", "step7"]
            );
        }

        #[test]
        fn test_starts_at_first_step() {
            let form = FormState::default();
            assert_eq!(form.current_index(), 0);
            assert!(form.is_first());
            assert!(!form.is_last());
        }

        #[test]
        fn test_new_rejects_empty() {
            assert!(FormState::new(vec![]).is_none());
        }

        #[test]
        fn test_progress_percent() {
            let mut form = FormState::solar_lead();
            assert!((form.progress_percent() - 100.0 / 7.0).abs() < 1e-9);
            form.set_current_index(6);
            assert!((form.progress_percent() - 100.0).abs() < 1e-9);
            assert!(form.is_last());
        }

        #[test]
        fn test_set_current_index_clamps() {
            let mut form = FormState::solar_lead();
            form.set_current_index(100);
            assert_eq!(form.current_index(), 6);
        }

        #[test]
        fn test_value_treats_empty_as_absent() {
            let mut form = FormState::solar_lead();
            assert_eq!(form.value(NAME), None);
            if let Some(field) = form.field_mut(NAME) {
                field.set_text("Ana");
            }
            assert_eq!(form.value(NAME), Some("Ana"));
            assert_eq!(form.value("missing"), None);
        }
    }

    mod step {
        use super::*;
        use pretty_assertions::assert_eq;

        fn contact_step() -> Step {
            FormState::solar_lead().steps()[5].clone()
        }

        #[test]
        fn test_field_count() {
            assert_eq!(contact_step().field_count(), 3);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut step = contact_step();
            for _ in 0..3 {
                step.next_field();
            }
            assert_eq!(step.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut step = contact_step();
            step.prev_field();
            assert_eq!(step.active_field_index, 2);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut step = contact_step();
            step.set_active_field(100);
            assert_eq!(step.active_field_index, 2);
        }

        #[test]
        fn test_active_field_follows_focus() {
            let mut step = contact_step();
            let active = |step: &mut Step| step.get_active_field_mut().map(|f| f.name.clone());
            assert_eq!(active(&mut step).as_deref(), Some(NAME));
            step.next_field();
            assert_eq!(active(&mut step).as_deref(), Some(EMAIL));
            step.prev_field();
            step.prev_field();
            assert_eq!(active(&mut step).as_deref(), Some(PHONE));
        }

        #[test]
        fn test_flag_marks_named_fields() {
            let mut step = contact_step();
            step.flag(&[EMAIL.to_string()]);
            assert!(step.field(EMAIL).is_some_and(|f| f.flagged));
            assert!(step.field(NAME).is_some_and(|f| !f.flagged));
        }

        #[test]
        fn test_empty_step_navigation_is_noop() {
            let mut step = Step::new("empty", "Empty", vec![]);
            step.next_field();
            step.prev_field();
            assert_eq!(step.active_field_index, 0);
            assert!(step.get_active_field_mut().is_none());
        }
    }
}
