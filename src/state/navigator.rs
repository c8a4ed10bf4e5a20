//! Step navigator: moves the current step index and drives the view

use super::forms::{validate_step, FormState};
use crate::sizing::SizingResult;
use tracing::debug;

/// Rendering capability the navigator and submission pipeline call through
pub trait FormView {
    /// Show the step at the form's current index and refresh progress/labels
    fn render_step(&mut self, form: &FormState);
    /// Replace the form with the results view
    fn show_results(&mut self, result: &SizingResult);
    /// Replace the results view with the form
    fn show_form(&mut self);
    /// Surface a user-facing message
    fn alert(&mut self, message: &str);
}

/// Outcome of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given index
    Moved(usize),
    /// Validation failed; index unchanged
    Blocked,
    /// Final step validated; index unchanged, submission should follow
    ReadyToSubmit,
}

/// Owns the form and is the only thing that moves its step index
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    form: FormState,
}

impl StepNavigator {
    pub fn new(form: FormState) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for field edits; the step index stays private
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Render the initial step
    pub fn start(&self, view: &mut dyn FormView) {
        view.render_step(&self.form);
    }

    /// Validate the current step, flagging offending fields and alerting
    /// with the first violation category.
    pub fn validate_current(&mut self, view: &mut dyn FormView) -> bool {
        let is_final = self.form.is_last();
        let report = validate_step(self.form.current_step(), is_final);
        self.form.current_step_mut().flag(&report.flagged);
        if report.is_valid() {
            return true;
        }

        debug!(
            step = %self.form.current_step().key,
            violations = ?report.violations,
            "step validation failed"
        );
        if let Some(message) = report.alert() {
            view.alert(message);
        }
        false
    }

    /// Move forward one step if the current step validates
    pub fn advance(&mut self, view: &mut dyn FormView) -> Advance {
        if !self.validate_current(view) {
            return Advance::Blocked;
        }
        if self.form.is_last() {
            return Advance::ReadyToSubmit;
        }

        let next = self.form.current_index() + 1;
        self.form.set_current_index(next);
        debug!(step = next, "advanced");
        view.render_step(&self.form);
        Advance::Moved(next)
    }

    /// Move back one step; no validation. Returns false at the first step.
    pub fn retreat(&mut self, view: &mut dyn FormView) -> bool {
        if self.form.is_first() {
            return false;
        }

        let previous = self.form.current_index() - 1;
        self.form.set_current_index(previous);
        debug!(step = previous, "retreated");
        view.render_step(&self.form);
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::forms::{
        EMAIL, ENERGY_PROVIDER, ENERGY_TYPE, INSTALLATION_LOCATION, INSTALLATION_TYPE, LOCATION,
        MONTHLY_BILL, NAME, PHONE, PRIVACY_AGREEMENT,
    };
    use pretty_assertions::assert_eq;

    /// View that records every call for assertions
    #[derive(Debug, Default)]
    pub(crate) struct RecordingView {
        pub rendered: Vec<usize>,
        pub progress: Vec<f64>,
        pub results: Vec<SizingResult>,
        pub form_shown: usize,
        pub alerts: Vec<String>,
    }

    impl FormView for RecordingView {
        fn render_step(&mut self, form: &FormState) {
            self.rendered.push(form.current_index());
            self.progress.push(form.progress_percent());
        }
        fn show_results(&mut self, result: &SizingResult) {
            self.results.push(*result);
        }
        fn show_form(&mut self) {
            self.form_shown += 1;
        }
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    /// Fill the current step with valid values
    pub(crate) fn fill_current_step(navigator: &mut StepNavigator) {
        let step = navigator.form_mut().current_step_mut();
        for field in step.fields.iter_mut() {
            match field.name.as_str() {
                INSTALLATION_TYPE => field.select_key("residential"),
                INSTALLATION_LOCATION => field.select_key("roof"),
                ENERGY_TYPE => field.select_key("two-phase"),
                LOCATION => field.set_text("Campinas"),
                ENERGY_PROVIDER => field.set_text("CPFL"),
                MONTHLY_BILL => field.set_text("360"),
                NAME => field.set_text("Ana"),
                EMAIL => field.set_text("ana@example.com"),
                PHONE => field.set_text("11987654321"),
                PRIVACY_AGREEMENT => {
                    if !field.is_checked() {
                        field.toggle()
                    }
                }
                _ => {}
            }
        }
    }

    /// Navigator sitting on the last step with every earlier step filled
    pub(crate) fn navigator_on_last_step() -> (StepNavigator, RecordingView) {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        while !navigator.form().is_last() {
            fill_current_step(&mut navigator);
            assert!(matches!(navigator.advance(&mut view), Advance::Moved(_)));
        }
        (navigator, view)
    }

    #[test]
    fn test_start_renders_first_step() {
        let navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        navigator.start(&mut view);
        assert_eq!(view.rendered, vec![0]);
        assert!((view.progress[0] - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_moves_when_valid() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        fill_current_step(&mut navigator);

        assert_eq!(navigator.advance(&mut view), Advance::Moved(1));
        assert_eq!(navigator.form().current_index(), 1);
        assert_eq!(view.rendered, vec![1]);
        assert!(view.alerts.is_empty());
    }

    #[test]
    fn test_empty_required_field_blocks_advance() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        fill_current_step(&mut navigator);
        navigator.advance(&mut view);

        // step2: location left empty
        assert_eq!(navigator.advance(&mut view), Advance::Blocked);
        assert_eq!(navigator.form().current_index(), 1);
        assert_eq!(view.alerts, vec!["Please fill in all required fields.".to_string()]);
        assert!(navigator
            .form()
            .field(LOCATION)
            .is_some_and(|f| f.flagged));
    }

    #[test]
    fn test_missing_installation_type_blocks_first_step() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();

        assert_eq!(navigator.advance(&mut view), Advance::Blocked);
        assert_eq!(navigator.form().current_index(), 0);
        assert_eq!(
            view.alerts,
            vec!["Please select an installation type.".to_string()]
        );
    }

    #[test]
    fn test_bad_email_blocks_contact_step() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        while navigator.form().current_index() < 5 {
            fill_current_step(&mut navigator);
            navigator.advance(&mut view);
        }
        fill_current_step(&mut navigator);
        if let Some(email) = navigator.form_mut().field_mut(EMAIL) {
            email.set_text("bad-email");
        }

        assert_eq!(navigator.advance(&mut view), Advance::Blocked);
        assert_eq!(navigator.form().current_index(), 5);
        assert!(navigator.form().field(EMAIL).is_some_and(|f| f.flagged));
        assert_eq!(
            view.alerts.last().map(String::as_str),
            Some("Please enter a valid e-mail address.")
        );
    }

    #[test]
    fn test_advance_on_last_step_never_moves_past_end() {
        let (mut navigator, mut view) = navigator_on_last_step();
        assert_eq!(navigator.form().current_index(), 6);

        fill_current_step(&mut navigator);
        assert_eq!(navigator.advance(&mut view), Advance::ReadyToSubmit);
        assert_eq!(navigator.advance(&mut view), Advance::ReadyToSubmit);
        assert_eq!(navigator.form().current_index(), 6);
    }

    #[test]
    fn test_unchecked_agreement_blocks_last_step() {
        let (mut navigator, mut view) = navigator_on_last_step();

        assert_eq!(navigator.advance(&mut view), Advance::Blocked);
        assert_eq!(
            view.alerts,
            vec!["Please agree to the privacy policy to continue.".to_string()]
        );
    }

    #[test]
    fn test_last_render_reports_full_progress() {
        let (_navigator, view) = navigator_on_last_step();
        assert!((view.progress.last().copied().unwrap_or_default() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();

        assert!(!navigator.retreat(&mut view));
        assert_eq!(navigator.form().current_index(), 0);
        assert!(view.rendered.is_empty());
    }

    #[test]
    fn test_retreat_needs_no_validation() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        fill_current_step(&mut navigator);
        navigator.advance(&mut view);

        assert!(navigator.retreat(&mut view));
        assert_eq!(navigator.form().current_index(), 0);
        assert!(view.alerts.is_empty());
        assert_eq!(view.rendered, vec![1, 0]);
    }

    #[test]
    fn test_retreat_keeps_field_values() {
        let mut navigator = StepNavigator::default();
        let mut view = RecordingView::default();
        fill_current_step(&mut navigator);
        navigator.advance(&mut view);
        navigator.retreat(&mut view);

        assert_eq!(navigator.form().value(INSTALLATION_TYPE), Some("residential"));
    }
}
