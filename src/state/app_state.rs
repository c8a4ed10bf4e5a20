//! Application state definitions

use super::forms::FormState;
use super::navigator::FormView;
use crate::sizing::SizingResult;
use std::collections::VecDeque;

/// Label of the advance control on every step but the last
pub const NEXT_LABEL: &str = "Next";
/// Label of the advance control on the last step
pub const SUBMIT_LABEL: &str = "Get my estimate";

/// Which of the two mutually exclusive views is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Results,
}

/// Everything the renderer needs besides the form itself
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    /// Title of the visible step
    pub step_title: String,
    /// One-based number of the visible step
    pub step_number: usize,
    pub step_count: usize,
    pub progress_percent: f64,
    pub advance_label: &'static str,
    pub back_visible: bool,
    /// Present only while the results view is shown
    pub result: Option<SizingResult>,
    /// Queued alerts, oldest first
    pub errors: VecDeque<String>,
    pub status_message: Option<String>,
    pub show_privacy: bool,
    pub location_pending: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::Form,
            step_title: String::new(),
            step_number: 1,
            step_count: 1,
            progress_percent: 0.0,
            advance_label: NEXT_LABEL,
            back_visible: false,
            result: None,
            errors: VecDeque::new(),
            status_message: None,
            show_privacy: false,
            location_pending: false,
        }
    }
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The alert currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

impl FormView for AppState {
    fn render_step(&mut self, form: &FormState) {
        let step = form.current_step();
        self.step_title = step.title.clone();
        self.step_number = form.current_index() + 1;
        self.step_count = form.step_count();
        self.progress_percent = form.progress_percent();
        self.back_visible = !form.is_first();
        self.advance_label = if form.is_last() {
            SUBMIT_LABEL
        } else {
            NEXT_LABEL
        };
    }

    fn show_results(&mut self, result: &SizingResult) {
        self.result = Some(*result);
        self.current_view = View::Results;
    }

    fn show_form(&mut self) {
        self.result = None;
        self.current_view = View::Form;
    }

    fn alert(&mut self, message: &str) {
        self.push_error(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::estimate;
    use crate::state::StepNavigator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_shows_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(state.result.is_none());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_render_first_step() {
        let mut state = AppState::default();
        state.render_step(&FormState::solar_lead());
        assert_eq!(state.step_number, 1);
        assert_eq!(state.step_count, 7);
        assert_eq!(state.step_title, "Installation type");
        assert_eq!(state.advance_label, NEXT_LABEL);
        assert!(!state.back_visible);
    }

    #[test]
    fn test_render_last_step_relabels_advance() {
        let (navigator, _) = crate::state::navigator_on_last_step();
        let mut state = AppState::default();
        navigator.start(&mut state);
        assert_eq!(state.advance_label, SUBMIT_LABEL);
        assert!(state.back_visible);
        assert!((state.progress_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_and_form_are_exclusive() {
        let mut state = AppState::default();
        let result = estimate(360.0).unwrap();

        state.show_results(&result);
        assert_eq!(state.current_view, View::Results);
        assert_eq!(state.result, Some(result));

        state.show_form();
        assert_eq!(state.current_view, View::Form);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_alerts_queue_in_order() {
        let mut state = AppState::default();
        state.alert("first");
        state.alert("second");
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_navigator_drives_state() {
        let mut navigator = StepNavigator::default();
        let mut state = AppState::default();
        crate::state::fill_current_step(&mut navigator);
        navigator.advance(&mut state);
        assert_eq!(state.step_number, 2);
        assert!(state.back_visible);
    }
}
