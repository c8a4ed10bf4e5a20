//! Submission pipeline: final validation, results display and lead tracking
//!
//! The estimate shown to the user and the tracking request are independent.
//! The tracking request is fire-and-forget: its outcome is logged by the
//! spawned task and the handle is returned so callers may observe it, but the
//! app drops it and never surfaces delivery problems to the user.

use crate::services::{LeadTracker, ServiceError};
use crate::sizing::{estimate_from_input, SizingResult};
use crate::state::{
    FormField, FormState, FormView, StepNavigator, EMAIL, ENERGY_PROVIDER, ENERGY_TYPE,
    INSTALLATION_LOCATION, INSTALLATION_TYPE, LOCATION, MONTHLY_BILL, NAME, PHONE,
    PRIVACY_AGREEMENT,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Placeholder sent for fields the user left empty
pub const NOT_AVAILABLE: &str = "N/A";

/// Flattened lead record, sent verbatim to the tracking endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub installation_type: String,
    pub location: String,
    pub installation_location: String,
    pub energy_provider: String,
    pub energy_type: String,
    pub monthly_bill: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "Yes" or "No"
    pub privacy_agreement: String,
}

impl SubmissionRecord {
    pub fn from_form(form: &FormState) -> Self {
        let value = |name: &str| form.value(name).unwrap_or(NOT_AVAILABLE).to_string();
        let agreed = form
            .field(PRIVACY_AGREEMENT)
            .is_some_and(FormField::is_checked);

        Self {
            installation_type: value(INSTALLATION_TYPE),
            location: value(LOCATION),
            installation_location: value(INSTALLATION_LOCATION),
            energy_provider: value(ENERGY_PROVIDER),
            energy_type: value(ENERGY_TYPE),
            monthly_bill: value(MONTHLY_BILL),
            name: value(NAME),
            email: value(EMAIL),
            phone: value(PHONE),
            privacy_agreement: String::from(if agreed { "Yes" } else { "No" }),
        }
    }
}

/// What a successful submit produced
pub struct Submission {
    /// `None` when the bill amount could not be estimated
    pub result: Option<SizingResult>,
    /// Outcome of the tracking request
    pub delivery: JoinHandle<Result<(), ServiceError>>,
}

pub struct SubmissionPipeline {
    tracker: Arc<dyn LeadTracker>,
}

impl SubmissionPipeline {
    pub fn new(tracker: Arc<dyn LeadTracker>) -> Self {
        Self { tracker }
    }

    /// Submit from the final step.
    ///
    /// Re-validates the final step; nothing is built or sent when it fails.
    /// Otherwise the estimate is shown (or an alert raised for a bad bill
    /// amount) and the record is dispatched regardless. Must run inside a
    /// tokio runtime.
    pub fn submit(
        &self,
        navigator: &mut StepNavigator,
        view: &mut dyn FormView,
    ) -> Option<Submission> {
        if !navigator.form().is_last() || !navigator.validate_current(view) {
            return None;
        }

        let form = navigator.form();
        let result = match estimate_from_input(form.value(MONTHLY_BILL).unwrap_or_default()) {
            Ok(result) => {
                info!(
                    panels = result.panel_count,
                    installed_kw = result.installed_power_kw,
                    "sizing estimate computed"
                );
                view.show_results(&result);
                Some(result)
            }
            Err(e) => {
                warn!(error = %e, "could not estimate");
                view.alert(e.user_message());
                None
            }
        };

        let delivery = self.dispatch(SubmissionRecord::from_form(form));
        Some(Submission { result, delivery })
    }

    /// Send a record in the background, logging the outcome
    pub fn dispatch(&self, record: SubmissionRecord) -> JoinHandle<Result<(), ServiceError>> {
        let tracker = Arc::clone(&self.tracker);
        tokio::spawn(async move {
            let outcome = tracker.submit(&record).await;
            match &outcome {
                Ok(()) => info!("lead sent to tracking endpoint"),
                Err(e) => error!(error = %e, "failed to send lead to tracking endpoint"),
            }
            outcome
        })
    }
}
