//! Application state module

mod app_state;
mod forms;
mod navigator;

pub use app_state::*;
pub use forms::*;
pub use navigator::{Advance, FormView, StepNavigator};

#[cfg(test)]
pub(crate) use navigator::tests::{fill_current_step, navigator_on_last_step, RecordingView};
