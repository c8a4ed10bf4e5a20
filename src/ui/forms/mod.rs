//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `step_form`: The current step and its navigation buttons

mod field_renderer;
mod step_form;

pub use step_form::draw_step;
