//! Reusable UI components

mod button;
mod dialog;

pub use button::{button_width, render_key_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_privacy_dialog};
