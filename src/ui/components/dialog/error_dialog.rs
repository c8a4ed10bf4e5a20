//! Alert dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render an alert overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Attention",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(dismiss_hint("dismiss")),
            max_width: 60,
        },
    );
}
