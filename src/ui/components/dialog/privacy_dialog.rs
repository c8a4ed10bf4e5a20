//! Privacy policy dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub const PRIVACY_POLICY: &str = "We collect the answers you give in this simulation, \
including your name, e-mail and phone number, only to prepare your solar estimate and \
to contact you about it.\n\nYour data is never sold or shared with third parties. You can \
ask us to delete it at any time through the contact channels shown on the results screen.";

/// Render the privacy policy overlay
pub fn render_privacy_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Privacy policy",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: PRIVACY_POLICY,
            hint: Some(dismiss_hint("close")),
            max_width: 70,
        },
    );
}
