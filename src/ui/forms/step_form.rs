//! Current step of the lead form with its navigation buttons

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::Form;
use crate::ui::components::{button_width, render_key_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const BACK_LABEL: &str = "Back";

/// Draw the visible step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.navigator.form().current_step();

    let block = Block::default()
        .title(format!(" {} ", app.state.step_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = step
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let active = step.active_field();
    for (idx, field) in step.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, idx == active);
    }

    if let Some(button_area) = chunks.last() {
        draw_buttons(frame, *button_area, app);
    }
}

/// Back on the left (hidden on the first step), advance on the right
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let advance_width = button_width(app.state.advance_label) + 8;
    let back_width = button_width(BACK_LABEL) + 6;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(back_width),
            Constraint::Min(0),
            Constraint::Length(advance_width),
        ])
        .split(area);

    if app.state.back_visible {
        render_key_button(frame, chunks[0], "Esc", BACK_LABEL, false);
    }
    render_key_button(frame, chunks[2], "Enter", app.state.advance_label, true);
}
