//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width a button needs to fit its label
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render a button with border.
///
/// The primary button is highlighted; the other one is drawn dimmed.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_primary: bool) {
    let border_style = if is_primary {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_primary {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a button with the key that triggers it
pub fn render_key_button(frame: &mut Frame, area: Rect, key: &str, label: &str, is_primary: bool) {
    let content = format!("{label} [{key}]");
    render_button(frame, area, &content, is_primary);
}
