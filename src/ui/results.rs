//! Sizing results view

use crate::app::App;
use crate::sizing::SizingResult;
use crate::ui::components::{button_width, render_key_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BACK_LABEL: &str = "Back to form";
const COPY_LABEL: &str = "Copy specialist link";

const DISCLAIMER: &str = "This is a preliminary estimate based on average values. \
A specialist will confirm the figures after a technical visit.";

/// Label and formatted value for every figure shown
pub(super) fn result_rows(result: &SizingResult) -> Vec<(&'static str, String)> {
    vec![
        (
            "Monthly consumption",
            format!("{:.2} kWh", result.monthly_consumption_kwh),
        ),
        (
            "Required power",
            format!("{:.2} kWp", result.required_power_kw),
        ),
        ("Panels", result.panel_count.to_string()),
        (
            "Installed power",
            format!("{:.2} kWp", result.installed_power_kw),
        ),
        (
            "Monthly production",
            format!("{:.2} kWh", result.monthly_production_kwh),
        ),
        (
            "Required area",
            format!("{:.2} m²", result.required_area_m2),
        ),
    ]
}

/// Draw the results view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Your solar estimate ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(result) = app.state.result.as_ref() else {
        return;
    };

    let rows = result_rows(result);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.len() as u16 + 1), // Figures
            Constraint::Length(3),                     // Disclaimer
            Constraint::Min(0),                        // Call to action
            Constraint::Length(BUTTON_HEIGHT),         // Actions
        ])
        .margin(1)
        .split(inner);

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let figures: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<22}"), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(figures), chunks[0]);

    frame.render_widget(
        Paragraph::new(DISCLAIMER)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let link = app
        .config()
        .specialist_link()
        .map(|url| url.to_string())
        .unwrap_or_default();
    let cta = vec![
        Line::from("Want to talk to a specialist?"),
        Line::from(Span::styled(link, Style::default().fg(Color::Blue))),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "w",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to copy the WhatsApp link to your clipboard."),
        ]),
    ];
    frame.render_widget(Paragraph::new(cta).wrap(Wrap { trim: true }), chunks[2]);

    draw_actions(frame, chunks[3]);
}

/// Back to the form on the left, copy the deep link on the right
fn draw_actions(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(BACK_LABEL) + 4),
            Constraint::Min(0),
            Constraint::Length(button_width(COPY_LABEL) + 4),
        ])
        .split(area);

    render_key_button(frame, chunks[0], "b", BACK_LABEL, false);
    render_key_button(frame, chunks[2], "w", COPY_LABEL, true);
}
