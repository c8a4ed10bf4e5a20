//! Layout components (header, progress bar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

const APP_TITLE: &str = " Solar simulation ";

/// Screen regions, top to bottom
pub struct Regions {
    pub header: Rect,
    pub progress: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen into header, progress bar, content and status bar
pub fn create_layout(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        progress: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Title on the left, step counter on the right
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let counter = match app.state.current_view {
        View::Form => format!(
            " Step {} of {} ",
            app.state.step_number, app.state.step_count
        ),
        View::Results => " Your estimate ".to_string(),
    };

    let title = Paragraph::new(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    let counter_width = counter.chars().count() as u16;
    let counter_area = Rect {
        x: area.x + area.width.saturating_sub(counter_width),
        y: area.y,
        width: counter_width.min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(counter).style(Style::default().fg(Color::Gray)),
        counter_area,
    );
}

/// Progress through the form; full once results are shown
pub fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let percent = match app.state.current_view {
        View::Form => app.state.progress_percent,
        View::Results => 100.0,
    };
    let ratio = (percent / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    if app.state.location_pending {
        spans.push(Span::raw("| "));
        spans.push(Span::styled("locating...", Style::default().fg(Color::Yellow)));
    } else if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get key hints for the given view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Form => {
            "Tab:field  ←/→:choose  Space:tick  Enter:next  Esc:back  ^L:locate  ^P:privacy"
        }
        View::Results => "w:copy specialist link  b:back to form  q:quit",
    }
}
