//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a bordered field takes
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer.
///
/// Flagged fields get a red border until the user edits them.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if field.flagged {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let content = match field.kind {
        FieldKind::Select => select_line(field, is_active),
        FieldKind::Checkbox => checkbox_line(field, is_active),
        _ => text_line(field, is_active),
    };

    let mut title = format!(" {} ", field.label);
    if field.required {
        title.push_str("* ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn text_line(field: &FormField, is_active: bool) -> Line<'static> {
    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    if display_value.is_empty() && !is_active {
        return Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn checkbox_line(field: &FormField, is_active: bool) -> Line<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(field.display_value(), style),
        Span::raw(" "),
        Span::styled(field.label.clone(), style),
    ])
}

/// One span per option; the chosen one is highlighted
fn select_line(field: &FormField, is_active: bool) -> Line<'static> {
    let FieldValue::Choice { options, selected } = &field.value else {
        return Line::from(field.display_value());
    };

    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, option) in options.iter().enumerate() {
        let chosen = Some(i) == *selected;
        let marker = if chosen { "(•)" } else { "( )" };
        let style = match (chosen, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{marker} {}", option.label), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldOption;
    use pretty_assertions::assert_eq;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_inactive_text_shows_placeholder() {
        let field = FormField::text("name", "Name", FieldKind::Text, true);
        assert_eq!(plain(&text_line(&field, false)), "(empty)");
        assert_eq!(plain(&text_line(&field, true)), "▌");
    }

    #[test]
    fn test_select_line_marks_choice() {
        const OPTIONS: &[FieldOption] = &[
            FieldOption::new("roof", "Roof"),
            FieldOption::new("ground", "Ground"),
        ];
        let mut field = FormField::select("site", "Site", OPTIONS, true);
        field.select_key("ground");
        assert_eq!(plain(&select_line(&field, true)), "( ) Roof  (•) Ground");
    }

    #[test]
    fn test_checkbox_line() {
        let mut field = FormField::checkbox("ok", "I agree", true);
        field.toggle();
        assert_eq!(plain(&checkbox_line(&field, false)), "[x] I agree");
    }
}
