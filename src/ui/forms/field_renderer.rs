//! Field rendering utilities for forms

use super::a11y::FieldA11y;
use crate::state::FieldDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const REQUIRED_MARKER: &str = " *";

fn border_style(is_active: bool, a11y: &FieldA11y) -> Style {
    if a11y.invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn title(desc: &FieldDescriptor) -> String {
    let label = desc.label.unwrap_or_default();
    let marker = if desc.required { REQUIRED_MARKER } else { "" };
    format!(" {label}{marker} ")
}

/// Draw a bordered text input with its label as the block title
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    desc: &FieldDescriptor,
    value: &str,
    is_active: bool,
    a11y: &FieldA11y,
) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if desc.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(title(desc))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, a11y));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw one bordered radio option; the selected option is highlighted
pub fn draw_radio_option(
    frame: &mut Frame,
    area: Rect,
    desc: &FieldDescriptor,
    is_checked: bool,
    is_active: bool,
    a11y: &FieldA11y,
) {
    let mark = if is_checked { "(•) " } else { "( ) " };
    let style = if is_checked {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, a11y));
    if is_checked {
        block = block.style(Style::default().bg(Color::Rgb(0x1c, 0x3a, 0x40)));
    }

    let line = Line::from(vec![
        Span::styled(mark, style),
        Span::styled(desc.about.unwrap_or_default(), style),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the consent checkbox line
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    desc: &FieldDescriptor,
    is_checked: bool,
    is_active: bool,
    a11y: &FieldA11y,
) {
    let mark = if is_checked { "[x] " } else { "[ ] " };
    let mark_style = if a11y.invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let text_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if desc.required { REQUIRED_MARKER } else { "" };

    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(desc.about.unwrap_or_default(), text_style),
        Span::raw(marker),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a group label such as "Query Type *"
pub fn draw_group_label(frame: &mut Frame, area: Rect, desc: &FieldDescriptor) {
    frame.render_widget(Paragraph::new(title(desc).trim().to_string()), area);
}

/// Draw the error text of a field, or nothing if it is valid
pub fn draw_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let error = Paragraph::new(message.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::find;

    #[test]
    fn test_title_has_required_marker() {
        assert_eq!(title(find("firstName").unwrap()), " First Name * ");
    }

    #[test]
    fn test_title_without_label_or_marker() {
        assert_eq!(title(find("supportRequest").unwrap()), "  ");
    }

    #[test]
    fn test_invalid_border_wins_over_focus() {
        let a11y = FieldA11y {
            invalid: true,
            described_by: Some("email-error".to_string()),
        };
        assert_eq!(border_style(true, &a11y).fg, Some(Color::Red));
        let valid = FieldA11y {
            invalid: false,
            described_by: None,
        };
        assert_eq!(border_style(true, &valid).fg, Some(Color::Cyan));
        assert_eq!(border_style(false, &valid).fg, Some(Color::DarkGray));
    }
}
