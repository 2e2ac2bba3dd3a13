//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field with placeholder and inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let accent = if field.error.is_some() {
        Color::Red
    } else if is_active && is_enabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if field.shows_placeholder() || !is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(field.display_value(), value_style)];
    if is_active && is_enabled {
        spans.insert(
            usize::from(!field.shows_placeholder()),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        );
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the inline error for a field, or nothing
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(error) = &field.error {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
