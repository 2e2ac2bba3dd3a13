//! Layout components (provider screen, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the provider the dialog edits
pub fn draw_provider(frame: &mut Frame, area: Rect, app: &App) {
    let provider = &app.state.provider;

    let label = Style::default().fg(Color::Gray);
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Alias  ", label),
            Span::styled(
                provider.display_name(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Id     ", label),
            Span::styled(provider.id.as_str(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let block = Block::default()
        .title(" Provider ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let status = if app.state.dialog.is_submitting() {
        Span::styled(
            format!(" {} ", app.spinner_frame()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(status);

    spans.push(Span::styled(
        get_hints(app.state.dialog.is_visible()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current screen
fn get_hints(dialog_open: bool) -> &'static str {
    if dialog_open {
        "Tab:next  Enter:press  Esc:cancel"
    } else {
        "e:edit alias  q:quit"
    }
}
