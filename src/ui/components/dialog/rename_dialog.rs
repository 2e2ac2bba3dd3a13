//! Rename dialog: alias input with Cancel and Save buttons

use super::base::{centered_rect, render_dialog_frame};
use crate::platform::SAVE_SHORTCUT;
use crate::state::{RenameFocus, RenameForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::{draw_field, draw_field_error};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 13;

/// Label of the save button for the current submission state
pub fn save_label(is_submitting: bool, spinner: &str) -> String {
    if is_submitting {
        format!("{spinner} Saving...")
    } else {
        "Save".to_string()
    }
}

/// Render the rename dialog overlay centered on the screen
pub fn render_rename_dialog(frame: &mut Frame, form: &RenameForm, spinner: &str) {
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    let inner = render_dialog_frame(frame, dialog_area, "Edit Provider", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Current alias
            Constraint::Length(1),             // Provider id
            Constraint::Length(1),             // Spacer
            Constraint::Length(3),             // Alias input
            Constraint::Length(1),             // Inline error
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Hints
        ])
        .horizontal_margin(1)
        .split(inner);

    let is_submitting = form.is_submitting();
    let enabled = !is_submitting;

    let current = Line::from(vec![
        Span::styled("Current alias: ", Style::default().fg(Color::Gray)),
        Span::styled(
            form.current_alias().unwrap_or("(none)"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(current), chunks[0]);

    let id_field = form.provider_id_field();
    let id_line = Line::from(Span::styled(
        format!("Provider {}", id_field.as_text()),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(id_line), chunks[1]);

    draw_field(
        frame,
        chunks[3],
        form.alias_field(),
        form.focus == RenameFocus::Alias,
        enabled,
    );
    // A blank provider id can only fail validation, never be edited
    if id_field.error.is_some() {
        draw_field_error(frame, chunks[4], id_field);
    } else {
        draw_field_error(frame, chunks[4], form.alias_field());
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);

    render_button(
        frame,
        buttons[0],
        "Cancel",
        form.focus == RenameFocus::Cancel,
        enabled,
        Color::Gray,
    );
    render_button(
        frame,
        buttons[1],
        &save_label(is_submitting, spinner),
        form.focus == RenameFocus::Save,
        enabled,
        Color::Green,
    );

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled(SAVE_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::styled(" save  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Provider, RenameSchema};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(form: &RenameForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_rename_dialog(frame, form, "*"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn create_test_form() -> RenameForm {
        RenameForm::new(
            &Provider::new("p1", Some("staging".to_string())),
            RenameSchema::default(),
        )
    }

    #[test]
    fn test_save_label() {
        assert_eq!(save_label(false, "*"), "Save");
        assert_eq!(save_label(true, "*"), "* Saving...");
    }

    #[test]
    fn test_renders_current_alias_and_placeholder() {
        let screen = render(&create_test_form());
        assert!(screen.contains("Current alias: staging"));
        assert!(screen.contains("Provider p1"));
        assert!(screen.contains("Save"));
        assert!(screen.contains("Cancel"));
        assert!(!screen.contains("Saving..."));
    }

    #[test]
    fn test_renders_saving_while_submitting() {
        let mut form = create_test_form();
        form.begin_submit();
        let screen = render(&form);
        assert!(screen.contains("* Saving..."));
    }

    #[test]
    fn test_renders_inline_error() {
        let mut form = RenameForm::new(&Provider::new("p1", None), RenameSchema::new(true));
        let _ = form.validate();
        let screen = render(&form);
        assert!(screen.contains("Required"));
        assert!(screen.contains("Current alias: (none)"));
    }
}
