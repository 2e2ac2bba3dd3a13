//! Toast stack rendering

use super::components::wrap_text;
use crate::notifications::Severity;
use crate::state::ToastQueue;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 44;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Render toasts stacked upward from the bottom-right corner of `area`
pub fn draw(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_MAX_WIDTH.min(area.width);
    if width < 6 {
        return;
    }
    let text_width = (width - 4) as usize;
    let mut bottom = area.bottom();

    // Newest toast sits at the bottom
    for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        let notification = &toast.notification;
        let color = severity_color(notification.severity);

        let mut lines = vec![Line::from(Span::styled(
            notification.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if !notification.description.is_empty() {
            lines.extend(
                wrap_text(&notification.description, text_width)
                    .into_iter()
                    .map(Line::from),
            );
        }

        let available = bottom.saturating_sub(area.top());
        if available == 0 {
            break;
        }
        let x = area.right() - width;

        if available < 3 {
            // No room for a border; keep the title visible
            lines.truncate(1);
            let title_area = Rect {
                x,
                y: bottom - 1,
                width,
                height: 1,
            };
            frame.render_widget(Clear, title_area);
            frame.render_widget(
                Paragraph::new(lines).style(Style::default().bg(Color::Black)),
                title_area,
            );
            break;
        }

        let wanted = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let height = wanted.min(available);
        if height < wanted {
            lines.truncate(usize::from(height - 2));
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::raw("…"));
            }
        }

        let toast_area = Rect {
            x,
            y: bottom - height,
            width,
            height,
        };
        bottom -= height;

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black));
        frame.render_widget(Paragraph::new(lines).block(block), toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Notification;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(toasts: &ToastQueue, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), toasts))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_description() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::error(
            "Oops! Something went wrong",
            "alias already exists",
        ));
        let screen = render(&toasts, 80, 10);
        assert!(screen.contains("Oops! Something went wrong"));
        assert!(screen.contains("alias already exists"));
    }

    #[test]
    fn test_older_toast_collapses_to_title_when_short() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::info("first", ""));
        toasts.push(Notification::info("second", ""));
        // One 3-row toast plus a single spare row
        let screen = render(&toasts, 80, 4);
        assert!(screen.contains("second"));
        assert!(screen.contains("first"));
    }

    #[test]
    fn test_long_error_is_clipped_not_dropped() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::error(
            "Oops! Something went wrong",
            "alias already exists for another provider in this workspace and \
             cannot be reused until that provider is renamed first",
        ));
        let screen = render(&toasts, 80, 5);
        assert!(screen.contains("Oops! Something went wrong"));
        assert!(screen.contains("alias already exists"));
        assert!(screen.contains('…'));
    }

    #[test]
    fn test_title_shown_without_room_for_border() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::error("Oops! Something went wrong", "detail"));
        let screen = render(&toasts, 80, 2);
        assert!(screen.contains("Oops! Something went wrong"));
        assert!(!screen.contains("detail"));
    }

    #[test]
    fn test_huge_description_does_not_overflow_height() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::error("title", "x\n".repeat(70_000)));
        let screen = render(&toasts, 80, 6);
        assert!(screen.contains("title"));
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let mut toasts = ToastQueue::default();
        toasts.push(Notification::info("hidden", ""));
        let screen = render(&toasts, 4, 4);
        assert!(!screen.contains("hidden"));
    }
}
