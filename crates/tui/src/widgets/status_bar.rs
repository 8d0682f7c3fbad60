//! Status bar rendering.
//!
//! The footer shows either the current status message (the terminal
//! analog of the original client's alerts) or the key hints for the
//! board view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::StatusLine;

/// Renders the status bar into the given area.
///
/// When a status message is present it takes the whole bar; errors are
/// shown in red, informational messages in green. Otherwise the default
/// key hints are shown.
pub fn render_status_bar(status: Option<&StatusLine>, area: Rect, buf: &mut Buffer) {
    let line = match status {
        Some(status) => {
            let color = if status.is_error {
                Color::Red
            } else {
                Color::Green
            };
            Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(color),
            ))
        }
        None => default_hints(),
    };

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
}

fn default_hints() -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("[a]", key_style),
        Span::styled(" Add  ", text_style),
        Span::styled("[1-4]", key_style),
        Span::styled(" Views  ", text_style),
        Span::styled("[r]", key_style),
        Span::styled(" Refresh  ", text_style),
        Span::styled("[?]", key_style),
        Span::styled(" Help  ", text_style),
        Span::styled("[Ctrl+C]", key_style),
        Span::styled(" Quit", text_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::buffer_to_string;

    fn render(status: Option<&StatusLine>) -> String {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        render_status_bar(status, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn shows_hints_when_no_status() {
        let content = render(None);
        assert!(content.contains("[a] Add"));
        assert!(content.contains("[Ctrl+C] Quit"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let status = StatusLine::error("Failed to fetch tasks");
        let content = render(Some(&status));
        assert!(content.contains("Failed to fetch tasks"));
        assert!(!content.contains("[a] Add"));
    }

    #[test]
    fn info_message_shown() {
        let status = StatusLine::info("Task added");
        let content = render(Some(&status));
        assert!(content.contains("Task added"));
    }
}
