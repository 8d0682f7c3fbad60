//! Delete confirmation prompt.
//!
//! A small centered overlay asking the user to confirm a pending
//! deletion. Only an explicit `y` proceeds; anything else declines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::centered_rect;

const PROMPT_WIDTH: u16 = 44;
const PROMPT_HEIGHT: u16 = 5;

/// Renders the delete confirmation prompt for the named task.
pub fn render_confirm_prompt(task_title: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
    Clear.render(popup, buf);

    let max_title = popup.width.saturating_sub(4) as usize;
    let title = truncated(task_title, max_title);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Delete this task? "),
            Span::styled("[y]", Style::default().fg(Color::Yellow)),
            Span::raw(" Yes  "),
            Span::styled("[any]", Style::default().fg(Color::Yellow)),
            Span::raw(" No"),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .render(popup, buf);
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
