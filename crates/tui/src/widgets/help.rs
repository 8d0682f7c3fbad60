//! Help overlay rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::centered_rect;

const HELP_WIDTH: u16 = 46;

const BINDINGS: &[(&str, &str)] = &[
    ("1", "Show all tasks"),
    ("2", "Show completed tasks"),
    ("3", "Show incomplete tasks"),
    ("4", "Show tasks scheduled within 7 days"),
    ("Up/Down", "Navigate the task list"),
    ("Enter/Space", "Complete or undo the selected task"),
    ("d", "Delete the selected task"),
    ("a", "Add a new task"),
    ("r", "Refresh the current view"),
    ("Esc", "Clear selection"),
    ("?", "Toggle this help"),
    ("Ctrl+C", "Quit"),
];

/// Renders the key binding reference as a centered overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let height = BINDINGS.len() as u16 + 2;
    let popup = centered_rect(HELP_WIDTH, height, area);
    Clear.render(popup, buf);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>12}  "), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::LightBlue)),
        )
        .render(popup, buf);
}
