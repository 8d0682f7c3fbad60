//! New-task form rendering.
//!
//! The form is drawn as a centered overlay with three labelled input
//! fields. The focused field carries a highlighted border and a trailing
//! cursor block.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::form_state::{FormField, FormState};
use crate::layout::FORM_HEIGHT;
use crate::widgets::centered_rect;

const FORM_WIDTH: u16 = 50;

/// Renders the new-task form as a centered overlay.
pub fn render_form(form: &FormState, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup, buf);

    let frame = Block::default()
        .borders(Borders::ALL)
        .title(" New task ")
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = frame.inner(popup);
    frame.render(popup, buf);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .split(inner);

    render_field(form, FormField::Title, "Title", rows[0], buf);
    render_field(form, FormField::Description, "Description", rows[1], buf);
    render_field(form, FormField::ScheduledFor, "Scheduled (YYYY-MM-DD HH:MM)", rows[2], buf);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Add  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .render(rows[3], buf);
}

fn render_field(form: &FormState, field: FormField, label: &str, area: Rect, buf: &mut Buffer) {
    let focused = form.field == field;
    let label_style = if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut value_spans = vec![Span::raw(form.value(field).to_string())];
    if focused {
        value_spans.push(Span::styled("█", Style::default().fg(Color::LightBlue)));
    }

    let lines = vec![
        Line::from(Span::styled(format!("{label}:"), label_style)),
        Line::from(value_spans),
    ];
    Paragraph::new(lines).render(area, buf);
}
