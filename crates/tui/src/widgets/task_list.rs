//! Task list rendering.
//!
//! This module renders the current fetch result as a vertical sequence of
//! task rows, preserving input order. Each row shows the title, the
//! description when present, the scheduled date (in the viewer's local
//! time) when set, and the action hints for the completion toggle and
//! deletion.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskboard_protocol::Task;

/// Returns the number of rows a task occupies, borders included.
///
/// The row grows by one line each for a non-empty description and a set
/// schedule.
#[must_use]
pub fn task_row_height(task: &Task) -> u16 {
    // borders + title + action hints
    let mut height = 4;
    if !task.description.is_empty() {
        height += 1;
    }
    if task.scheduled_for.is_some() {
        height += 1;
    }
    height
}

/// Renders the task list into the given area.
///
/// Rows are laid out top to bottom in input order. When the list is
/// longer than the area, the window is shifted so the selected row stays
/// visible; rows that do not fully fit are not drawn.
pub fn render_task_list(tasks: &[Task], selected: Option<usize>, area: Rect, buf: &mut Buffer) {
    if tasks.is_empty() {
        let empty = Paragraph::new("No tasks to show")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        empty.render(area, buf);
        return;
    }

    let start = first_visible_row(tasks, selected, area.height);
    let mut y = area.y;
    for (idx, task) in tasks.iter().enumerate().skip(start) {
        let height = task_row_height(task);
        if y + height > area.y + area.height {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_task_row(task, selected == Some(idx), row_area, buf);
        y += height;
    }
}

/// Renders a single task row.
fn render_task_row(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 8 || area.height < 3 {
        return;
    }

    let border_color = match (is_selected, task.completed) {
        (true, _) => Color::LightBlue,
        (false, true) => Color::Green,
        (false, false) => Color::Gray,
    };

    let mut title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if task.completed {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }

    let mut lines = vec![Line::from(Span::styled(&task.title, title_style))];
    if !task.description.is_empty() {
        lines.push(Line::from(Span::styled(
            task.description.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(label) = schedule_label(task) {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(action_hints(task.completed));

    let row = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    row.render(area, buf);
}

/// Returns the scheduled-date line for a task, if it is scheduled.
///
/// The instant is converted to the viewer's local timezone.
fn schedule_label(task: &Task) -> Option<String> {
    task.scheduled_for.map(|instant| {
        format!(
            "Scheduled for: {}",
            instant.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        )
    })
}

/// Returns the action hint line: the completion toggle reads `Complete`
/// for an open task and `Undo` for a completed one.
fn action_hints(completed: bool) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let toggle = if completed { " Undo  " } else { " Complete  " };

    Line::from(vec![
        Span::styled("[Enter]", key_style),
        Span::styled(toggle, text_style),
        Span::styled("[d]", key_style),
        Span::styled(" Delete", text_style),
    ])
}

/// Computes the first row index to draw so the selection stays visible.
fn first_visible_row(tasks: &[Task], selected: Option<usize>, height: u16) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    let mut start = 0;
    loop {
        let used: u16 = tasks[start..=selected].iter().map(task_row_height).sum();
        if used <= height || start == selected {
            return start;
        }
        start += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::buffer_to_string;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, title: &str, description: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            scheduled_for: None,
            completed,
        }
    }

    fn render(tasks: &[Task], selected: Option<usize>) -> String {
        let area = Rect::new(0, 0, 60, 40);
        let mut buf = Buffer::empty(area);
        render_task_list(tasks, selected, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_one_row_per_task_in_order() {
        let tasks = vec![
            task(1, "First", "", false),
            task(2, "Second", "", false),
            task(3, "Third", "", false),
        ];
        let content = render(&tasks, None);

        assert_eq!(content.matches("Delete").count(), 3);
        let first = content.find("First").unwrap();
        let second = content.find("Second").unwrap();
        let third = content.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn rendering_is_idempotent() {
        let tasks = vec![task(1, "Only", "desc", false)];
        assert_eq!(render(&tasks, None), render(&tasks, None));
    }

    #[test]
    fn description_shown_only_when_present() {
        let tasks = vec![
            task(1, "With", "the details", false),
            task(2, "Without", "", false),
        ];
        let content = render(&tasks, None);
        assert!(content.contains("the details"));

        assert_eq!(task_row_height(&tasks[0]), 5);
        assert_eq!(task_row_height(&tasks[1]), 4);
    }

    #[test]
    fn scheduled_line_only_for_scheduled_tasks() {
        let mut scheduled = task(1, "Dentist", "", false);
        scheduled.scheduled_for = Some(Utc.with_ymd_and_hms(2025, 6, 3, 18, 30, 0).unwrap());
        let unscheduled = task(2, "Whenever", "", false);

        let content = render(&[scheduled.clone(), unscheduled.clone()], None);
        assert_eq!(content.matches("Scheduled for:").count(), 1);

        // The label carries the local rendering of the instant
        let expected = scheduled
            .scheduled_for
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert!(content.contains(&expected));
    }

    #[test]
    fn toggle_hint_reflects_completion_state() {
        let content = render(&[task(1, "Open", "", false)], None);
        assert!(content.contains("Complete"));
        assert!(!content.contains("Undo"));

        let content = render(&[task(1, "Done", "", true)], None);
        assert!(content.contains("Undo"));
        assert!(!content.contains("Complete"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let content = render(&[], None);
        assert!(content.contains("No tasks to show"));
    }

    #[test]
    fn selection_far_down_shifts_window() {
        let tasks: Vec<Task> = (0..20)
            .map(|i| task(i, &format!("Task number {i}"), "", false))
            .collect();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        render_task_list(&tasks, Some(19), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Task number 19"));
        assert!(!content.contains("Task number 0"));
    }
}
