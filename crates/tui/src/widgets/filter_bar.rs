//! Filter bar rendering.
//!
//! Renders the four filter controls side by side, with the currently
//! active one visually marked. Exactly one control is active at any
//! time.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskboard_protocol::Filter;

/// Renders the filter bar into the given area.
///
/// Each filter gets an equal share of the width. The active filter is
/// prefixed with a marker and highlighted; the others are dimmed.
pub fn render_filter_bar(active: Filter, area: Rect, buf: &mut Buffer) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (filter, column) in Filter::ALL.into_iter().zip(columns.iter()) {
        render_filter_control(filter, filter == active, *column, buf);
    }
}

fn render_filter_control(filter: Filter, is_active: bool, area: Rect, buf: &mut Buffer) {
    let (marker, style, border_style) = if is_active {
        (
            "▸ ",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::LightBlue),
        )
    } else {
        (
            "  ",
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let line = Line::from(vec![
        Span::styled(marker, style),
        Span::styled(filter.label(), style),
    ]);

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::buffer_to_string;

    fn render(active: Filter) -> String {
        let area = Rect::new(0, 0, 72, 3);
        let mut buf = Buffer::empty(area);
        render_filter_bar(active, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn shows_all_four_filter_labels() {
        let content = render(Filter::All);
        for filter in Filter::ALL {
            assert!(content.contains(filter.label()), "missing {}", filter.label());
        }
    }

    #[test]
    fn exactly_one_control_is_marked_active() {
        for active in Filter::ALL {
            let content = render(active);
            assert_eq!(content.matches('▸').count(), 1, "active = {active:?}");
            assert!(content.contains(&format!("▸ {}", active.label())));
        }
    }

    #[test]
    fn activating_a_filter_moves_the_marker() {
        let before = render(Filter::All);
        assert!(before.contains("▸ All"));

        let after = render(Filter::Scheduled);
        assert!(!after.contains("▸ All"));
        assert!(after.contains(&format!("▸ {}", Filter::Scheduled.label())));
    }
}
