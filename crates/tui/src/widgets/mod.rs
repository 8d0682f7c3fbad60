//! Widget components for the taskboard TUI.
//!
//! This module provides the rendering functions for the task board UI,
//! organized into focused submodules for each visual component.
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. Rendering is
//! idempotent: the same input always produces the same visible result,
//! and there are no side effects beyond the buffer.
//!
//! # Modules
//!
//! - [`task_list`]: Renders the task rows for the current view
//! - [`filter_bar`]: Renders the four filter controls with the active one marked
//! - [`form`]: Renders the new-task input form
//! - [`confirm`]: Renders the delete confirmation prompt
//! - [`status_bar`]: Renders the footer with hints and status messages
//! - [`help`]: Renders the help overlay

pub mod confirm;
pub mod filter_bar;
pub mod form;
pub mod help;
pub mod status_bar;
pub mod task_list;

// Re-export primary rendering functions for convenience
pub use confirm::render_confirm_prompt;
pub use filter_bar::render_filter_bar;
pub use form::render_form;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use task_list::{render_task_list, task_row_height};

use ratatui::layout::Rect;

/// Returns a rectangle of the given size centered within `area`, clamped
/// to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use ratatui::buffer::Buffer;

    /// Converts a buffer to a string representation for assertions.
    pub fn buffer_to_string(buf: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            let trimmed = result.trim_end_matches(' ');
            result.truncate(trimmed.len());
            result.push('\n');
        }
        result
    }
}
