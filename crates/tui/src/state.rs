//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the currently displayed task list, the active filter, selection
//! tracking, and the transient UI state (form, pending deletion, status
//! line).

use taskboard_protocol::{Filter, Task, TaskId};

use crate::form_state::FormState;

/// A one-line status or error message shown in the status bar.
///
/// This is the terminal analog of the original client's alert: each failed
/// operation collapses into one generic human-readable message, and no
/// structured error codes reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// The message text.
    pub text: String,
    /// Whether this message reports a failure.
    pub is_error: bool,
}

impl StatusLine {
    /// Creates an informational status message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Creates an error status message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The application state.
///
/// The task list is ephemeral: it holds exactly one fetch result and is
/// replaced wholesale by the next one. There is no client-side task cache
/// or persistent collection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tasks currently displayed, in server order.
    pub tasks: Vec<Task>,
    /// The most recently applied filter view.
    pub active_filter: Filter,
    /// Index of the selected task row, if any.
    pub selected: Option<usize>,
    /// The new-task form, when open.
    pub form: Option<FormState>,
    /// Id of the task awaiting delete confirmation, if any.
    pub pending_delete: Option<TaskId>,
    /// Current status bar message, if any.
    pub status: Option<StatusLine>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty application state showing the "all" view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            active_filter: Filter::All,
            selected: None,
            form: None,
            pending_delete: None,
            status: None,
            help_visible: false,
        }
    }

    /// Replaces the displayed tasks with a fresh fetch result and marks
    /// the filter it came from as active.
    ///
    /// The previous list is discarded entirely; the selection is clamped
    /// to the new list.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Filter;
    /// use taskboard_tui::AppState;
    ///
    /// let mut state = AppState::new();
    /// state.set_tasks(Filter::Completed, vec![]);
    /// assert_eq!(state.active_filter, Filter::Completed);
    /// ```
    pub fn set_tasks(&mut self, filter: Filter, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.active_filter = filter;
        self.clamp_selection();
    }

    /// Moves the task selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        if self.tasks.is_empty() {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => self.tasks.len() - 1,
            None => 0,
        });
    }

    /// Moves the task selection down, wrapping to the top.
    pub fn navigate_down(&mut self) {
        if self.tasks.is_empty() {
            self.selected = None;
            return;
        }

        let max_idx = self.tasks.len() - 1;
        self.selected = Some(match self.selected {
            Some(idx) if idx < max_idx => idx + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Returns a reference to the currently selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected?)
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Ensures the selection is valid for the current task list.
    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected = None;
        } else if let Some(idx) = self.selected
            && idx >= self.tasks.len()
        {
            self.selected = Some(self.tasks.len() - 1);
        }
    }
}
