//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the UI and trigger network effects.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{Filter, Message};
///
/// let msg = Message::ShowFilter { filter: Filter::Completed };
/// assert!(matches!(msg, Message::ShowFilter { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the task selection up.
    NavigateUp,
    /// Move the task selection down.
    NavigateDown,
    /// Fetch and display the given filter view.
    ShowFilter {
        /// The filter view to display.
        filter: Filter,
    },
    /// Re-fetch the currently active filter view.
    Refresh,
    /// Toggle completion of the selected task.
    ToggleComplete,
    /// Ask for confirmation before deleting the selected task.
    RequestDelete,
    /// Confirm a pending deletion.
    ConfirmDelete,
    /// Decline a pending deletion.
    CancelDelete,
    /// Open the new-task form.
    OpenForm,
    /// Escape: close the form or help overlay, or clear the selection.
    Escape,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // --- New-task form messages ---
    /// Input a character into the focused form field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused form field.
    FormBackspace,
    /// Move focus to the next form field.
    FormNextField,
    /// Move focus to the previous form field.
    FormPrevField,
    /// Submit the form, validating and sending the creation request.
    FormSubmit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Refresh.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
