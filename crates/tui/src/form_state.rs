//! New-task form state and draft validation.
//!
//! This module manages the three input fields of the new-task form and
//! converts them into a validated [`NewTask`] draft. Validation happens
//! before any request is issued: an invalid draft produces a synchronous
//! error message and no network side effect.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use taskboard_protocol::{NewTask, ProtocolError};

/// Format accepted by the scheduled-date field, interpreted in the
/// viewer's local timezone.
const SCHEDULE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors produced when converting the form into a creation draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The title is empty or whitespace-only.
    #[error("Please enter a task title")]
    EmptyTitle,

    /// The scheduled field is set but not a valid local date-time.
    #[error("Scheduled date must look like 2025-06-01 18:30")]
    InvalidSchedule,
}

impl From<ProtocolError> for DraftError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::EmptyTitle => Self::EmptyTitle,
        }
    }
}

/// The input field currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The task title (required).
    #[default]
    Title,
    /// The task description (optional).
    Description,
    /// The scheduled local date-time (optional).
    ScheduledFor,
}

impl FormField {
    /// The next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::ScheduledFor,
            Self::ScheduledFor => Self::Title,
        }
    }

    /// The previous field in tab order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::ScheduledFor,
            Self::Description => Self::Title,
            Self::ScheduledFor => Self::Description,
        }
    }
}

/// The state of the new-task form.
///
/// Field contents survive a failed submission unchanged; they are only
/// cleared when the server confirms the creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Contents of the title field.
    pub title: String,
    /// Contents of the description field.
    pub description: String,
    /// Contents of the scheduled-date field (local `YYYY-MM-DD HH:MM`).
    pub scheduled_for: String,
    /// The field currently holding focus.
    pub field: FormField,
}

impl FormState {
    /// Creates an empty form focused on the title field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, ch: char) {
        self.focused_value_mut().push(ch);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Returns the contents of the given field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::ScheduledFor => &self.scheduled_for,
        }
    }

    /// Converts the form into a validated creation draft.
    ///
    /// The scheduled field, when non-empty, is parsed as a local
    /// date-time and converted to an absolute UTC instant; when empty it
    /// maps to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyTitle`] for an empty or whitespace-only
    /// title, or [`DraftError::InvalidSchedule`] for an unparsable
    /// scheduled value. In both cases no request may be sent and the form
    /// contents are left untouched.
    pub fn draft(&self) -> Result<NewTask, DraftError> {
        let scheduled_for = parse_local_schedule(&self.scheduled_for)?;
        Ok(NewTask::new(&self.title, &self.description, scheduled_for)?)
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::ScheduledFor => &mut self.scheduled_for,
        }
    }
}

/// Parses the scheduled field into an absolute instant.
///
/// Empty (after trimming) means "not scheduled". Ambiguous local times
/// around DST transitions resolve to the earlier instant.
fn parse_local_schedule(input: &str) -> Result<Option<DateTime<Utc>>, DraftError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let naive = NaiveDateTime::parse_from_str(input, SCHEDULE_FORMAT)
        .map_err(|_| DraftError::InvalidSchedule)?;
    let local = naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or(DraftError::InvalidSchedule)?;
    Ok(Some(local.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_targets_focused_field() {
        let mut form = FormState::new();
        form.input_char('a');
        form.next_field();
        form.input_char('b');
        form.next_field();
        form.input_char('c');

        assert_eq!(form.title, "a");
        assert_eq!(form.description, "b");
        assert_eq!(form.scheduled_for, "c");
    }

    #[test]
    fn backspace_on_empty_field_is_harmless() {
        let mut form = FormState::new();
        form.backspace();
        assert_eq!(form.title, "");
    }

    #[test]
    fn tab_order_wraps_both_ways() {
        let mut form = FormState::new();
        assert_eq!(form.field, FormField::Title);
        form.next_field();
        assert_eq!(form.field, FormField::Description);
        form.next_field();
        assert_eq!(form.field, FormField::ScheduledFor);
        form.next_field();
        assert_eq!(form.field, FormField::Title);
        form.prev_field();
        assert_eq!(form.field, FormField::ScheduledFor);
    }

    #[test]
    fn draft_requires_title() {
        let form = FormState::new();
        assert_eq!(form.draft(), Err(DraftError::EmptyTitle));

        let form = FormState {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.draft(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn draft_without_schedule_is_unscheduled() {
        let form = FormState {
            title: "Buy milk".to_string(),
            ..Default::default()
        };
        let draft = form.draft().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert!(draft.scheduled_for.is_none());
        assert!(!draft.completed);
    }

    #[test]
    fn draft_rejects_malformed_schedule() {
        let form = FormState {
            title: "Buy milk".to_string(),
            scheduled_for: "tomorrow at noon".to_string(),
            ..Default::default()
        };
        assert_eq!(form.draft(), Err(DraftError::InvalidSchedule));
    }

    #[test]
    fn draft_converts_local_schedule_to_instant() {
        let form = FormState {
            title: "Dentist".to_string(),
            scheduled_for: "2025-06-03 18:30".to_string(),
            ..Default::default()
        };
        let draft = form.draft().unwrap();
        let instant = draft.scheduled_for.expect("schedule should be set");

        // Round-tripping back to local time recovers the entered wall clock
        let local = instant.with_timezone(&Local);
        assert_eq!(local.format(SCHEDULE_FORMAT).to_string(), "2025-06-03 18:30");
    }

    #[test]
    fn invalid_draft_leaves_fields_untouched() {
        let form = FormState {
            title: String::new(),
            description: "milk, eggs".to_string(),
            ..Default::default()
        };
        let before = form.clone();
        assert!(form.draft().is_err());
        assert_eq!(form, before);
    }
}
