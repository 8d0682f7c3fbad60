//! Task record and request body types.
//!
//! This module defines the server-owned [`Task`] record along with the two
//! request bodies the client sends: [`NewTask`] for creation and
//! [`CompletionUpdate`] for the completion toggle. Wire names are camelCase
//! to match the REST API's JSON contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Assigned by the server on creation; the client never invents or
/// mutates one.
pub type TaskId = i64;

/// A task as returned by the server.
///
/// The client treats this as an opaque DTO: every view is freshly fetched,
/// and all mutations are round-tripped through the server. Instances only
/// live for a single render pass and are discarded on the next refresh.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Task;
///
/// let json = r#"{
///     "id": 5,
///     "title": "Buy milk",
///     "description": "",
///     "createdAt": "2025-06-01T09:00:00Z",
///     "scheduledFor": null,
///     "completed": false
/// }"#;
/// let task: Task = serde_json::from_str(json).unwrap();
/// assert_eq!(task.id, 5);
/// assert!(task.scheduled_for.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier.
    pub id: TaskId,
    /// Short summary of the task. Non-empty on creation.
    pub title: String,
    /// Optional longer description; empty when not provided.
    #[serde(default)]
    pub description: String,
    /// When the server created this task.
    pub created_at: DateTime<Utc>,
    /// When this task is scheduled for, if at all.
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Whether the task has been completed.
    pub completed: bool,
}

/// A draft for a task creation request.
///
/// Mirrors the `POST` body `{title, description, scheduledFor, completed}`.
/// Construction through [`NewTask::new`] enforces the one client-side
/// validation rule: the title must be non-empty after trimming. A draft that
/// fails validation never reaches the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description; may be empty.
    pub description: String,
    /// Scheduled instant, or `None` (serialized as `null`) when unscheduled.
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Always `false` on creation; present because the wire body carries it.
    pub completed: bool,
}

impl NewTask {
    /// Builds a creation draft, trimming both text fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyTitle`] if the title is empty or
    /// whitespace-only after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::NewTask;
    ///
    /// let draft = NewTask::new("  Buy milk  ", " 2 liters ", None).unwrap();
    /// assert_eq!(draft.title, "Buy milk");
    /// assert_eq!(draft.description, "2 liters");
    /// assert!(!draft.completed);
    /// ```
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ProtocolError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.as_ref().trim().to_string(),
            scheduled_for,
            completed: false,
        })
    }
}

/// The partial-update body for the completion toggle.
///
/// Sent as `PUT /{id}` with `{"completed": <bool>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUpdate {
    /// The new completion state.
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: 7,
            title: "Water plants".to_string(),
            description: "The ones on the balcony".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            scheduled_for: Some(Utc.with_ymd_and_hms(2025, 6, 3, 18, 30, 0).unwrap()),
            completed: false,
        }
    }

    #[test]
    fn task_uses_camel_case_wire_names() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("scheduledFor").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("scheduled_for").is_none());
    }

    #[test]
    fn task_deserializes_missing_scheduled_for_as_none() {
        let json = r#"{
            "id": 1,
            "title": "Untimed",
            "description": "",
            "createdAt": "2025-06-01T09:00:00Z",
            "completed": true
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.scheduled_for.is_none());
        assert!(task.completed);
    }

    #[test]
    fn task_deserializes_missing_description_as_empty() {
        let json = r#"{
            "id": 1,
            "title": "Bare",
            "createdAt": "2025-06-01T09:00:00Z",
            "completed": false
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn new_task_trims_fields() {
        let draft = NewTask::new("  Buy milk ", "  whole fat  ", None).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "whole fat");
    }

    #[test]
    fn new_task_rejects_empty_title() {
        assert_eq!(NewTask::new("", "desc", None), Err(ProtocolError::EmptyTitle));
        assert_eq!(
            NewTask::new("   \t ", "desc", None),
            Err(ProtocolError::EmptyTitle)
        );
    }

    #[test]
    fn new_task_defaults_to_incomplete() {
        let draft = NewTask::new("Buy milk", "", None).unwrap();
        assert!(!draft.completed);
    }

    #[test]
    fn new_task_serializes_null_schedule_explicitly() {
        // The creation body always carries scheduledFor, null when unset
        let draft = NewTask::new("Buy milk", "", None).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("scheduledFor").unwrap().is_null());
        assert_eq!(json.get("completed").unwrap(), false);
    }

    #[test]
    fn completion_update_wire_format() {
        let body = CompletionUpdate { completed: true };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"completed":true}"#
        );
    }
}
