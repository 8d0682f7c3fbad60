//! Shared protocol types for the taskboard application.
//!
//! This crate defines the core types used across all taskboard components,
//! including the server-owned task record, creation drafts, filter views,
//! and TUI event messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: The `Task` record, `NewTask` draft, and `CompletionUpdate` body
//! - [`filter`]: The four filter views and their display labels
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Drafting a new task for submission to the server:
//!
//! ```
//! use taskboard_protocol::NewTask;
//!
//! let draft = NewTask::new("Buy milk", "", None).unwrap();
//! assert_eq!(draft.title, "Buy milk");
//! assert!(!draft.completed);
//!
//! // A whitespace-only title is rejected before any request is made
//! assert!(NewTask::new("   ", "", None).is_err());
//! ```

pub mod error;
pub mod filter;
pub mod message;
pub mod task;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use filter::Filter;
pub use message::Message;
pub use task::{CompletionUpdate, NewTask, Task, TaskId};
