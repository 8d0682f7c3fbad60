//! REST API client for taskboard.
//!
//! This crate provides the fetch layer of the application: a thin HTTP
//! client for the task-management REST API, covering the four retrieval
//! views plus creation, completion toggling, and deletion.
//!
//! # Overview
//!
//! - [`TaskClient`]: the API client, bound to a fixed base URL
//! - [`scheduled_window`]: computes the `[now, now + 7 days)` bounds for
//!   the scheduled view
//! - [`Error`]: error types for API operations
//!
//! Success is determined solely by the HTTP status class; mutation
//! endpoints need no response body. There is no authentication, caching,
//! retrying, or timeout handling: a failed operation is reported once and
//! abandoned.
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_api::TaskClient;
//! use taskboard_protocol::{Filter, NewTask};
//! use url::Url;
//!
//! # async fn example() -> taskboard_api::Result<()> {
//! let base = Url::parse("http://localhost:8080/api/tasks").unwrap();
//! let client = TaskClient::new(base)?;
//!
//! client.create(&NewTask::new("Buy milk", "", None).unwrap()).await?;
//! let tasks = client.list(Filter::Incomplete).await?;
//! println!("{} tasks still open", tasks.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{TaskClient, scheduled_window};
pub use error::{Error, Result};
