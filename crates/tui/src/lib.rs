//! Terminal UI for the taskboard application.
//!
//! This crate provides a Ratatui-based terminal interface for the task
//! board: it renders the task list, the filter bar, and the new-task form,
//! and drives the fetch layer in response to user input.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct, update logic, and run loop
//! - [`state`]: Application state management
//! - [`form_state`]: New-task form state and draft validation
//! - [`event`]: Event polling and per-mode key mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Rendering functions for each visual component
//!
//! # Example
//!
//! ```no_run
//! use taskboard_api::TaskClient;
//! use taskboard_config::Config;
//! use taskboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let config = Config::default();
//!     let client = TaskClient::new(config.base_url.clone())?;
//!     let mut app = App::new(config);
//!     let result = app.run(&mut terminal, &client).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form_state;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

// Re-export primary types at crate root for convenience
pub use app::{App, Effect};
pub use form_state::{DraftError, FormField, FormState};
pub use state::{AppState, StatusLine};
