//! Configuration management for the taskboard application.
//!
//! This crate handles loading, validating, and saving the application
//! configuration: the fixed API base URL and the post-mutation refresh
//! behavior.
//!
//! # Overview
//!
//! - [`Config`]: the configuration struct and loading logic
//! - [`RefreshBehavior`]: which view a successful mutation refreshes
//! - [`persistence`]: config file discovery, reading, and writing
//! - [`ConfigError`]: error types for configuration operations
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_config::Config;
//!
//! # fn example() -> taskboard_config::Result<()> {
//! let config = Config::load()?;
//! println!("API base: {}", config.base_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, RefreshBehavior};
pub use error::{ConfigError, Result};
