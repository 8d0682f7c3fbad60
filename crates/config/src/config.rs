//! Core configuration struct and loading logic.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Base URL used when no configuration file is present.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/tasks";

/// Which view a successful mutation refreshes.
///
/// The upstream behavior unconditionally refreshed the "all tasks" view
/// after every create, toggle, or delete, silently resetting the active
/// filter. [`RefreshBehavior::ActiveFilter`] keeps the active filter in
/// place instead; [`RefreshBehavior::AllTasks`] restores the old behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshBehavior {
    /// Re-fetch whatever filter is currently active.
    #[default]
    ActiveFilter,
    /// Always re-fetch the unfiltered view, resetting the active filter.
    AllTasks,
}

/// The main configuration struct for the taskboard application.
///
/// Process-wide state is limited to these two values: the API location,
/// fixed at startup and never mutated, and the refresh behavior.
///
/// # Examples
///
/// ```
/// use taskboard_config::{Config, RefreshBehavior};
///
/// let config = Config::default();
/// assert_eq!(config.base_url.as_str(), "http://localhost:8080/api/tasks");
/// assert_eq!(config.refresh, RefreshBehavior::ActiveFilter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the task REST API.
    pub base_url: Url,

    /// Which view to refresh after a successful mutation.
    pub refresh: RefreshBehavior,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            refresh: RefreshBehavior::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// Searches `./taskboard.json5`, `./taskboard.json`, then the user
    /// config directory. If no configuration file is found, returns the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configured values fail validation.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedScheme`] if the base URL is not
    /// `http` or `https`.
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }),
        }
    }
}
