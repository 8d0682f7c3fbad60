//! Error types for configuration operations.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The base URL uses a scheme the client cannot speak.
    #[error("unsupported base URL scheme {scheme:?}: expected http or https")]
    UnsupportedScheme {
        /// The scheme that was configured.
        scheme: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
