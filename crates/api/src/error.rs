//! Error types for API operations.

use reqwest::StatusCode;
use url::Url;

/// Errors that can occur during task API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    ///
    /// Covers connection failures, DNS errors, and malformed JSON bodies.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status {
        /// The status the server returned.
        status: StatusCode,
    },

    /// The configured base URL cannot carry path segments.
    #[error("invalid base URL: {url}")]
    BaseUrl {
        /// The offending URL.
        url: Url,
    },
}

/// A specialized Result type for task API operations.
pub type Result<T> = std::result::Result<T, Error>;
