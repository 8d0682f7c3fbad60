//! Error types for protocol operations.

/// Errors that can occur when building protocol values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A task draft was submitted with an empty or whitespace-only title.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
