//! Common type definitions shared across the workspace.

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, TransgateError>;

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum TransgateError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TransgateError {
    /// Builds a configuration error from anything printable.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error reports an invalid configuration.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
