//! Core domain errors.

use thiserror::Error;

/// Core domain errors for Lifeplan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Task not found.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Invalid input (malformed field, empty classifier input, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The task store failed to serve a request.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Shorthand for building an [`CoreError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result alias used across the core crate.
pub type CoreResult<T> = Result<T, CoreError>;
