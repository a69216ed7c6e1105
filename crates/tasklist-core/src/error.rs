// Rust guideline compliant 2026-10-12

//! Error types for the Tasklist core library.

use thiserror::Error;

/// Result type alias for Tasklist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised by task store operations.
///
/// A rejected operation never partially applies: the caller keeps the
/// snapshot it passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The submitted name is empty after trimming.
    #[error("Task name cannot be empty")]
    EmptyName,

    /// A non-deleted task already uses the name.
    #[error("Task name must be unique: {0}")]
    DuplicateName(String),

    /// The metric is not a finite number.
    #[error("Metric must be a finite number, got {0}")]
    InvalidMetric(String),
}

/// Error types for Tasklist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A task operation was rejected.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Caller supplied an unrecognised value (sort key, action name, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
