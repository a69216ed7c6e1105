// Rust guideline compliant 2026-10-14

//! Error handling for Tasklist application services.

use serde::Serialize;
use tasklist_core::{Error as CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Task name was blank.
    EmptyName,
    /// Task name is already used by a live task.
    DuplicateName,
    /// Metric was not a finite number.
    InvalidMetric,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing task data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns true for errors caused by the caller's input.
    #[must_use]
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ErrorCode::EmptyName
                | ErrorCode::DuplicateName
                | ErrorCode::InvalidMetric
                | ErrorCode::InvalidInput
        )
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Validation(ValidationError::EmptyName) => ErrorCode::EmptyName,
                CoreError::Validation(ValidationError::DuplicateName(_)) => {
                    ErrorCode::DuplicateName
                }
                CoreError::Validation(ValidationError::InvalidMetric(_)) => {
                    ErrorCode::InvalidMetric
                }
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::Validation(ValidationError::DuplicateName(name))) => {
                Some(serde_json::json!({ "name": name }))
            }
            AppError::Core(CoreError::Validation(ValidationError::InvalidMetric(value))) => {
                Some(serde_json::json!({ "value": value }))
            }
            _ => None,
        }
    }
}
