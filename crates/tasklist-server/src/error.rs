// Rust guideline compliant 2026-10-16

//! Errors raised while starting or running the HTTP server.

use tasklist_app::AppError;
use thiserror::Error;

/// Server runtime errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO errors while binding, logging or serving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Data directory, config or storage could not be prepared.
    #[error("Startup failed: {0}")]
    Startup(#[from] AppError),
}

impl From<tasklist_core::Error> for ServerError {
    fn from(err: tasklist_core::Error) -> Self {
        Self::Startup(AppError::from(err))
    }
}
