// Rust guideline compliant 2026-10-14

//! Response envelopes for transport outputs.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    /// Always true.
    pub ok: bool,
}

impl Ack {
    /// Creates a positive acknowledgement.
    #[must_use]
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Standard error envelope for transport responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always false.
    pub ok: bool,
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            ok: false,
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
