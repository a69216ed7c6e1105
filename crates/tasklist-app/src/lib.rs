// Rust guideline compliant 2026-10-14

//! Shared application services for Tasklist.
//!
//! This crate composes the core task store, sort engine and storage behind a
//! single-writer [`Board`], resolves the data directory, and defines the
//! stable error codes and response envelopes used by the transport.

pub mod board;
pub mod error;
pub mod response;
pub mod workspace;

pub use board::Board;
pub use error::{AppError, ErrorCode, Result};
pub use response::{Ack, ErrorEnvelope};
pub use workspace::DataContext;
