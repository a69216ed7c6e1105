// Rust guideline compliant 2026-10-16

//! HTTP transport for Tasklist.
//!
//! Exposes the board over a small JSON API: read the collection (optionally
//! sorted), replace the collection, and a health probe.

pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod server;

pub use error::ServerError;
pub use http::{build_router, AppState};
pub use logging::{init_tracing, parse_log_level};
pub use server::{run, serve, ServerOptions};
