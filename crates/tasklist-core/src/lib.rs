// Rust guideline compliant 2026-10-12

//! Tasklist Core Library
//!
//! This crate provides the foundational components for the Tasklist task manager:
//! - Data models (Task, SortKey, SortRule)
//! - Task store (immutable snapshots, create/check/metric/bulk operations)
//! - Bulk transition state machine (finish, delete and their undos)
//! - Sort engine (multi-key, stable, lexicographic)
//! - Hash ID generation
//! - JSON persistence and configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod sort;
pub mod storage;
pub mod store;

pub use config::{Config, LogFormat};
pub use error::{Error, Result, ValidationError};
pub use fsm::BulkTransition;
pub use models::{SortDirection, SortKey, SortRule, Task, TaskId};
pub use sort::{order, RuleSet};
pub use storage::Storage;
pub use store::Snapshot;
