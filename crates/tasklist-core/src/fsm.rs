// Rust guideline compliant 2026-10-12

//! Bulk transition state machine.
//!
//! A bulk transition acts on every checked task at once and always consumes
//! the selection:
//!
//! - Finish → `finished = true`
//! - UndoFinish → `finished = false`
//! - Delete → `deleted = true`
//! - UndoDelete → `deleted = false`
//!
//! Unchecked tasks are left untouched. These are the only ways `finished`
//! and `deleted` change.

use crate::{Error, Result, Task};
use serde::{Deserialize, Serialize};

/// A state change applied to all checked tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BulkTransition {
    /// Mark checked tasks finished.
    Finish,
    /// Mark checked tasks not finished.
    UndoFinish,
    /// Soft-delete checked tasks.
    Delete,
    /// Restore soft-deleted checked tasks.
    UndoDelete,
}

impl BulkTransition {
    /// Every transition kind.
    pub const ALL: [BulkTransition; 4] = [
        BulkTransition::Finish,
        BulkTransition::UndoFinish,
        BulkTransition::Delete,
        BulkTransition::UndoDelete,
    ];

    /// Parses an action name.
    ///
    /// Accepts `undoFinish`, `undo_finish` and `undo-finish` alike.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not a known transition.
    pub fn parse(value: &str) -> Result<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "finish" => Ok(BulkTransition::Finish),
            "undofinish" => Ok(BulkTransition::UndoFinish),
            "delete" => Ok(BulkTransition::Delete),
            "undodelete" => Ok(BulkTransition::UndoDelete),
            _ => Err(Error::InvalidInput(format!(
                "Unknown bulk action: {}",
                value
            ))),
        }
    }

    /// Applies the transition to a single task.
    ///
    /// Returns the task unchanged when it is not checked.
    #[must_use]
    pub fn apply(self, task: &Task) -> Task {
        if !task.checked {
            return task.clone();
        }

        let mut next = task.clone();
        match self {
            BulkTransition::Finish => next.finished = true,
            BulkTransition::UndoFinish => next.finished = false,
            BulkTransition::Delete => next.deleted = true,
            BulkTransition::UndoDelete => next.deleted = false,
        }
        next.checked = false;
        next
    }
}
