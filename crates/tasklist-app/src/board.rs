// Rust guideline compliant 2026-10-14

//! Single-writer owner of the current task snapshot and sort rules.
//!
//! The store operations are pure and not meant to be interleaved on one
//! snapshot, so every command runs under one mutex: compute the next
//! snapshot, persist it, then swap it in. A rejected command or a failed
//! save leaves the held snapshot untouched.

use crate::error::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tasklist_core::sort::{self, RuleSet};
use tasklist_core::store;
use tasklist_core::{BulkTransition, Snapshot, SortKey, Storage, Task, TaskId, ValidationError};

#[derive(Debug, Default)]
struct BoardState {
    tasks: Snapshot,
    rules: RuleSet,
}

/// Serialised access to the task list, its sort rules and its storage.
#[derive(Debug)]
pub struct Board {
    storage: Storage,
    state: Mutex<BoardState>,
}

impl Board {
    /// Opens the board, loading whatever the storage holds.
    ///
    /// A missing or unreadable task file yields an empty board.
    pub fn open(storage: Storage) -> Self {
        let tasks = Snapshot::new(storage.load());
        tracing::info!(path = %storage.path().display(), count = tasks.len(), "board opened");
        Self {
            storage,
            state: Mutex::new(BoardState {
                tasks,
                rules: RuleSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        // Snapshots are swapped whole, so a poisoned guard still holds a consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current snapshot in canonical order.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().tasks.clone()
    }

    /// Returns the current sort rules.
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.lock().rules.clone()
    }

    /// Returns the tasks in display order under the board's rules.
    #[must_use]
    pub fn view(&self) -> Vec<Task> {
        let (tasks, rules) = {
            let state = self.lock();
            (state.tasks.clone(), state.rules.clone())
        };
        sort::order(&tasks, &rules)
    }

    /// Returns the tasks in display order under `rules`.
    #[must_use]
    pub fn view_with(&self, rules: &RuleSet) -> Vec<Task> {
        sort::order(&self.snapshot(), rules)
    }

    /// Returns true when every task is checked (and there is at least one).
    #[must_use]
    pub fn all_checked(&self) -> bool {
        store::all_checked(&self.lock().tasks)
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already used by a live
    /// task, or if the new collection cannot be saved.
    pub fn submit(&self, raw_name: &str) -> Result<Snapshot> {
        self.commit("submit", |tasks| store::create(tasks, raw_name))
    }

    /// Checks or unchecks every task.
    ///
    /// # Errors
    ///
    /// Returns an error if the new collection cannot be saved.
    pub fn set_all_checked(&self, checked: bool) -> Result<Snapshot> {
        self.commit("set_all_checked", |tasks| {
            Ok(store::set_all_checked(tasks, checked))
        })
    }

    /// Flips the checked flag of one task.
    ///
    /// # Errors
    ///
    /// Returns an error if the new collection cannot be saved.
    pub fn toggle_checked(&self, id: &TaskId) -> Result<Snapshot> {
        self.commit("toggle_checked", |tasks| Ok(store::toggle_checked(tasks, id)))
    }

    /// Sets the metric of one task.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or the save fails.
    pub fn set_metric(&self, id: &TaskId, value: f64) -> Result<Snapshot> {
        self.commit("set_metric", |tasks| store::set_metric(tasks, id, value))
    }

    /// Sets the metric of one task from raw text input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a finite number or the save fails.
    pub fn set_metric_input(&self, id: &TaskId, raw: &str) -> Result<Snapshot> {
        let value = store::parse_metric(raw)?;
        self.set_metric(id, value)
    }

    /// Applies a bulk transition to the checked tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the new collection cannot be saved.
    pub fn apply(&self, kind: BulkTransition) -> Result<Snapshot> {
        self.commit("apply", |tasks| Ok(store::apply_bulk_transition(tasks, kind)))
    }

    /// Replaces the whole collection, as the write endpoint does.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn replace_all(&self, tasks: Vec<Task>) -> Result<Snapshot> {
        let next = Snapshot::new(tasks);
        self.commit("replace_all", move |_| Ok(next))
    }

    /// Adds an ascending rule for `key` unless present.
    pub fn add_sort(&self, key: SortKey) -> RuleSet {
        self.update_rules(|rules| sort::add_rule(rules, key))
    }

    /// Removes the rule for `key`.
    pub fn remove_sort(&self, key: SortKey) -> RuleSet {
        self.update_rules(|rules| sort::remove_rule(rules, key))
    }

    /// Flips the direction of the rule for `key`.
    pub fn toggle_sort(&self, key: SortKey) -> RuleSet {
        self.update_rules(|rules| sort::toggle_direction(rules, key))
    }

    /// Keys that can still be added to the rules.
    #[must_use]
    pub fn available_sort_keys(&self) -> Vec<SortKey> {
        sort::available_keys(&self.lock().rules)
    }

    fn update_rules<F>(&self, f: F) -> RuleSet
    where
        F: FnOnce(&RuleSet) -> RuleSet,
    {
        let mut state = self.lock();
        state.rules = f(&state.rules);
        tracing::debug!(rules = %state.rules, "sort rules updated");
        state.rules.clone()
    }

    fn commit<F>(&self, command: &str, f: F) -> Result<Snapshot>
    where
        F: FnOnce(&Snapshot) -> std::result::Result<Snapshot, ValidationError>,
    {
        let mut state = self.lock();
        let next = f(&state.tasks).map_err(|err| {
            tracing::debug!(command, error = %err, "command rejected");
            err
        })?;

        if let Err(err) = self.storage.with_lock(|| self.storage.save(&next)) {
            tracing::warn!(command, error = %err, "failed to persist tasks");
            return Err(err.into());
        }

        tracing::debug!(command, count = next.len(), "command applied");
        state.tasks = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_board(temp_dir: &TempDir) -> Board {
        let storage = Storage::new(temp_dir.path().join("todos.json")).unwrap();
        Board::open(storage)
    }

    #[test]
    fn test_open_empty() {
        let temp_dir = TempDir::new().unwrap();
        let board = open_board(&temp_dir);
        assert!(board.snapshot().is_empty());
        assert!(board.rules().is_empty());
        assert!(!board.all_checked());
    }

    #[test]
    fn test_rules_are_independent_of_tasks() {
        let temp_dir = TempDir::new().unwrap();
        let board = open_board(&temp_dir);
        board.submit("a").unwrap();

        board.add_sort(SortKey::Metric);
        board.add_sort(SortKey::Metric);
        board.toggle_sort(SortKey::Metric);
        assert_eq!(board.rules().to_string(), "metric:desc");
        assert_eq!(
            board.available_sort_keys(),
            vec![SortKey::Name, SortKey::Finished, SortKey::Deleted]
        );

        board.remove_sort(SortKey::Metric);
        assert!(board.rules().is_empty());
        assert_eq!(board.snapshot().len(), 1);
    }
}
