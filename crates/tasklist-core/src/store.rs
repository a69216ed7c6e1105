// Rust guideline compliant 2026-10-12

//! Task store: snapshot-in, snapshot-out operations on the task collection.
//!
//! Every operation takes the current [`Snapshot`] by reference and returns a
//! new one. A rejected operation returns an error and the caller keeps the
//! snapshot it already holds, so nothing is ever partially applied. Operations
//! addressing a task by id silently do nothing when the id is absent.

use crate::error::ValidationError;
use crate::fsm::BulkTransition;
use crate::identity;
use crate::{Task, TaskId};
use rayon::prelude::*;
use std::ops::Deref;
use std::sync::Arc;

/// Collections at least this large are mapped in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Immutable point-in-time view of the full task collection.
///
/// Cloning is cheap; the tasks are shared and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    tasks: Arc<[Task]>,
}

impl Snapshot {
    /// Creates a snapshot holding `tasks` in the given order.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }

    /// Returns the tasks in canonical (newest-first) order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Copies the tasks out into an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Task> {
        self.tasks.to_vec()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Snapshot {
    type Target = [Task];

    fn deref(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for Snapshot {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

impl FromIterator<Task> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Creates a task named `raw_name` (trimmed) at the front of the collection.
///
/// # Errors
///
/// Returns an error if:
/// - The trimmed name is empty
/// - A non-deleted task already has the trimmed name
pub fn create(current: &Snapshot, raw_name: &str) -> Result<Snapshot, ValidationError> {
    create_at(current, raw_name, identity::now_nanos())
}

/// Same as [`create`] with an explicit creation time, for reproducible ids.
///
/// # Errors
///
/// See [`create`].
pub fn create_at(
    current: &Snapshot,
    raw_name: &str,
    timestamp_nanos: u128,
) -> Result<Snapshot, ValidationError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if current
        .iter()
        .any(|task| !task.deleted && task.name == name)
    {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }

    let id = identity::unique_id(name, timestamp_nanos, current);
    let mut tasks = Vec::with_capacity(current.len() + 1);
    tasks.push(Task::new(id, name.to_string()));
    tasks.extend(current.iter().cloned());
    Ok(Snapshot::new(tasks))
}

/// Sets `checked` on every task.
#[must_use]
pub fn set_all_checked(current: &Snapshot, checked: bool) -> Snapshot {
    map_tasks(current, |task| Task {
        checked,
        ..task.clone()
    })
}

/// Returns true when the collection is non-empty and every task is checked.
#[must_use]
pub fn all_checked(current: &Snapshot) -> bool {
    !current.is_empty() && current.iter().all(|task| task.checked)
}

/// Flips `checked` on the task with `id`.
#[must_use]
pub fn toggle_checked(current: &Snapshot, id: &TaskId) -> Snapshot {
    map_tasks(current, |task| {
        if task.id == *id {
            Task {
                checked: !task.checked,
                ..task.clone()
            }
        } else {
            task.clone()
        }
    })
}

/// Sets the metric of the task with `id`.
///
/// # Errors
///
/// Returns an error if `value` is NaN or infinite.
pub fn set_metric(current: &Snapshot, id: &TaskId, value: f64) -> Result<Snapshot, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidMetric(value.to_string()));
    }

    Ok(map_tasks(current, |task| {
        if task.id == *id {
            Task {
                metric: value,
                ..task.clone()
            }
        } else {
            task.clone()
        }
    }))
}

/// Parses raw metric input into a finite number.
///
/// # Errors
///
/// Returns an error if the input is blank, not a number, or not finite.
pub fn parse_metric(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidMetric(trimmed.to_string())),
    }
}

/// Applies `kind` to every checked task, consuming the selection.
#[must_use]
pub fn apply_bulk_transition(current: &Snapshot, kind: BulkTransition) -> Snapshot {
    map_tasks(current, |task| kind.apply(task))
}

fn map_tasks<F>(current: &Snapshot, f: F) -> Snapshot
where
    F: Fn(&Task) -> Task + Sync + Send,
{
    if current.len() >= PARALLEL_THRESHOLD {
        current.tasks().par_iter().map(f).collect::<Vec<_>>().into()
    } else {
        current.iter().map(f).collect()
    }
}
