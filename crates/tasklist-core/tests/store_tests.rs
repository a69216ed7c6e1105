// Rust guideline compliant 2026-10-12

//! Unit tests for the task store.
//!
//! These tests validate specific examples, edge cases, and error conditions
//! for snapshot operations.

use tasklist_core::store::{
    all_checked, apply_bulk_transition, create, create_at, parse_metric, set_all_checked,
    set_metric, toggle_checked,
};
use tasklist_core::{BulkTransition, Snapshot, Task, TaskId, ValidationError};

/// Helper to create a test Task.
fn task(id: &str, name: &str) -> Task {
    Task::new(TaskId::from(id), name.to_string())
}

fn sample() -> Snapshot {
    Snapshot::new(vec![task("t-1", "write docs"), task("t-2", "ship")])
}

#[test]
fn test_create_prepends_trimmed_task() {
    let current = sample();
    let next = create(&current, "  review  ").expect("create should succeed");

    assert_eq!(next.len(), 3);
    assert_eq!(next[0].name, "review");
    assert!(!next[0].checked);
    assert!(!next[0].finished);
    assert!(!next[0].deleted);
    assert_eq!(next[0].metric, 0.0);
    assert_eq!(&next[1..], current.tasks(), "Existing tasks keep their order");
}

#[test]
fn test_create_on_empty_snapshot() {
    let next = create(&Snapshot::default(), "first").expect("create should succeed");
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].name, "first");
}

#[test]
fn test_create_rejects_blank_names() {
    let current = sample();
    for raw in ["", "   ", "\t\n"] {
        assert_eq!(
            create(&current, raw),
            Err(ValidationError::EmptyName),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn test_create_rejects_duplicate_after_trim() {
    let current = sample();
    assert_eq!(
        create(&current, " ship "),
        Err(ValidationError::DuplicateName("ship".to_string()))
    );
}

#[test]
fn test_create_duplicate_is_case_sensitive() {
    let current = sample();
    let next = create(&current, "Ship").expect("different case is a different name");
    assert_eq!(next[0].name, "Ship");
}

#[test]
fn test_create_allows_name_of_deleted_task() {
    let mut tasks = sample().to_vec();
    tasks[1].deleted = true;
    let current = Snapshot::new(tasks);

    let next = create(&current, "ship").expect("deleted names can be reused");
    assert_eq!(next.len(), 3);
    assert_ne!(next[0].id, current[1].id, "Ids are never reused");
}

#[test]
fn test_create_at_assigns_distinct_ids_for_same_inputs() {
    let first = create_at(&Snapshot::default(), "alpha", 42).unwrap();
    let mut tasks = first.to_vec();
    tasks[0].deleted = true;
    let second = create_at(&Snapshot::new(tasks), "alpha", 42).unwrap();

    assert_ne!(second[0].id, second[1].id);
}

#[test]
fn test_set_all_checked() {
    let checked = set_all_checked(&sample(), true);
    assert!(checked.iter().all(|t| t.checked));
    assert!(all_checked(&checked));

    let cleared = set_all_checked(&checked, false);
    assert!(cleared.iter().all(|t| !t.checked));
    assert_eq!(cleared, sample());
}

#[test]
fn test_all_checked_is_false_for_empty() {
    assert!(!all_checked(&Snapshot::default()));
}

#[test]
fn test_toggle_checked_flips_only_target() {
    let current = sample();
    let next = toggle_checked(&current, &TaskId::from("t-2"));
    assert!(!next[0].checked);
    assert!(next[1].checked);
    assert!(!all_checked(&next));
}

#[test]
fn test_toggle_checked_absent_id_is_noop() {
    let current = sample();
    let next = toggle_checked(&current, &TaskId::from("missing"));
    assert_eq!(next, current);
}

#[test]
fn test_set_metric_updates_target() {
    let current = sample();
    let next = set_metric(&current, &TaskId::from("t-1"), -3.5).unwrap();
    assert_eq!(next[0].metric, -3.5);
    assert_eq!(next[1], current[1]);
}

#[test]
fn test_set_metric_absent_id_is_noop() {
    let current = sample();
    let next = set_metric(&current, &TaskId::from("missing"), 7.0).unwrap();
    assert_eq!(next, current);
}

#[test]
fn test_set_metric_rejects_non_finite() {
    let current = sample();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            set_metric(&current, &TaskId::from("t-1"), value),
            Err(ValidationError::InvalidMetric(_))
        ));
    }
}

#[test]
fn test_parse_metric() {
    assert_eq!(parse_metric("12"), Ok(12.0));
    assert_eq!(parse_metric(" -0.25 "), Ok(-0.25));
    assert!(matches!(parse_metric(""), Err(ValidationError::InvalidMetric(_))));
    assert!(matches!(parse_metric("abc"), Err(ValidationError::InvalidMetric(_))));
    assert!(matches!(parse_metric("NaN"), Err(ValidationError::InvalidMetric(_))));
    assert!(matches!(parse_metric("inf"), Err(ValidationError::InvalidMetric(_))));
}

#[test]
fn test_bulk_finish_then_undo() {
    let current = toggle_checked(&sample(), &TaskId::from("t-1"));
    let finished = apply_bulk_transition(&current, BulkTransition::Finish);

    assert!(finished[0].finished);
    assert!(!finished[0].checked, "Selection is consumed");
    assert_eq!(finished[1], current[1], "Unchecked task untouched");

    let reselected = toggle_checked(&finished, &TaskId::from("t-1"));
    let undone = apply_bulk_transition(&reselected, BulkTransition::UndoFinish);
    assert!(!undone[0].finished);
    assert!(!undone[0].checked);
}

#[test]
fn test_bulk_delete_is_soft() {
    let current = set_all_checked(&sample(), true);
    let deleted = apply_bulk_transition(&current, BulkTransition::Delete);

    assert_eq!(deleted.len(), 2, "Deleted tasks stay in the collection");
    assert!(deleted.iter().all(|t| t.deleted && !t.checked));

    let restored = apply_bulk_transition(
        &set_all_checked(&deleted, true),
        BulkTransition::UndoDelete,
    );
    assert!(restored.iter().all(|t| !t.deleted && !t.checked));
}

#[test]
fn test_bulk_transition_without_selection_is_noop() {
    let current = sample();
    for kind in BulkTransition::ALL {
        assert_eq!(apply_bulk_transition(&current, kind), current);
    }
}

#[test]
fn test_large_snapshot_keeps_order() {
    let tasks: Vec<Task> = (0..2_500)
        .map(|i| task(&format!("t-{}", i), &format!("task {}", i)))
        .collect();
    let current = Snapshot::new(tasks);

    let next = set_all_checked(&current, true);
    assert_eq!(next.len(), current.len());
    for (before, after) in current.iter().zip(next.iter()) {
        assert_eq!(before.id, after.id);
        assert!(after.checked);
    }
}

#[test]
fn test_snapshot_get() {
    let current = sample();
    assert_eq!(current.get(&TaskId::from("t-2")).map(|t| t.name.as_str()), Some("ship"));
    assert!(current.get(&TaskId::from("nope")).is_none());
}
