// Rust guideline compliant 2026-10-12

//! Unit tests for the bulk transition state machine.

use tasklist_core::{BulkTransition, Task, TaskId};

fn checked_task() -> Task {
    Task {
        checked: true,
        ..Task::new(TaskId::from("t-1"), "task".to_string())
    }
}

#[test]
fn test_finish_sets_finished_and_clears_checked() {
    let next = BulkTransition::Finish.apply(&checked_task());
    assert!(next.finished);
    assert!(!next.checked);
    assert!(!next.deleted, "Finish never touches deleted");
}

#[test]
fn test_undo_finish() {
    let task = Task {
        finished: true,
        ..checked_task()
    };
    let next = BulkTransition::UndoFinish.apply(&task);
    assert!(!next.finished);
    assert!(!next.checked);
}

#[test]
fn test_delete_and_undo_delete() {
    let deleted = BulkTransition::Delete.apply(&checked_task());
    assert!(deleted.deleted);
    assert!(!deleted.checked);

    let reselected = Task {
        checked: true,
        ..deleted
    };
    let restored = BulkTransition::UndoDelete.apply(&reselected);
    assert!(!restored.deleted);
    assert!(!restored.checked);
}

#[test]
fn test_unchecked_task_is_untouched() {
    let task = Task::new(TaskId::from("t-2"), "idle".to_string());
    for kind in BulkTransition::ALL {
        assert_eq!(kind.apply(&task), task, "{:?} must ignore unchecked tasks", kind);
    }
}

#[test]
fn test_transition_keeps_identity_and_metric() {
    let task = Task {
        metric: 9.5,
        ..checked_task()
    };
    let next = BulkTransition::Delete.apply(&task);
    assert_eq!(next.id, task.id);
    assert_eq!(next.name, task.name);
    assert_eq!(next.metric, 9.5);
}

#[test]
fn test_parse_action_names() {
    assert_eq!(BulkTransition::parse("finish").unwrap(), BulkTransition::Finish);
    assert_eq!(
        BulkTransition::parse("undoFinish").unwrap(),
        BulkTransition::UndoFinish
    );
    assert_eq!(
        BulkTransition::parse("undo_finish").unwrap(),
        BulkTransition::UndoFinish
    );
    assert_eq!(BulkTransition::parse("Delete").unwrap(), BulkTransition::Delete);
    assert_eq!(
        BulkTransition::parse("undo-delete").unwrap(),
        BulkTransition::UndoDelete
    );
    assert!(BulkTransition::parse("archive").is_err());
}

#[test]
fn test_serde_uses_action_names() {
    let json = serde_json::to_string(&BulkTransition::UndoDelete).unwrap();
    assert_eq!(json, "\"undoDelete\"");
    let parsed: BulkTransition = serde_json::from_str("\"undoFinish\"").unwrap();
    assert_eq!(parsed, BulkTransition::UndoFinish);
}
