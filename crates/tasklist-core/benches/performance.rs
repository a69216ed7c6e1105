// Rust guideline compliant 2026-10-12

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tasklist_core::sort::add_rule;
use tasklist_core::store::{apply_bulk_transition, create, set_all_checked};
use tasklist_core::{order, BulkTransition, RuleSet, Snapshot, SortKey, Storage, Task, TaskId};
use tempfile::TempDir;

fn build_tasks(count: usize) -> Snapshot {
    (0..count)
        .map(|i| Task {
            checked: i % 3 == 0,
            finished: i % 5 == 0,
            deleted: i % 7 == 0,
            metric: (i % 17) as f64,
            ..Task::new(TaskId::new(format!("tsk-{:08x}", i)), format!("Task {}", i))
        })
        .collect()
}

fn bench_order(c: &mut Criterion) {
    let tasks = build_tasks(10_000);
    let rules = [SortKey::Finished, SortKey::Metric, SortKey::Name]
        .into_iter()
        .fold(RuleSet::new(), |rules, key| add_rule(&rules, key));

    c.bench_function("order_10000_three_rules", |b| {
        b.iter(|| black_box(order(&tasks, &rules)))
    });
}

fn bench_bulk_transition(c: &mut Criterion) {
    let tasks = build_tasks(10_000);
    c.bench_function("bulk_finish_10000", |b| {
        b.iter(|| black_box(apply_bulk_transition(&tasks, BulkTransition::Finish)))
    });
    c.bench_function("select_all_10000", |b| {
        b.iter(|| black_box(set_all_checked(&tasks, true)))
    });
}

fn bench_create(c: &mut Criterion) {
    let tasks = build_tasks(1_000);
    c.bench_function("create_into_1000", |b| {
        b.iter(|| black_box(create(&tasks, "a brand new task")))
    });
}

fn bench_save(c: &mut Criterion) {
    let tasks = build_tasks(1_000);
    c.bench_function("save_1000", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().expect("Failed to create temp dir");
                let storage = Storage::new(temp_dir.path().join("todos.json"))
                    .expect("Failed to create storage");
                (temp_dir, storage)
            },
            |(_temp_dir, storage)| {
                storage.save(&tasks).expect("Failed to save");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_order,
    bench_bulk_transition,
    bench_create,
    bench_save
);
criterion_main!(benches);
