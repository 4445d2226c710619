//! This bench test simulates adding many employees to a roster one at a time,
//! each add rewriting the whole file.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use roster::{Directory, Employee, HireDate, JsonStore, StoreOptions};
use tempfile::TempDir;

fn add_many(c: &mut Criterion) {
    let hired = HireDate::from_ymd(2024, 1, 1).unwrap();

    c.bench_function("add 200 employees", |b| {
        b.iter_batched(
            || {
                let tmp_dir = TempDir::new().unwrap();
                let store =
                    JsonStore::open(StoreOptions::isolated(tmp_dir.path().join("roster.json")))
                        .unwrap();
                (tmp_dir, Directory::new(store))
            },
            |(_tmp_dir, directory)| {
                for id in 1..=200 {
                    directory
                        .add_employee(
                            Employee::new(id, format!("Employee Number{id}"), hired)
                                .with_direct_reports(vec![id + 1, id + 2]),
                        )
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many);
criterion_main!(benches);
