//! This bench test measures saving and reloading a data file holding a few
//! thousand records of each kind.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use forest_records::{DataFile, RecordStore};
use tempfile::TempDir;

fn preseed_store() -> RecordStore {
    let mut store = RecordStore::default();
    for i in 1..=5_000 {
        store.add_zone(format!("Z{i}"), format!("Zone {i}"), "Ranger");
        store.add_tree(format!("T{i}"), "Oak", i % 300);
        store.add_sighting("Deer", format!("Zone {i}"), "01-06-2024");
    }
    store
}

fn save(c: &mut Criterion) {
    let store = preseed_store();
    c.bench_function("save", |b| {
        b.iter_batched(
            || TempDir::new().unwrap(),
            |tmp_dir| {
                DataFile::new(tmp_dir.path().join("forest.dat"))
                    .save(&store)
                    .unwrap();
                tmp_dir
            },
            BatchSize::SmallInput,
        );
    });
}

fn load(c: &mut Criterion) {
    let tmp_dir = TempDir::new().unwrap();
    let data_file = DataFile::new(tmp_dir.path().join("forest.dat"));
    data_file.save(&preseed_store()).unwrap();

    c.bench_function("load", |b| b.iter(|| data_file.try_load().unwrap()));
}

criterion_group!(benches, save, load);
criterion_main!(benches);
