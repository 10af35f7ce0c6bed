// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matassign::{AssignmentRecord, MemoryScene, RecordStore, Report, SceneObject};
use std::io::Cursor;

fn sample_store(count: usize) -> RecordStore {
    let mut store = RecordStore::new();
    for i in 0..count {
        store.push(AssignmentRecord::new(
            format!("Mesh.{:04}", i),
            (0..4).map(|slot| format!("Material.{}", (i + slot) % 32)),
            vec![format!("NodeGroup.{}", i % 8)],
        ));
    }
    store
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for count in [100, 10_000] {
        let store = sample_store(count);
        let mut text = Vec::new();
        store.export_to_writer(&mut text).unwrap();

        group.bench_with_input(BenchmarkId::new("export", count), &store, |b, store| {
            b.iter(|| {
                let mut out = Vec::with_capacity(text.len());
                store.export_to_writer(black_box(&mut out)).unwrap();
                out
            });
        });

        group.bench_with_input(BenchmarkId::new("import", count), &text, |b, text| {
            b.iter(|| {
                let mut store = RecordStore::new();
                let mut reports: Vec<Report> = Vec::new();
                store
                    .import_from_reader(Cursor::new(black_box(text)), &mut reports)
                    .unwrap();
                store
            });
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let store = sample_store(1_000);
    let mut scene = MemoryScene::new();
    for i in 0..1_000 {
        scene.add_object(SceneObject::mesh(format!("Mesh.{:04}", i)).with_material("Default"));
    }
    for i in 0..32 {
        scene.add_material(format!("Material.{}", i));
    }

    c.bench_function("apply_1000", |b| {
        b.iter(|| {
            let mut scene = scene.clone();
            let mut reports: Vec<Report> = Vec::new();
            store.apply_to_scene(black_box(&mut scene), &mut reports)
        });
    });
}

criterion_group!(benches, bench_text, bench_apply);
criterion_main!(benches);
