// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use pedigree_record::{AttributeFormatter, DogId, DogRecord};
use pedigree_tree::transform;
use pedigree_view::PedigreeView;

/// Full binary ancestry chart, `generations` deep.
fn full_pedigree(generations: u32, next_id: &mut i64) -> DogRecord {
    let id = *next_id;
    *next_id += 1;
    let mut record = DogRecord {
        registered_name: Some(format!("Ancestor {id}")),
        coi: Some(0.0625),
        ..DogRecord::new(DogId(id))
    };
    if generations > 1 {
        record.dam = Some(Rc::new(full_pedigree(generations - 1, next_id)));
        record.sire = Some(Rc::new(full_pedigree(generations - 1, next_id)));
    }
    record
}

fn bench_transform_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree/transform");

    // Node count doubles per generation; transform visits each slot once, so
    // throughput should stay roughly flat per element.
    for generations in [4_u32, 6, 8, 10] {
        let mut next_id = 1;
        let root = full_pedigree(generations, &mut next_id);
        let nodes = (1_u64 << generations) - 1;
        group.throughput(Throughput::Elements(nodes));

        let fmt = AttributeFormatter::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &root,
            |b, root| {
                b.iter(|| {
                    let node = transform(Some(black_box(root)), &fmt);
                    black_box(node);
                });
            },
        );
    }

    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/rows");

    let mut next_id = 1;
    let root = full_pedigree(8, &mut next_id);
    let nodes = (1_u64 << 8) - 1;
    group.throughput(Throughput::Elements(nodes));

    let mut expanded = PedigreeView::new(AttributeFormatter::default());
    expanded.set_root(Some(&root));
    group.bench_function("expanded", |b| {
        b.iter(|| black_box(expanded.rows()));
    });

    // Matches the viewer's startup configuration: everything past the
    // fourth generation starts hidden.
    let mut trimmed = PedigreeView::new(AttributeFormatter::default());
    trimmed.set_initial_collapse_depth(Some(4));
    trimmed.set_root(Some(&root));
    group.bench_function("initial_depth_4", |b| {
        b.iter(|| black_box(trimmed.rows()));
    });

    group.finish();
}

criterion_group!(benches, bench_transform_depth, bench_rows);
criterion_main!(benches);
