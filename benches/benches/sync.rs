// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use sprig_benches::branching_sketch;
use sprig_branch::{NodeRef, PropagationScratch};
use sprig_sync::{MemoryGraph, Settings, sync};

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprig_sync");
    group.sample_size(30);
    let settings = Settings::default();

    for tubes in [10, 100, 500] {
        let graph = branching_sketch(tubes, 8, 0x5eed);

        group.bench_function(format!("from_scratch(tubes={tubes})"), |b| {
            b.iter_batched(
                MemoryGraph::new,
                |mut target| black_box(sync(&graph, &settings, true, &mut target)),
                BatchSize::SmallInput,
            );
        });

        let mut target = MemoryGraph::new();
        sync(&graph, &settings, true, &mut target);
        group.bench_function(format!("unchanged(tubes={tubes})"), |b| {
            b.iter(|| black_box(sync(&graph, &settings, true, &mut target)));
        });

        // One drag step on the trunk's busiest joint, then a resync.
        let mut edited = graph.clone();
        let mut scratch = PropagationScratch::new();
        let mut step = 0.0;
        group.bench_function(format!("drag_step(tubes={tubes})"), |b| {
            b.iter(|| {
                step += 0.001;
                let _ = edited.set_node_location(
                    NodeRef::new(0, 4),
                    DVec3::new(4.0, step, 0.0),
                    &mut scratch,
                );
                black_box(sync(&edited, &settings, true, &mut target))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sync);
criterion_main!(benches);
