// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use sprig_benches::branching_sketch;
use sprig_branch::{NodeRef, PropagationScratch, propagate};

fn bench_propagate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprig_propagate");
    group.sample_size(50);

    for tubes in [10, 100, 500] {
        let mut graph = branching_sketch(tubes, 8, 0x5eed);
        let mut scratch = PropagationScratch::new();

        // The trunk's middle node is the busiest joint in the fixture.
        let joint = NodeRef::new(0, 4);
        group.bench_function(format!("joint(tubes={tubes})"), |b| {
            b.iter(|| black_box(propagate(&mut graph, black_box(joint), &mut scratch)));
        });

        let tip = NodeRef::new(tubes - 1, 7);
        group.bench_function(format!("tip(tubes={tubes})"), |b| {
            b.iter(|| black_box(propagate(&mut graph, black_box(tip), &mut scratch)));
        });

        // A drag step: write and propagate every node of one tube.
        let mut step = 0.0;
        group.bench_function(format!("drag_tube(tubes={tubes})"), |b| {
            b.iter(|| {
                step += 0.001;
                for node in 0..8 {
                    let at = NodeRef::new(0, node);
                    let location = DVec3::new(node as f64, step, 0.0);
                    let _ = black_box(graph.set_node_location(at, location, &mut scratch));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_propagate);
criterion_main!(benches);
