// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Sprig benchmarks.

use glam::DVec3;
use sprig_branch::BranchGraph;

#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    pub fn below(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

/// A sketch of `tubes` tubes with `nodes` nodes each. Every tube after the first
/// branches off a random middle node of an earlier tube.
pub fn branching_sketch(tubes: usize, nodes: usize, seed: u64) -> BranchGraph {
    assert!(nodes >= 3, "branching needs a middle node");
    let mut rng = Lcg::new(seed);
    let mut graph = BranchGraph::new();
    let trunk = graph.add_tube();
    for i in 0..nodes {
        graph
            .insert_node(trunk, i, DVec3::new(i as f64, 0.0, 0.0), 0.5, false)
            .unwrap();
    }
    for t in 1..tubes {
        let parent = rng.below(t);
        let joint = 1 + rng.below(nodes - 2);
        let tip = graph
            .insert_node(parent, joint, DVec3::new(0.0, t as f64, 0.0), 0.4, true)
            .unwrap();
        for i in 2..nodes {
            graph
                .insert_node(tip.tube, i, DVec3::new(i as f64, t as f64, 0.0), 0.3, false)
                .unwrap();
        }
    }
    graph
}
