// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node picking under the cursor and box selection.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use sprig_branch::{BranchGraph, NodeRef};

use crate::projection::Projection;
use crate::world::WorldTransform;

#[derive(Clone, Copy, Debug)]
struct Candidate {
    at: NodeRef,
    depth: f64,
    active: bool,
}

impl Candidate {
    /// Whether `self` should replace `best`.
    ///
    /// Selected nodes win over unselected ones regardless of depth; within each
    /// class the closer node wins. This is deliberately independent of the order
    /// nodes are visited in, unlike a running "nearer and not less selected" scan.
    fn beats(&self, best: Option<&Self>) -> bool {
        let Some(best) = best else {
            return true;
        };
        match (self.active, best.active) {
            (true, false) => true,
            (false, true) => false,
            _ => self.depth < best.depth,
        }
    }
}

/// Returns the frontmost node under `cursor`.
///
/// Every node of every eligible tube is tested against its own depth plane: the
/// cursor is unprojected at the node's world location and the node is hit when the
/// resulting point lies within its world-scaled radius. `filter` restricts the
/// search to a single tube; pass the graph's active tube for the usual scoping.
///
/// Among hits, a selected node always beats an unselected one, and otherwise the
/// one with the smallest clip depth wins. Nodes whose projection is degenerate are
/// skipped.
pub fn pick_node<P>(
    graph: &BranchGraph,
    world: &WorldTransform,
    projection: &P,
    cursor: Point,
    filter: Option<usize>,
) -> Option<NodeRef>
where
    P: Projection + ?Sized,
{
    let scale = world.uniform_scale();
    let mut best: Option<Candidate> = None;

    for (tube_index, tube) in graph.tubes().iter().enumerate() {
        if filter.is_some_and(|only| only != tube_index) {
            continue;
        }
        for (node_index, node) in tube.nodes().iter().enumerate() {
            let center = world.to_world(node.location);
            let Some(under_cursor) = projection.unproject(cursor, center) else {
                continue;
            };
            if center.distance(under_cursor) > scale * node.radius {
                continue;
            }
            let Some(clip) = projection.project_to_clip(under_cursor) else {
                continue;
            };
            let candidate = Candidate {
                at: NodeRef::new(tube_index, node_index),
                depth: clip.z,
                active: node.active,
            };
            if candidate.beats(best.as_ref()) {
                best = Some(candidate);
            }
        }
    }
    best.map(|c| c.at)
}

/// Returns every eligible node whose center projects inside `rect`, in addressing order.
pub fn nodes_in_rect<P>(
    graph: &BranchGraph,
    world: &WorldTransform,
    projection: &P,
    rect: Rect,
    filter: Option<usize>,
) -> Vec<NodeRef>
where
    P: Projection + ?Sized,
{
    let rect = rect.abs();
    let mut hits = Vec::new();
    for (tube_index, tube) in graph.tubes().iter().enumerate() {
        if filter.is_some_and(|only| only != tube_index) {
            continue;
        }
        for (node_index, node) in tube.nodes().iter().enumerate() {
            let Some(p) = projection.project_to_view(world.to_world(node.location)) else {
                continue;
            };
            if rect.contains(p) {
                hits.push(NodeRef::new(tube_index, node_index));
            }
        }
    }
    hits
}
