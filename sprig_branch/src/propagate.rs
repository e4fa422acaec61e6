// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joint propagation: copy one node's shape to every node that shares its joint.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::EditError;
use crate::graph::BranchGraph;
use crate::tube::NodeRef;

/// Reusable scratch storage for joint propagation.
///
/// Propagation is a depth-first flood over joints. It needs a stack and a visited
/// set; this type owns both so that a continuous edit (a drag, a burst of wheel
/// steps) does not allocate on every input event. The buffers keep their capacity
/// and are cleared at the start of every run, so the visited marks never outlive
/// a single call.
#[derive(Debug, Default)]
pub struct PropagationScratch {
    stack: Vec<NodeRef>,
    visited: HashSet<NodeRef>,
}

impl PropagationScratch {
    /// Creates an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            visited: HashSet::new(),
        }
    }

    /// Creates an empty scratch buffer with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Returns the nodes visited by the most recent run.
    pub fn visited(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.visited.iter().copied()
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.visited.clear();
    }
}

/// Copies the location and radius of `edited` to every node sharing its joint.
///
/// Starting from `edited`, the flood steps
/// - from node 0 of a linked tube to the parent node it hangs from, and
/// - from any node to node 0 of every non-empty tube linked to it.
///
/// Each node is written at most once. A visited set guards against diamonds and
/// against cycles in malformed data, so the call always terminates; it does not
/// repair such data.
///
/// Returns the number of nodes in the joint, including `edited` itself.
///
/// # Errors
///
/// Returns [`EditError::InvalidTube`] or [`EditError::InvalidNode`] if `edited`
/// does not address a node. The graph is unchanged in that case.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use sprig_branch::{BranchGraph, NodeRef, PropagationScratch, propagate};
///
/// let mut graph = BranchGraph::new();
/// let trunk = graph.add_tube();
/// for x in 0..3 {
///     graph.insert_node(trunk, x, DVec3::new(x as f64, 0.0, 0.0), 1.0, false).unwrap();
/// }
/// // Branch off the middle node; the new tube starts on that joint.
/// let tip = graph.insert_node(trunk, 1, DVec3::Y, 0.5, true).unwrap();
///
/// let mut scratch = PropagationScratch::new();
/// graph.node_mut(NodeRef::new(trunk, 1)).unwrap().radius = 2.0;
/// let joint = propagate(&mut graph, NodeRef::new(trunk, 1), &mut scratch).unwrap();
///
/// assert_eq!(joint, 2);
/// assert_eq!(graph.node(NodeRef::new(tip.tube, 0)).unwrap().radius, 2.0);
/// ```
pub fn propagate(
    graph: &mut BranchGraph,
    edited: NodeRef,
    scratch: &mut PropagationScratch,
) -> Result<usize, EditError> {
    let source = *graph.checked_node(edited)?;
    scratch.reset();
    scratch.stack.push(edited);

    let mut written = 0;
    while let Some(at) = scratch.stack.pop() {
        if !scratch.visited.insert(at) {
            continue;
        }
        let Some(node) = graph.node_mut(at) else {
            // A dangling link in unvalidated data; nothing to write.
            continue;
        };
        node.copy_shape_from(&source);
        written += 1;

        if at.node == 0 {
            if let Some(parent) = graph.tubes()[at.tube].parent() {
                scratch.stack.push(parent);
            }
        }
        let children = graph
            .children_of(at)
            .filter(|&tube| !graph.tubes()[tube].is_empty())
            .map(|tube| NodeRef::new(tube, 0));
        scratch.stack.extend(children);
    }
    log::trace!("propagated {edited:?} across {written} nodes");
    Ok(written)
}
