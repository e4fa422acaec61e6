// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the branch graph: nodes, tubes, and node references.

use alloc::string::String;
use alloc::vec::Vec;

use glam::DVec3;

/// Positional address of a node: the tube index plus the node index within that tube.
///
/// `NodeRef` is a plain pair of indices, not a stable handle. Structural edits
/// (removing a tube, inserting or removing a node) shift indices, so callers must
/// re-resolve any `NodeRef` they hold after such an edit.
///
/// `NodeRef` is also used as a tube's parent link: the parent tube and the node on
/// that tube that the child's first node shares a joint with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRef {
    /// Index of the tube in the graph.
    pub tube: usize,
    /// Index of the node within the tube.
    pub node: usize,
}

impl NodeRef {
    /// Creates a reference to node `node` of tube `tube`.
    #[must_use]
    pub const fn new(tube: usize, node: usize) -> Self {
        Self { tube, node }
    }
}

/// A point along a tube: a location and a radius, plus a selection flag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Location in the sketch object's local space. Graph edits keep it finite.
    pub location: DVec3,
    /// Sphere radius in local units. Never negative.
    pub radius: f64,
    /// Whether the node is selected.
    pub active: bool,
}

impl Node {
    /// Creates an unselected node.
    ///
    /// Negative (and NaN) radii are clamped to zero.
    #[must_use]
    pub fn new(location: DVec3, radius: f64) -> Self {
        Self {
            location,
            radius: clamp_radius(radius),
            active: false,
        }
    }

    /// Copies `location` and `radius` from `source`, leaving the selection flag alone.
    pub fn copy_shape_from(&mut self, source: &Self) {
        self.location = source.location;
        self.radius = source.radius;
    }

    /// Returns `true` if `other` has the same location and radius.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.location == other.location && self.radius == other.radius
    }
}

pub(crate) fn clamp_radius(radius: f64) -> f64 {
    if radius > 0.0 { radius } else { 0.0 }
}

/// An ordered chain of nodes with an optional parent link.
///
/// When `parent` is set, node 0 of this tube sits on the same joint as the
/// referenced parent node. Both sides keep their own copy of location and radius;
/// [`propagate`](crate::propagate) keeps them equal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tube {
    /// Display name.
    pub name: String,
    pub(crate) nodes: Vec<Node>,
    pub(crate) parent: Option<NodeRef>,
}

impl Tube {
    /// Creates an empty root tube.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            parent: None,
        }
    }

    /// Returns the nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node at `index`, if any.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tube has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the parent link, or `None` for a root tube.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent
    }

    /// Returns `true` if the tube branches off another tube.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the index of the first selected node.
    #[must_use]
    pub fn first_active(&self) -> Option<usize> {
        self.nodes.iter().position(|n| n.active)
    }

    /// Returns `true` if any node is selected.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.nodes.iter().any(|n| n.active)
    }
}
