// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for branch graph edits and validation.

use core::fmt;

/// Error returned when a structural edit is refused.
///
/// Edits validate their arguments before touching the graph, so an `Err` always
/// means the graph is unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The tube index is out of range.
    InvalidTube {
        /// The requested tube index.
        tube: usize,
        /// The number of tubes in the graph.
        len: usize,
    },
    /// The node index is out of range for its tube.
    InvalidNode {
        /// The tube index.
        tube: usize,
        /// The requested node index.
        node: usize,
        /// The number of nodes in the tube.
        len: usize,
    },
    /// Linking `child` under `parent` would make `child` its own ancestor.
    WouldCycle {
        /// The tube being linked.
        child: usize,
        /// The tube it would hang from.
        parent: usize,
    },
    /// A node location has a NaN or infinite component.
    NonFiniteLocation,
}

impl EditError {
    /// Returns `true` for out-of-range tube or node indices.
    #[must_use]
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidTube { .. } | Self::InvalidNode { .. })
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTube { tube, len } => {
                write!(f, "tube index {tube} is out of range for {len} tubes")
            }
            Self::InvalidNode { tube, node, len } => write!(
                f,
                "node index {node} is out of range for tube {tube} with {len} nodes"
            ),
            Self::WouldCycle { child, parent } => write!(
                f,
                "linking tube {child} under tube {parent} would create a cycle"
            ),
            Self::NonFiniteLocation => f.write_str("node location is not finite"),
        }
    }
}

impl core::error::Error for EditError {}

/// A violation of the branch graph invariants found by
/// [`BranchGraph::validate`](crate::BranchGraph::validate).
///
/// The graph's own operations never produce these. They indicate data that was
/// assembled or deserialized by a caller without going through those operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphInconsistency {
    /// The tube's parent link points at a missing tube or node.
    ParentOutOfRange {
        /// The tube holding the bad link.
        tube: usize,
    },
    /// The tube has a parent link but no nodes to sit on the joint.
    OrphanedBranch {
        /// The empty, linked tube.
        tube: usize,
    },
    /// Following parent links from the tube leads back to it.
    Cycle {
        /// A tube on the cycle.
        tube: usize,
    },
}

impl fmt::Display for GraphInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentOutOfRange { tube } => {
                write!(f, "tube {tube} has a parent link out of range")
            }
            Self::OrphanedBranch { tube } => {
                write!(f, "tube {tube} has a parent link but no nodes")
            }
            Self::Cycle { tube } => write!(f, "tube {tube} is its own ancestor"),
        }
    }
}

impl core::error::Error for GraphInconsistency {}
