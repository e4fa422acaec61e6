// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Branch: the data model behind tube sketching.
//!
//! A sketch is a collection of [`Tube`]s. Each tube is an ordered chain of
//! [`Node`]s (a location plus a radius). A tube may branch off another tube: its
//! parent link names a node on the parent, and the branch's node 0 sits on the
//! same joint. Both sides keep their own copy of the joint's shape.
//!
//! - [`BranchGraph`] owns the tubes and the active tube filter, and implements
//!   the structural edits (add and remove tubes, insert and remove nodes, link and
//!   unlink) so that parent links always follow the indices they refer to.
//! - [`propagate`] copies a node's shape to every node on its joint, using a
//!   reusable [`PropagationScratch`] so continuous edits do not allocate.
//! - [`SkinMesh`] and [`Skeleton`] flatten the graph for skin-modifier and
//!   armature export.
//!
//! ## Quick Start
//!
//! ```rust
//! use glam::DVec3;
//! use sprig_branch::{BranchGraph, NodeRef, PropagationScratch};
//!
//! let mut graph = BranchGraph::new();
//! let trunk = graph.add_tube();
//! graph.insert_node(trunk, 0, DVec3::ZERO, 1.0, false).unwrap();
//! graph.insert_node(trunk, 1, DVec3::Z, 0.8, false).unwrap();
//! graph.insert_node(trunk, 2, DVec3::Z * 2.0, 0.6, false).unwrap();
//!
//! // Branch off the middle node.
//! let tip = graph.insert_node(trunk, 1, DVec3::new(1.0, 0.0, 1.0), 0.4, true).unwrap();
//!
//! // Moving the joint moves the branch's first node with it.
//! let mut scratch = PropagationScratch::new();
//! graph
//!     .set_node_location(NodeRef::new(trunk, 1), DVec3::new(0.0, 0.5, 1.0), &mut scratch)
//!     .unwrap();
//! assert_eq!(
//!     graph.node(NodeRef::new(tip.tube, 0)).unwrap().location,
//!     DVec3::new(0.0, 0.5, 1.0),
//! );
//! assert!(graph.validate().is_ok());
//! ```
//!
//! ## Addressing
//!
//! Nodes are addressed by position ([`NodeRef`]). Structural edits shift indices
//! and rewrite parent links to match, but any `NodeRef` held outside the graph
//! must be re-resolved after such an edit.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or
//! the `libm` feature so Glam has float math available.
//!
//! ## Features
//!
//! - `std` (default): forwards to `glam/std`.
//! - `libm`: forwards to `glam/libm` for `no_std` targets.
//! - `serde`: derives `Serialize`/`Deserialize` for the model types.

#![no_std]

extern crate alloc;

mod error;
mod graph;
mod propagate;
mod skeleton;
mod skin;
mod tube;

pub use error::{EditError, GraphInconsistency};
pub use graph::{BranchGraph, DEFAULT_TUBE_NAME};
pub use propagate::{PropagationScratch, propagate};
pub use skeleton::{Bone, Skeleton};
pub use skin::SkinMesh;
pub use tube::{Node, NodeRef, Tube};
