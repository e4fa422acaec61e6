// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Sync: keeps a procedural geometry node graph in step with a branch graph.
//!
//! A sketch is rendered by a node graph: a shared sphere generator, one
//! transform per node, a pairwise join and convex hull per segment, a join per
//! tube, and a global join feeding the output. Rebuilding that graph on every
//! input event would be slow and would throw away the user's arrangement of it,
//! so [`sync`] patches it instead.
//!
//! - [`NodeKey`] names every generated node deterministically from tube and
//!   node indices, so existence is a key lookup.
//! - [`GraphPatch`] is the backend interface: lookup, create, remove, link,
//!   unlink, and parameter access by key.
//! - [`MemoryGraph`] implements it in memory and records a [`PatchEvent`] log.
//! - [`Settings`] selects the [`Method`] and carries the segment count,
//!   subdivision levels, symmetry axis, and mirror settings.
//!
//! ```rust
//! use glam::DVec3;
//! use sprig_branch::BranchGraph;
//! use sprig_sync::{MemoryGraph, NodeKey, Settings, sync};
//!
//! let mut graph = BranchGraph::new();
//! let t = graph.add_tube();
//! graph.insert_node(t, 0, DVec3::ZERO, 1.0, false).unwrap();
//! graph.insert_node(t, 1, DVec3::X, 0.5, false).unwrap();
//!
//! let mut target = MemoryGraph::new();
//! let settings = Settings::default();
//! let first = sync(&graph, &settings, true, &mut target);
//! assert!(target.node(NodeKey::Hull(0, 1)).is_some());
//! assert!(first.created > 0);
//!
//! // Nothing changed, so nothing is patched.
//! assert!(sync(&graph, &settings, true, &mut target).is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default) and `libm` are forwarded to Glam and Kurbo.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Settings`] and its parts.

#![no_std]

extern crate alloc;

mod key;
mod memory;
mod patch;
mod settings;
mod sync;

pub use key::{Link, NodeKey, NodeKind, ParseKeyError, Socket};
pub use memory::{MemoryGraph, MemoryNode, PatchEvent};
pub use patch::{GraphPatch, ParamValue, param};
pub use settings::{Axis, Method, MirrorSettings, SEGMENTS_RANGE, SUBDIVISION_RANGE, Settings};
pub use sync::{SyncReport, sync};
