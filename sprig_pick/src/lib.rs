// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Pick: finding branch graph nodes from viewport input.
//!
//! - [`Projection`] is the camera collaborator: unproject a cursor onto a depth
//!   plane, project to clip space for depth ordering, project to viewport pixels.
//!   [`ViewProjection`] implements it for a view-projection matrix and a viewport.
//! - [`WorldTransform`] places a sketch object in the world and supplies the
//!   uniform scale applied to node radii.
//! - [`pick_node`] returns the frontmost node under the cursor, with selected
//!   nodes taking priority over unselected ones.
//! - [`nodes_in_rect`] returns the nodes whose centers fall inside a viewport
//!   rectangle, for box selection.
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_3;
//! use glam::DVec3;
//! use kurbo::{Point, Rect};
//! use sprig_branch::{BranchGraph, NodeRef};
//! use sprig_pick::{ViewProjection, WorldTransform, pick_node};
//!
//! let mut graph = BranchGraph::new();
//! let t = graph.add_tube();
//! graph.insert_node(t, 0, DVec3::ZERO, 1.0, false).unwrap();
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let camera = ViewProjection::perspective(
//!     DVec3::new(0.0, 0.0, 5.0),
//!     DVec3::ZERO,
//!     DVec3::Y,
//!     FRAC_PI_3,
//!     0.1,
//!     100.0,
//!     viewport,
//! )
//! .unwrap();
//!
//! let hit = pick_node(&graph, &WorldTransform::IDENTITY, &camera, viewport.center(), None);
//! assert_eq!(hit, Some(NodeRef::new(t, 0)));
//! assert_eq!(
//!     pick_node(&graph, &WorldTransform::IDENTITY, &camera, Point::new(5.0, 5.0), None),
//!     None,
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default) and `libm` are forwarded to Glam and Kurbo.

#![no_std]

extern crate alloc;

mod pick;
mod projection;
mod world;

pub use pick::{nodes_in_rect, pick_node};
pub use projection::{Projection, ViewProjection};
pub use world::WorldTransform;
