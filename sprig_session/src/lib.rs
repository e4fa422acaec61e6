// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Session: interactive editing of a tube sketch.
//!
//! A [`Session`] owns a [`Sketch`] (branch graph, representation settings, and
//! world placement) together with the node graph generated from it. Input
//! handlers translate pointer, wheel, and key events into edits:
//!
//! - insert nodes under the cursor, optionally starting a branch;
//! - click, ctrl-click, and box select;
//! - drag selected nodes on the pressed node's depth plane;
//! - resize selected nodes with the wheel;
//! - delete the selection, add and remove tubes.
//!
//! Each shape-changing command records a checkpoint through [`History`] before
//! it edits, propagates joint shapes, then synchronizes the node graph.
//! [`Session::apply_edit`] is the same boundary for edits without a dedicated
//! command. Continuous input (drags, wheel bursts) is coalesced into one
//! checkpoint per burst by a [`CheckpointThrottle`].
//!
//! ## Quick Start
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_3;
//! use core::time::Duration;
//! use glam::DVec3;
//! use kurbo::{Point, Rect};
//! use sprig_pick::ViewProjection;
//! use sprig_session::{Modifiers, NoHistory, Session, SessionConfig};
//! use sprig_sync::{MemoryGraph, NodeKey};
//!
//! let camera = ViewProjection::perspective(
//!     DVec3::new(0.0, 0.0, 5.0),
//!     DVec3::ZERO,
//!     DVec3::Y,
//!     FRAC_PI_3,
//!     0.1,
//!     100.0,
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! )
//! .unwrap();
//! let mut session = Session::new(MemoryGraph::new(), NoHistory, SessionConfig::default());
//!
//! // Alt-click twice: the first click starts a sketch, the second extends its tube.
//! session.pointer_down(&camera, Point::new(400.0, 300.0), Modifiers::ALT);
//! session.pointer_down(&camera, Point::new(500.0, 300.0), Modifiers::ALT);
//!
//! let graph = session.graph().unwrap();
//! assert_eq!(graph.tubes()[0].len(), 2);
//! assert!(session.target().node(NodeKey::Hull(0, 1)).is_some());
//!
//! // Dragging the second node moves it.
//! session.pointer_down(&camera, Point::new(500.0, 300.0), Modifiers::empty());
//! session.pointer_move(&camera, Point::new(500.0, 250.0), Modifiers::empty(), Duration::ZERO);
//! session.pointer_up(Modifiers::empty());
//! assert!(session.graph().unwrap().tubes()[0].nodes()[1].location.y > 0.0);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Timestamps are passed in as
//! [`Duration`](core::time::Duration)s, so no clock is needed.
//!
//! ## Features
//!
//! - `std` (default) and `libm` are forwarded to the Sprig crates, Glam, and Kurbo.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod gesture;
mod history;
mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use gesture::{Modifiers, Wheel};
pub use history::{CheckpointThrottle, History, NoHistory};
pub use session::{InsertPreview, Session, Sketch};
