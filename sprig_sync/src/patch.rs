// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The patch-target interface implemented by procedural geometry backends.

use alloc::vec::Vec;

use glam::DVec3;
use kurbo::Point;

use crate::key::{Link, NodeKey, NodeKind};

/// A parameter value written to a generated node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Integer input.
    Int(i64),
    /// Scalar input.
    Float(f64),
    /// Boolean input.
    Bool(bool),
    /// Vector input.
    Vec3(DVec3),
    /// One flag per axis.
    Axes([bool; 3]),
}

/// Parameter names written by the synchronizer.
pub mod param {
    /// Sphere ring segment count.
    pub const SEGMENTS: &str = "Segments";
    /// Sphere ring count.
    pub const RINGS: &str = "Rings";
    /// Transform translation.
    pub const TRANSLATION: &str = "Translation";
    /// Transform scale.
    pub const SCALE: &str = "Scale";
    /// Subdivision levels.
    pub const LEVELS: &str = "Levels";
    /// Mirror axes.
    pub const AXIS: &str = "Axis";
    /// Mirror bisect axes.
    pub const BISECT: &str = "Bisect";
    /// Mirror merge toggle.
    pub const MERGE: &str = "Merge";
    /// Mirror merge distance.
    pub const MERGE_THRESHOLD: &str = "Merge Threshold";
}

/// A key-indexed node graph the synchronizer patches.
///
/// Backends map keys to their own nodes (typically by the key's display name).
/// The synchronizer only ever asks for what it needs: it checks before it
/// creates, links, or writes, so implementations may assume that `create` is
/// never called for an existing key.
pub trait GraphPatch {
    /// Returns `true` if a node exists for `key`.
    fn contains(&self, key: NodeKey) -> bool;

    /// Creates a node. `position` is its initial place in a visual node editor.
    fn create(&mut self, key: NodeKey, kind: NodeKind, position: Point);

    /// Removes a node and every link attached to it. Unknown keys are ignored.
    fn remove(&mut self, key: NodeKey);

    /// Returns the keys of all generated nodes currently present.
    ///
    /// Backends that also hold foreign nodes leave those out.
    fn keys(&self) -> Vec<NodeKey>;

    /// Returns `true` if `link` exists.
    fn is_linked(&self, link: &Link) -> bool;

    /// Adds a link.
    fn link(&mut self, link: Link);

    /// Removes a link. Missing links are ignored.
    fn unlink(&mut self, link: &Link);

    /// Returns the current value of a node parameter.
    fn param(&self, key: NodeKey, name: &str) -> Option<ParamValue>;

    /// Writes a node parameter.
    fn set_param(&mut self, key: NodeKey, name: &'static str, value: ParamValue);
}
