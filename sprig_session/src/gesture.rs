// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input: modifier keys, wheel direction, and press-to-release tracking.

use alloc::vec::Vec;

use glam::DVec3;
use kurbo::{Point, Rect};
use sprig_branch::{BranchGraph, NodeRef};

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Toggle selection; keep the selection while box selecting.
        const CTRL = 0b0000_0001;
        /// Insert mode.
        const ALT = 0b0000_0010;
        /// Branch mode while inserting.
        const SHIFT = 0b0000_0100;
    }
}

/// Direction of one mouse wheel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wheel {
    /// Away from the user: grow.
    Up,
    /// Towards the user: shrink.
    Down,
}

/// Location and selection of a node when a gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeSnapshot {
    pub(crate) location: DVec3,
    pub(crate) active: bool,
}

/// Per-tube node snapshots taken at press time.
pub(crate) type GraphSnapshot = Vec<Vec<NodeSnapshot>>;

pub(crate) fn snapshot(graph: &BranchGraph) -> GraphSnapshot {
    graph
        .tubes()
        .iter()
        .map(|tube| {
            tube.nodes()
                .iter()
                .map(|node| NodeSnapshot {
                    location: node.location,
                    active: node.active,
                })
                .collect()
        })
        .collect()
}

/// What a press turns into once the pointer moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum GestureKind {
    /// Pressed on empty space.
    BoxSelect,
    /// Pressed on a node. `grab` is the world point under the cursor on the
    /// node's depth plane, `None` if it could not be unprojected.
    Drag {
        depth: DVec3,
        grab: Option<DVec3>,
    },
}

/// A pointer gesture from press to release.
#[derive(Clone, Debug)]
pub(crate) struct Gesture {
    /// Where the pointer was pressed.
    pub(crate) start: Point,
    /// Latest pointer position.
    pub(crate) last: Point,
    pub(crate) pressed: Option<NodeRef>,
    pub(crate) moved: bool,
    pub(crate) kind: GestureKind,
    pub(crate) snapshot: GraphSnapshot,
}

impl Gesture {
    pub(crate) fn new(
        cursor: Point,
        pressed: Option<NodeRef>,
        kind: GestureKind,
        snapshot: GraphSnapshot,
    ) -> Self {
        Self {
            start: cursor,
            last: cursor,
            pressed,
            moved: false,
            kind,
            snapshot,
        }
    }

    /// The selection box from press to the latest position.
    pub(crate) fn selection_box(&self) -> Option<Rect> {
        if self.kind != GestureKind::BoxSelect {
            return None;
        }
        Some(Rect::from_points(self.start, self.last))
    }

    /// Returns the snapshot of tube `tube` if it still matches the graph's shape.
    pub(crate) fn tube_snapshot(&self, graph: &BranchGraph, tube: usize) -> Option<&[NodeSnapshot]> {
        if self.snapshot.len() != graph.len() {
            return None;
        }
        let nodes = self.snapshot.get(tube)?;
        (graph.tube(tube)?.len() == nodes.len()).then_some(nodes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_follows_the_pointer() {
        let mut gesture = Gesture::new(
            Point::new(50.0, 40.0),
            None,
            GestureKind::BoxSelect,
            Vec::new(),
        );
        assert_eq!(
            gesture.selection_box(),
            Some(Rect::new(50.0, 40.0, 50.0, 40.0))
        );
        gesture.last = Point::new(10.0, 90.0);
        assert_eq!(
            gesture.selection_box(),
            Some(Rect::new(10.0, 40.0, 50.0, 90.0))
        );
    }

    #[test]
    fn drags_have_no_selection_box() {
        let mut gesture = Gesture::new(
            Point::new(50.0, 40.0),
            Some(NodeRef::new(0, 1)),
            GestureKind::Drag {
                depth: DVec3::ZERO,
                grab: None,
            },
            Vec::new(),
        );
        gesture.last = Point::new(60.0, 40.0);
        assert_eq!(gesture.selection_box(), None);
    }
}
