// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`GraphPatch`] that keeps the graph and an event log.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use kurbo::Point;

use crate::key::{Link, NodeKey, NodeKind};
use crate::patch::{GraphPatch, ParamValue};

/// A change applied to a [`MemoryGraph`].
#[derive(Clone, Debug, PartialEq)]
pub enum PatchEvent {
    /// A node was created.
    Created(NodeKey, NodeKind),
    /// A node (and its links) was removed.
    Removed(NodeKey),
    /// A link was added.
    Linked(Link),
    /// A link was removed.
    Unlinked(Link),
    /// A parameter was written.
    Param(NodeKey, &'static str, ParamValue),
}

/// A node held by a [`MemoryGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryNode {
    /// Node kind given at creation.
    pub kind: NodeKind,
    /// Position in the node editor.
    pub position: Point,
    params: BTreeMap<&'static str, ParamValue>,
}

impl MemoryNode {
    /// Returns a parameter value.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<ParamValue> {
        self.params.get(name).copied()
    }
}

/// A node graph kept in memory, recording every change as a [`PatchEvent`].
///
/// It stands in for a real procedural geometry backend in tests and tooling,
/// and doubles as a reference for what a backend has to do.
#[derive(Clone, Debug, Default)]
pub struct MemoryGraph {
    nodes: BTreeMap<NodeKey, MemoryNode>,
    links: BTreeSet<Link>,
    events: Vec<PatchEvent>,
}

impl MemoryGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `key`.
    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&MemoryNode> {
        self.nodes.get(&key)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates all links in key order.
    pub fn links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.links.iter()
    }

    /// Returns the links that end at `key`.
    #[must_use]
    pub fn inputs(&self, key: NodeKey) -> Vec<Link> {
        self.links.iter().filter(|l| l.to == key).copied().collect()
    }

    /// Moves a node in the editor, as a user rearranging the graph would.
    pub fn move_node(&mut self, key: NodeKey, position: Point) {
        if let Some(node) = self.nodes.get_mut(&key) {
            node.position = position;
        }
    }

    /// Returns the events recorded since the last [`take_events`](Self::take_events).
    #[must_use]
    pub fn events(&self) -> &[PatchEvent] {
        &self.events
    }

    /// Returns and clears the recorded events.
    pub fn take_events(&mut self) -> Vec<PatchEvent> {
        core::mem::take(&mut self.events)
    }
}

impl GraphPatch for MemoryGraph {
    fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    fn create(&mut self, key: NodeKey, kind: NodeKind, position: Point) {
        self.nodes.insert(
            key,
            MemoryNode {
                kind,
                position,
                params: BTreeMap::new(),
            },
        );
        self.events.push(PatchEvent::Created(key, kind));
    }

    fn remove(&mut self, key: NodeKey) {
        if self.nodes.remove(&key).is_some() {
            self.links.retain(|link| !link.touches(key));
            self.events.push(PatchEvent::Removed(key));
        }
    }

    fn keys(&self) -> Vec<NodeKey> {
        self.nodes.keys().copied().collect()
    }

    fn is_linked(&self, link: &Link) -> bool {
        self.links.contains(link)
    }

    fn link(&mut self, link: Link) {
        if self.links.insert(link) {
            self.events.push(PatchEvent::Linked(link));
        }
    }

    fn unlink(&mut self, link: &Link) {
        if self.links.remove(link) {
            self.events.push(PatchEvent::Unlinked(*link));
        }
    }

    fn param(&self, key: NodeKey, name: &str) -> Option<ParamValue> {
        self.nodes.get(&key)?.param(name)
    }

    fn set_param(&mut self, key: NodeKey, name: &'static str, value: ParamValue) {
        if let Some(node) = self.nodes.get_mut(&key) {
            node.params.insert(name, value);
            self.events.push(PatchEvent::Param(key, name, value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_a_node_drops_its_links() {
        let mut graph = MemoryGraph::new();
        graph.create(NodeKey::Join, NodeKind::JoinGeometry, Point::ZERO);
        graph.create(NodeKey::Output, NodeKind::GroupOutput, Point::ZERO);
        graph.create(NodeKey::Tube(0), NodeKind::JoinGeometry, Point::ZERO);
        graph.link(Link::geometry(NodeKey::Join, NodeKey::Output));
        graph.link(Link::geometry(NodeKey::Tube(0), NodeKey::Join));

        graph.remove(NodeKey::Join);

        assert_eq!(graph.links().count(), 0);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.events().last(), Some(&PatchEvent::Removed(NodeKey::Join)));
    }

    #[test]
    fn duplicate_links_and_missing_unlinks_are_quiet() {
        let mut graph = MemoryGraph::new();
        let link = Link::geometry(NodeKey::Join, NodeKey::Output);
        graph.link(link);
        graph.take_events();

        graph.link(link);
        graph.unlink(&Link::geometry(NodeKey::Output, NodeKey::Join));
        assert!(graph.events().is_empty());

        graph.unlink(&link);
        assert_eq!(graph.take_events(), [PatchEvent::Unlinked(link)]);
        assert!(!graph.is_linked(&link));
    }

    #[test]
    fn params_need_a_node() {
        let mut graph = MemoryGraph::new();
        graph.set_param(NodeKey::Sphere, "Segments", ParamValue::Int(32));
        assert!(graph.events().is_empty());

        graph.create(NodeKey::Sphere, NodeKind::UvSphere, Point::new(-400.0, 0.0));
        graph.set_param(NodeKey::Sphere, "Segments", ParamValue::Int(32));
        assert_eq!(graph.param(NodeKey::Sphere, "Segments"), Some(ParamValue::Int(32)));
    }
}
