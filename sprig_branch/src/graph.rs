// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The branch graph: an ordered collection of tubes plus the active tube filter.

use alloc::vec::Vec;

use glam::DVec3;

use crate::error::{EditError, GraphInconsistency};
use crate::propagate::{PropagationScratch, propagate};
use crate::tube::{Node, NodeRef, Tube, clamp_radius};

/// Default display name for new tubes.
pub const DEFAULT_TUBE_NAME: &str = "Tube";

/// Tubes addressed by position, with parent links between them.
///
/// Tube order is the addressing order: parent links and every other lookup use
/// indices into this collection. Removing a tube shifts the indices of the tubes
/// after it, and the graph rewrites parent links and the active tube to follow.
///
/// ## Invariants
///
/// The operations on this type preserve the following; [`validate`](Self::validate)
/// checks them for data that was assembled some other way.
///
/// - A parent link addresses an existing node of an existing tube.
/// - No tube is its own ancestor.
/// - A tube with a parent link has at least one node.
///
/// Joint equality (a linked tube's node 0 matching its parent node) is restored by
/// the shape-editing methods, which run [`propagate`] after writing.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use sprig_branch::{BranchGraph, NodeRef};
///
/// let mut graph = BranchGraph::new();
/// let t = graph.add_tube();
/// graph.insert_node(t, 0, DVec3::ZERO, 1.0, false).unwrap();
/// graph.insert_node(t, 1, DVec3::X, 1.0, false).unwrap();
/// graph.insert_node(t, 2, DVec3::X * 2.0, 1.0, false).unwrap();
///
/// // Branching from an interior node creates a new tube on that joint.
/// let tip = graph.insert_node(t, 1, DVec3::new(1.0, 1.0, 0.0), 0.5, true).unwrap();
/// assert_eq!(tip, NodeRef::new(1, 1));
/// assert_eq!(graph.tubes()[1].parent(), Some(NodeRef::new(t, 1)));
///
/// // Removing the trunk unlinks the branch.
/// graph.remove_tube(t).unwrap();
/// assert_eq!(graph.tubes()[0].parent(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchGraph {
    tubes: Vec<Tube>,
    active_tube: Option<usize>,
}

impl BranchGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tubes: Vec::new(),
            active_tube: None,
        }
    }

    /// Creates a graph from existing tubes, with no active tube.
    ///
    /// The tubes are taken as-is; use [`validate`](Self::validate) if they come
    /// from an untrusted source.
    #[must_use]
    pub fn from_tubes(tubes: Vec<Tube>) -> Self {
        Self {
            tubes,
            active_tube: None,
        }
    }

    /// Returns the tubes in addressing order.
    #[must_use]
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Returns the tube at `tube`, if any.
    #[must_use]
    pub fn tube(&self, tube: usize) -> Option<&Tube> {
        self.tubes.get(tube)
    }

    /// Returns the number of tubes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    /// Returns `true` if there are no tubes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    /// Returns the total number of nodes across all tubes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    /// Returns the node at `at`, if any.
    #[must_use]
    pub fn node(&self, at: NodeRef) -> Option<&Node> {
        self.tubes.get(at.tube)?.nodes.get(at.node)
    }

    /// Returns the node at `at` for direct editing.
    ///
    /// Writes through this reference do not propagate. Call [`propagate`] afterwards
    /// for shape changes, or use [`set_node_shape`](Self::set_node_shape).
    pub fn node_mut(&mut self, at: NodeRef) -> Option<&mut Node> {
        self.tubes.get_mut(at.tube)?.nodes.get_mut(at.node)
    }

    pub(crate) fn checked_tube(&self, tube: usize) -> Result<&Tube, EditError> {
        self.tubes.get(tube).ok_or(EditError::InvalidTube {
            tube,
            len: self.tubes.len(),
        })
    }

    pub(crate) fn checked_node(&self, at: NodeRef) -> Result<&Node, EditError> {
        let tube = self.checked_tube(at.tube)?;
        tube.nodes.get(at.node).ok_or(EditError::InvalidNode {
            tube: at.tube,
            node: at.node,
            len: tube.nodes.len(),
        })
    }

    /// Returns the active tube, which scopes editing and picking when set.
    #[must_use]
    pub fn active_tube(&self) -> Option<usize> {
        self.active_tube
    }

    /// Sets or clears the active tube.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] if `tube` is out of range.
    pub fn set_active_tube(&mut self, tube: Option<usize>) -> Result<(), EditError> {
        if let Some(tube) = tube {
            self.checked_tube(tube)?;
        }
        self.active_tube = tube;
        Ok(())
    }

    /// Clears the active tube, so every tube is in scope.
    pub fn clear_active_tube(&mut self) {
        self.active_tube = None;
    }

    /// Returns `true` if `tube` is in scope for the active tube filter.
    #[must_use]
    pub fn in_scope(&self, tube: usize) -> bool {
        self.active_tube.is_none_or(|active| active == tube)
    }

    /// Iterates the tubes in scope: only the active tube when one is set, otherwise all.
    pub fn scoped_tubes(&self) -> impl Iterator<Item = (usize, &Tube)> + '_ {
        self.tubes
            .iter()
            .enumerate()
            .filter(|(index, _)| self.in_scope(*index))
    }

    /// Iterates the tubes linked to the node at `at`.
    pub fn children_of(&self, at: NodeRef) -> impl Iterator<Item = usize> + '_ {
        self.tubes
            .iter()
            .enumerate()
            .filter(move |(_, tube)| tube.parent == Some(at))
            .map(|(index, _)| index)
    }

    /// Appends an empty root tube named [`DEFAULT_TUBE_NAME`] and returns its index.
    pub fn add_tube(&mut self) -> usize {
        self.tubes.push(Tube::new(DEFAULT_TUBE_NAME));
        self.tubes.len() - 1
    }

    /// Removes a tube and returns it.
    ///
    /// Tubes linked to the removed tube become roots. Links to tubes after it are
    /// shifted down by one to follow the new positions. If the removed tube was
    /// active, the tube now at its position (or the new last tube) becomes active.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] if `tube` is out of range.
    pub fn remove_tube(&mut self, tube: usize) -> Result<Tube, EditError> {
        self.checked_tube(tube)?;
        let removed = self.tubes.remove(tube);

        for other in &mut self.tubes {
            if let Some(link) = other.parent {
                if link.tube == tube {
                    other.parent = None;
                } else if link.tube > tube {
                    other.parent = Some(NodeRef::new(link.tube - 1, link.node));
                }
            }
        }

        self.active_tube = match self.active_tube {
            Some(active) if active == tube => {
                if self.tubes.is_empty() {
                    None
                } else {
                    Some(tube.min(self.tubes.len() - 1))
                }
            }
            Some(active) if active > tube => Some(active - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Inserts a node and returns where it landed.
    ///
    /// With `make_branch` set and `at` naming an existing node that is not the
    /// tube's last, a new tube is appended and linked to that node. The new tube is
    /// seeded with a copy of the joint node, and the new node is placed after the
    /// seed, so the result is `NodeRef::new(new_tube, 1)`.
    ///
    /// Otherwise the node is inserted at index `at` of `tube` (`at == len` appends).
    /// Nodes from `at` onwards shift up by one, as do the links of tubes hanging
    /// from them. A node inserted at index 0 of a linked tube becomes that tube's
    /// joint node and takes the parent node's shape.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] if `tube` is out of range,
    /// [`EditError::InvalidNode`] if `at` is past the end of the tube, or
    /// [`EditError::NonFiniteLocation`] if `location` has a NaN or infinite component.
    pub fn insert_node(
        &mut self,
        tube: usize,
        at: usize,
        location: DVec3,
        radius: f64,
        make_branch: bool,
    ) -> Result<NodeRef, EditError> {
        let len = self.checked_tube(tube)?.nodes.len();
        if at > len {
            return Err(EditError::InvalidNode {
                tube,
                node: at,
                len,
            });
        }
        check_location(location)?;
        let mut node = Node::new(location, radius);

        if make_branch && at + 1 < len {
            let joint = NodeRef::new(tube, at);
            let mut seed = self.tubes[tube].nodes[at];
            seed.active = false;
            let mut branch = Tube::new(DEFAULT_TUBE_NAME);
            branch.nodes.push(seed);
            branch.nodes.push(node);
            branch.parent = Some(joint);
            self.tubes.push(branch);
            return Ok(NodeRef::new(self.tubes.len() - 1, 1));
        }

        for other in &mut self.tubes {
            if let Some(link) = other.parent {
                if link.tube == tube && link.node >= at {
                    other.parent = Some(NodeRef::new(tube, link.node + 1));
                }
            }
        }
        if at == 0 {
            if let Some(parent) = self.tubes[tube].parent {
                if let Some(joint) = self.node(parent) {
                    node.copy_shape_from(joint);
                }
            }
        }
        self.tubes[tube].nodes.insert(at, node);
        Ok(NodeRef::new(tube, at))
    }

    /// Removes a node and returns it.
    ///
    /// Removing node 0 unlinks the tube from its parent. Tubes linked to the removed
    /// node become roots, and links to later nodes of the same tube shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] or [`EditError::InvalidNode`] if `at` does
    /// not address a node.
    pub fn remove_node(&mut self, at: NodeRef) -> Result<Node, EditError> {
        self.checked_node(at)?;
        let removed = self.tubes[at.tube].nodes.remove(at.node);
        if at.node == 0 {
            self.tubes[at.tube].parent = None;
        }

        for other in &mut self.tubes {
            if let Some(link) = other.parent {
                if link == at {
                    other.parent = None;
                } else if link.tube == at.tube && link.node > at.node {
                    other.parent = Some(NodeRef::new(link.tube, link.node - 1));
                }
            }
        }
        Ok(removed)
    }

    /// Links `tube` to a parent node, or unlinks it with `None`.
    ///
    /// Linking snaps the tube's node 0 (and everything on its joint) to the parent
    /// node's shape.
    ///
    /// # Errors
    ///
    /// - [`EditError::InvalidTube`] / [`EditError::InvalidNode`] if `tube` or `parent`
    ///   is out of range, or if `tube` has no node 0 to place on the joint.
    /// - [`EditError::WouldCycle`] if `tube` is `parent.tube` or one of its ancestors.
    pub fn set_parent(&mut self, tube: usize, parent: Option<NodeRef>) -> Result<(), EditError> {
        self.checked_tube(tube)?;
        let Some(parent) = parent else {
            self.tubes[tube].parent = None;
            return Ok(());
        };
        self.checked_node(parent)?;
        self.checked_node(NodeRef::new(tube, 0))?;

        let mut current = Some(parent.tube);
        let mut steps = 0;
        while let Some(ancestor) = current {
            if ancestor == tube {
                return Err(EditError::WouldCycle {
                    child: tube,
                    parent: parent.tube,
                });
            }
            steps += 1;
            if steps > self.tubes.len() {
                break;
            }
            current = self.tubes[ancestor].parent.map(|link| link.tube);
        }

        self.tubes[tube].parent = Some(parent);
        let mut scratch = PropagationScratch::new();
        propagate(self, parent, &mut scratch)?;
        Ok(())
    }

    /// Sets a node's location and radius, then propagates them across its joint.
    ///
    /// Returns the number of nodes written.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] or [`EditError::InvalidNode`] if `at` does
    /// not address a node, or [`EditError::NonFiniteLocation`] if `location` has a
    /// NaN or infinite component.
    pub fn set_node_shape(
        &mut self,
        at: NodeRef,
        location: DVec3,
        radius: f64,
        scratch: &mut PropagationScratch,
    ) -> Result<usize, EditError> {
        self.checked_node(at)?;
        check_location(location)?;
        let node = &mut self.tubes[at.tube].nodes[at.node];
        node.location = location;
        node.radius = clamp_radius(radius);
        propagate(self, at, scratch)
    }

    /// Sets a node's location, keeping its radius, and propagates.
    ///
    /// # Errors
    ///
    /// See [`set_node_shape`](Self::set_node_shape).
    pub fn set_node_location(
        &mut self,
        at: NodeRef,
        location: DVec3,
        scratch: &mut PropagationScratch,
    ) -> Result<usize, EditError> {
        let radius = self.checked_node(at)?.radius;
        self.set_node_shape(at, location, radius, scratch)
    }

    /// Sets a node's radius, keeping its location, and propagates.
    ///
    /// # Errors
    ///
    /// See [`set_node_shape`](Self::set_node_shape).
    pub fn set_node_radius(
        &mut self,
        at: NodeRef,
        radius: f64,
        scratch: &mut PropagationScratch,
    ) -> Result<usize, EditError> {
        let location = self.checked_node(at)?.location;
        self.set_node_shape(at, location, radius, scratch)
    }

    /// Selects or deselects a node.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidTube`] or [`EditError::InvalidNode`] if `at` does
    /// not address a node.
    pub fn set_node_active(&mut self, at: NodeRef, active: bool) -> Result<(), EditError> {
        self.checked_node(at)?;
        self.tubes[at.tube].nodes[at.node].active = active;
        Ok(())
    }

    /// Deselects every node in every tube.
    pub fn clear_all_active(&mut self) {
        for node in self.tubes.iter_mut().flat_map(|t| t.nodes.iter_mut()) {
            node.active = false;
        }
    }

    /// Deselects every node in the tubes in scope. Returns `true` if anything was selected.
    pub fn clear_scoped_active(&mut self) -> bool {
        let scope = self.active_tube;
        let mut had_selection = false;
        for (index, tube) in self.tubes.iter_mut().enumerate() {
            if scope.is_some_and(|active| active != index) {
                continue;
            }
            for node in &mut tube.nodes {
                had_selection |= node.active;
                node.active = false;
            }
        }
        had_selection
    }

    /// Iterates the selected nodes in the tubes in scope, in addressing order.
    pub fn scoped_selection(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.scoped_tubes().flat_map(|(tube, t)| {
            t.nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.active)
                .map(move |(node, _)| NodeRef::new(tube, node))
        })
    }

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphInconsistency`] found, scanning tubes in order.
    pub fn validate(&self) -> Result<(), GraphInconsistency> {
        let len = self.tubes.len();
        for (index, tube) in self.tubes.iter().enumerate() {
            let Some(link) = tube.parent else {
                continue;
            };
            if self.node(link).is_none() {
                return Err(GraphInconsistency::ParentOutOfRange { tube: index });
            }
            if tube.nodes.is_empty() {
                return Err(GraphInconsistency::OrphanedBranch { tube: index });
            }

            let mut current = link.tube;
            for _ in 0..len {
                if current == index {
                    return Err(GraphInconsistency::Cycle { tube: index });
                }
                match self.tubes[current].parent {
                    Some(up) if up.tube < len => current = up.tube,
                    _ => break,
                }
            }
        }
        Ok(())
    }
}

fn check_location(location: DVec3) -> Result<(), EditError> {
    if location.is_finite() {
        Ok(())
    } else {
        Err(EditError::NonFiniteLocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn graph_with_chain(len: usize) -> BranchGraph {
        let mut graph = BranchGraph::new();
        let tube = graph.add_tube();
        for i in 0..len {
            graph
                .insert_node(tube, i, DVec3::new(i as f64, 0.0, 0.0), 1.0, false)
                .unwrap();
        }
        graph
    }

    fn linked(parent: NodeRef, len: usize) -> Tube {
        let mut tube = Tube::new("Branch");
        for _ in 0..len {
            tube.nodes.push(Node::new(DVec3::ZERO, 1.0));
        }
        tube.parent = Some(parent);
        tube
    }

    #[test]
    fn add_tube_returns_index() {
        let mut graph = BranchGraph::new();
        assert_eq!(graph.add_tube(), 0);
        assert_eq!(graph.add_tube(), 1);
        assert_eq!(graph.tubes()[1].name, DEFAULT_TUBE_NAME);
        assert!(graph.tubes()[1].is_empty());
    }

    #[test]
    fn remove_tube_cascades_links() {
        let mut t0 = Tube::new("T0");
        t0.nodes.push(Node::new(DVec3::ZERO, 1.0));
        let mut t1 = Tube::new("T1");
        t1.nodes.push(Node::new(DVec3::X, 1.0));
        let mut graph = BranchGraph::from_tubes(vec![
            t0,
            t1,
            linked(NodeRef::new(1, 0), 1),
            linked(NodeRef::new(2, 0), 1),
        ]);

        graph.remove_tube(1).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.tubes()[1].name, "Branch");
        assert_eq!(graph.tubes()[1].parent(), None);
        assert_eq!(graph.tubes()[2].parent(), Some(NodeRef::new(1, 0)));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn remove_tube_moves_active_tube() {
        let mut graph = BranchGraph::new();
        for _ in 0..3 {
            graph.add_tube();
        }
        graph.set_active_tube(Some(2)).unwrap();
        graph.remove_tube(2).unwrap();
        assert_eq!(graph.active_tube(), Some(1));

        graph.set_active_tube(Some(1)).unwrap();
        graph.remove_tube(0).unwrap();
        assert_eq!(graph.active_tube(), Some(0));

        graph.remove_tube(0).unwrap();
        assert_eq!(graph.active_tube(), None);
    }

    #[test]
    fn remove_tube_out_of_range_is_refused() {
        let mut graph = graph_with_chain(2);
        let before = graph.clone();
        assert_eq!(
            graph.remove_tube(3),
            Err(EditError::InvalidTube { tube: 3, len: 1 })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn insert_shifts_child_links_at_and_after_index() {
        let mut graph = graph_with_chain(4);
        graph.tubes.push(linked(NodeRef::new(0, 1), 1));
        graph.tubes.push(linked(NodeRef::new(0, 2), 1));
        graph.tubes.push(linked(NodeRef::new(0, 0), 1));

        let at = graph
            .insert_node(0, 1, DVec3::new(0.5, 0.0, 0.0), 1.0, false)
            .unwrap();

        assert_eq!(at, NodeRef::new(0, 1));
        assert_eq!(graph.tubes()[0].len(), 5);
        assert_eq!(graph.tubes()[1].parent(), Some(NodeRef::new(0, 2)));
        assert_eq!(graph.tubes()[2].parent(), Some(NodeRef::new(0, 3)));
        assert_eq!(graph.tubes()[3].parent(), Some(NodeRef::new(0, 0)));
    }

    #[test]
    fn insert_branch_from_interior_node() {
        let mut graph = graph_with_chain(3);
        graph.set_node_active(NodeRef::new(0, 1), true).unwrap();

        let at = graph.insert_node(0, 1, DVec3::Y, 0.3, true).unwrap();

        assert_eq!(at, NodeRef::new(1, 1));
        assert_eq!(graph.tubes()[0].len(), 3);
        let branch = &graph.tubes()[1];
        assert_eq!(branch.parent(), Some(NodeRef::new(0, 1)));
        assert_eq!(branch.len(), 2);
        assert!(branch.nodes()[0].same_shape(&graph.tubes()[0].nodes()[1]));
        assert!(!branch.nodes()[0].active);
        assert_eq!(branch.nodes()[1].location, DVec3::Y);
        assert_eq!(branch.nodes()[1].radius, 0.3);
    }

    #[test]
    fn insert_branch_from_last_node_appends_instead() {
        let mut graph = graph_with_chain(3);
        let at = graph.insert_node(0, 2, DVec3::Y, 0.3, true).unwrap();
        assert_eq!(at, NodeRef::new(0, 2));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.tubes()[0].len(), 4);
    }

    #[test]
    fn insert_at_zero_of_branch_snaps_to_joint() {
        let mut graph = graph_with_chain(3);
        graph.insert_node(0, 1, DVec3::Y, 0.3, true).unwrap();

        graph.insert_node(1, 0, DVec3::Z * 9.0, 5.0, false).unwrap();

        let joint = graph.tubes()[0].nodes()[1];
        assert!(graph.tubes()[1].nodes()[0].same_shape(&joint));
        assert_eq!(graph.tubes()[1].len(), 3);
    }

    #[test]
    fn insert_past_end_is_refused() {
        let mut graph = graph_with_chain(2);
        assert_eq!(
            graph.insert_node(0, 3, DVec3::ZERO, 1.0, false),
            Err(EditError::InvalidNode {
                tube: 0,
                node: 3,
                len: 2
            })
        );
        assert_eq!(graph.tubes()[0].len(), 2);
    }

    #[test]
    fn remove_node_zero_clears_own_link() {
        let mut graph = graph_with_chain(3);
        graph.insert_node(0, 1, DVec3::Y, 0.3, true).unwrap();
        assert!(graph.tubes()[1].is_branch());

        graph.remove_node(NodeRef::new(1, 0)).unwrap();

        assert_eq!(graph.tubes()[1].parent(), None);
        assert_eq!(graph.tubes()[1].len(), 1);
    }

    #[test]
    fn remove_node_relinks_children() {
        let mut graph = graph_with_chain(4);
        graph.tubes.push(linked(NodeRef::new(0, 1), 1));
        graph.tubes.push(linked(NodeRef::new(0, 3), 1));
        graph.tubes.push(linked(NodeRef::new(0, 0), 1));

        graph.remove_node(NodeRef::new(0, 1)).unwrap();

        assert_eq!(graph.tubes()[1].parent(), None);
        assert_eq!(graph.tubes()[2].parent(), Some(NodeRef::new(0, 2)));
        assert_eq!(graph.tubes()[3].parent(), Some(NodeRef::new(0, 0)));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn set_parent_refuses_cycles() {
        let mut graph = graph_with_chain(2);
        graph.insert_node(0, 0, DVec3::Y, 0.3, true).unwrap();
        graph.insert_node(1, 0, DVec3::Z, 0.3, true).unwrap();
        assert_eq!(graph.tubes()[2].parent(), Some(NodeRef::new(1, 0)));

        assert_eq!(
            graph.set_parent(0, Some(NodeRef::new(2, 1))),
            Err(EditError::WouldCycle {
                child: 0,
                parent: 2
            })
        );
        assert_eq!(
            graph.set_parent(0, Some(NodeRef::new(0, 1))),
            Err(EditError::WouldCycle {
                child: 0,
                parent: 0
            })
        );
        assert_eq!(graph.tubes()[0].parent(), None);
    }

    #[test]
    fn set_parent_snaps_child_to_joint() {
        let mut graph = graph_with_chain(3);
        let loose = graph.add_tube();
        graph
            .insert_node(loose, 0, DVec3::new(7.0, 7.0, 7.0), 2.0, false)
            .unwrap();

        graph.set_parent(loose, Some(NodeRef::new(0, 2))).unwrap();

        let joint = graph.tubes()[0].nodes()[2];
        assert!(graph.tubes()[loose].nodes()[0].same_shape(&joint));

        graph.set_parent(loose, None).unwrap();
        assert!(!graph.tubes()[loose].is_branch());
    }

    #[test]
    fn set_parent_on_empty_tube_is_refused() {
        let mut graph = graph_with_chain(2);
        let empty = graph.add_tube();
        assert!(
            graph
                .set_parent(empty, Some(NodeRef::new(0, 0)))
                .unwrap_err()
                .is_invalid_index()
        );
    }

    #[test]
    fn shape_edits_propagate() {
        let mut graph = graph_with_chain(3);
        graph.insert_node(0, 1, DVec3::Y, 0.3, true).unwrap();
        let mut scratch = PropagationScratch::new();

        let written = graph
            .set_node_radius(NodeRef::new(1, 0), 0.75, &mut scratch)
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(graph.tubes()[0].nodes()[1].radius, 0.75);

        graph
            .set_node_location(NodeRef::new(0, 1), DVec3::Z, &mut scratch)
            .unwrap();
        assert_eq!(graph.tubes()[1].nodes()[0].location, DVec3::Z);
        assert_eq!(graph.tubes()[1].nodes()[0].radius, 0.75);
    }

    #[test]
    fn scope_follows_active_tube() {
        let mut graph = graph_with_chain(2);
        graph.add_tube();
        graph.insert_node(1, 0, DVec3::ZERO, 1.0, false).unwrap();
        graph.set_node_active(NodeRef::new(0, 1), true).unwrap();
        graph.set_node_active(NodeRef::new(1, 0), true).unwrap();

        assert_eq!(graph.scoped_selection().count(), 2);
        graph.set_active_tube(Some(1)).unwrap();
        assert_eq!(
            graph.scoped_selection().collect::<Vec<_>>(),
            vec![NodeRef::new(1, 0)]
        );

        assert!(graph.clear_scoped_active());
        assert!(!graph.clear_scoped_active());
        assert!(graph.node(NodeRef::new(0, 1)).unwrap().active);

        graph.clear_all_active();
        assert!(!graph.node(NodeRef::new(0, 1)).unwrap().active);
        assert!(graph.set_active_tube(Some(5)).is_err());
    }

    #[test]
    fn validate_reports_bad_links() {
        let mut graph = graph_with_chain(1);
        graph.tubes.push(linked(NodeRef::new(0, 4), 1));
        assert_eq!(
            graph.validate(),
            Err(GraphInconsistency::ParentOutOfRange { tube: 1 })
        );

        let mut graph = graph_with_chain(1);
        graph.tubes.push(linked(NodeRef::new(0, 0), 0));
        assert_eq!(
            graph.validate(),
            Err(GraphInconsistency::OrphanedBranch { tube: 1 })
        );

        let graph = BranchGraph::from_tubes(vec![
            linked(NodeRef::new(1, 0), 1),
            linked(NodeRef::new(0, 0), 1),
        ]);
        assert_eq!(
            graph.validate(),
            Err(GraphInconsistency::Cycle { tube: 0 })
        );
    }
}
