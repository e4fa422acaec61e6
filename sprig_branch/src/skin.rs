// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening a branch graph into a skin mesh: shared vertices, per-vertex radii, edges.

use alloc::vec::Vec;

use glam::DVec3;

use crate::graph::BranchGraph;
use crate::tube::NodeRef;

/// A vertex/edge skeleton with a radius per vertex, as consumed by skin modifiers.
///
/// Each node becomes a vertex, except that node 0 of a linked tube reuses the
/// vertex of the parent node it shares a joint with. Consecutive nodes of a tube
/// are joined by an edge, so branches meet at a single vertex instead of
/// overlapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkinMesh {
    /// Vertex positions in the sketch's local space.
    pub vertices: Vec<DVec3>,
    /// Skin radius of each vertex.
    pub radii: Vec<f64>,
    /// Edges as pairs of vertex indices.
    pub edges: Vec<[usize; 2]>,
    node_vertices: Vec<Vec<usize>>,
}

impl SkinMesh {
    /// Builds the skin mesh for `graph`.
    ///
    /// Links that do not resolve to a node (or that loop back on themselves) are
    /// ignored and the linked node gets its own vertex.
    #[must_use]
    pub fn from_graph(graph: &BranchGraph) -> Self {
        let mut mesh = Self::default();
        let unassigned = usize::MAX;
        mesh.node_vertices = graph
            .tubes()
            .iter()
            .map(|tube| alloc::vec![unassigned; tube.len()])
            .collect();

        for (tube_index, tube) in graph.tubes().iter().enumerate() {
            for node_index in 0..tube.len() {
                let at = NodeRef::new(tube_index, node_index);
                if mesh.node_vertices[at.tube][at.node] != unassigned {
                    continue;
                }
                let root = joint_root(graph, at);
                let vertex = if mesh.node_vertices[root.tube][root.node] == unassigned {
                    let Some(node) = graph.node(root) else {
                        continue;
                    };
                    mesh.vertices.push(node.location);
                    mesh.radii.push(node.radius);
                    let vertex = mesh.vertices.len() - 1;
                    mesh.node_vertices[root.tube][root.node] = vertex;
                    vertex
                } else {
                    mesh.node_vertices[root.tube][root.node]
                };
                mesh.node_vertices[at.tube][at.node] = vertex;
            }
        }

        for vertices in &mesh.node_vertices {
            for pair in vertices.windows(2) {
                if pair[0] != pair[1] {
                    mesh.edges.push([pair[0], pair[1]]);
                }
            }
        }
        mesh
    }

    /// Returns the vertex a node was mapped to.
    #[must_use]
    pub fn vertex_of(&self, at: NodeRef) -> Option<usize> {
        self.node_vertices.get(at.tube)?.get(at.node).copied()
    }
}

/// Follows joint links up from `at` to the node that owns the joint's vertex.
fn joint_root(graph: &BranchGraph, at: NodeRef) -> NodeRef {
    let mut current = at;
    for _ in 0..=graph.len() {
        if current.node != 0 {
            return current;
        }
        match graph.tubes()[current.tube].parent() {
            Some(parent) if graph.node(parent).is_some() && parent != at => current = parent,
            _ => return current,
        }
    }
    // Only reachable through cyclic links; fall back to the node itself.
    at
}
