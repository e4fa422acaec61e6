// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Armature export: one bone per tube segment, parented across joints.

use alloc::vec::Vec;

use glam::DVec3;

use crate::graph::BranchGraph;
use crate::tube::NodeRef;

/// A bone running from one node to the next along a tube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bone {
    /// Location of the segment's first node.
    pub head: DVec3,
    /// Location of the segment's second node.
    pub tail: DVec3,
    /// The tube the segment belongs to.
    pub tube: usize,
    /// Index of the parent bone in [`Skeleton::bones`].
    pub parent: Option<usize>,
}

/// Bones for every segment of every tube.
///
/// Within a tube each bone is parented to the previous one. The first bone of a
/// linked tube is parented to the bone of the parent tube that ends on the joint,
/// or, when the tube hangs from a parent's node 0, to the bone that node's own
/// tube hangs from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    /// All bones, grouped by tube in addressing order.
    pub bones: Vec<Bone>,
    first_bone: Vec<Option<usize>>,
}

impl Skeleton {
    /// Builds the skeleton for `graph`. Tubes with fewer than two nodes have no bones.
    #[must_use]
    pub fn from_graph(graph: &BranchGraph) -> Self {
        let mut skeleton = Self::default();
        for (index, tube) in graph.tubes().iter().enumerate() {
            if tube.len() < 2 {
                skeleton.first_bone.push(None);
                continue;
            }
            let start = skeleton.bones.len();
            skeleton.first_bone.push(Some(start));
            for (offset, pair) in tube.nodes().windows(2).enumerate() {
                skeleton.bones.push(Bone {
                    head: pair[0].location,
                    tail: pair[1].location,
                    tube: index,
                    parent: (offset > 0).then(|| start + offset - 1),
                });
            }
        }

        for (index, tube) in graph.tubes().iter().enumerate() {
            let (Some(first), Some(link)) = (skeleton.first_bone[index], tube.parent()) else {
                continue;
            };
            skeleton.bones[first].parent = skeleton.bone_ending_at(graph, link);
        }
        skeleton
    }

    /// Returns the bones of `tube`, in node order.
    #[must_use]
    pub fn tube_bones(&self, tube: usize) -> &[Bone] {
        let Some(Some(start)) = self.first_bone.get(tube) else {
            return &[];
        };
        let end = self.bones[*start..]
            .iter()
            .position(|bone| bone.tube != tube)
            .map_or(self.bones.len(), |len| start + len);
        &self.bones[*start..end]
    }

    /// Finds the bone whose tail sits on the joint at `at`.
    fn bone_ending_at(&self, graph: &BranchGraph, at: NodeRef) -> Option<usize> {
        let mut current = at;
        // Links may be cyclic in unvalidated data.
        for _ in 0..=graph.len() {
            if current.node > 0 {
                let start = (*self.first_bone.get(current.tube)?)?;
                let bone = start + current.node - 1;
                return self
                    .bones
                    .get(bone)
                    .filter(|b| b.tube == current.tube)
                    .map(|_| bone);
            }
            current = graph.tube(current.tube)?.parent()?;
        }
        None
    }
}
