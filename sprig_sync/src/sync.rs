// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental synchronization of a branch graph into a [`GraphPatch`] target.

use glam::DVec3;
use kurbo::Point;
use sprig_branch::BranchGraph;

use crate::key::{Link, NodeKey, NodeKind, Socket};
use crate::patch::{GraphPatch, ParamValue, param};
use crate::settings::{Method, Settings};

/// Node editor columns for generated nodes.
mod column {
    pub(super) const SPHERE: f64 = -400.0;
    pub(super) const TRANSFORM: f64 = -200.0;
    pub(super) const PAIR_JOIN: f64 = 0.0;
    pub(super) const HULL: f64 = 200.0;
    pub(super) const TUBE: f64 = 400.0;
    pub(super) const JOIN: f64 = 600.0;
    pub(super) const OUTPUT: f64 = 800.0;
    pub(super) const SYMMETRY: f64 = 800.0;
    pub(super) const JOIN2: f64 = 1000.0;
    pub(super) const MIRROR: f64 = 1400.0;
    pub(super) const SKIN: f64 = 0.0;
    pub(super) const SUBDIVISION: f64 = 200.0;
}

/// Vertical spacing between rows of per-node structure.
const ROW: f64 = -30.0;

/// Counts of the changes made by one [`sync`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Nodes created.
    pub created: usize,
    /// Nodes removed.
    pub removed: usize,
    /// Links added.
    pub linked: usize,
    /// Links removed.
    pub unlinked: usize,
    /// Parameters written with a new value.
    pub params: usize,
}

impl SyncReport {
    /// Returns `true` if the run changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Wraps the target and counts what actually changes.
struct Patcher<'a, G: ?Sized> {
    target: &'a mut G,
    report: SyncReport,
}

impl<G: GraphPatch + ?Sized> Patcher<'_, G> {
    fn ensure_node(&mut self, key: NodeKey, kind: NodeKind, position: Point) {
        if !self.target.contains(key) {
            log::trace!("create {key}");
            self.target.create(key, kind, position);
            self.report.created += 1;
        }
    }

    fn remove_node(&mut self, key: NodeKey) {
        if self.target.contains(key) {
            log::trace!("remove {key}");
            self.target.remove(key);
            self.report.removed += 1;
        }
    }

    fn ensure_link(&mut self, link: Link) {
        if !self.target.is_linked(&link) {
            self.target.link(link);
            self.report.linked += 1;
        }
    }

    fn drop_link(&mut self, link: Link) {
        if self.target.is_linked(&link) {
            self.target.unlink(&link);
            self.report.unlinked += 1;
        }
    }

    fn set_param(&mut self, key: NodeKey, name: &'static str, value: ParamValue) {
        if self.target.param(key, name) != Some(value) {
            self.target.set_param(key, name, value);
            self.report.params += 1;
        }
    }
}

/// Patches `target` so that it renders `graph` with `settings`.
///
/// Only the difference is applied: nodes are created when their key is missing,
/// removed when their key refers to a tube or node that no longer exists, links
/// are added or removed to match the current structure, and parameters are
/// written when their value changed. Running twice without a model change makes
/// no changes the second time. Node editor positions are set on creation only,
/// so a user's arrangement of existing nodes survives.
///
/// Nothing happens when `is_sketch` is unset. A graph that fails
/// [`BranchGraph::validate`] is skipped with a warning, leaving the target as it
/// was.
pub fn sync<G>(
    graph: &BranchGraph,
    settings: &Settings,
    is_sketch: bool,
    target: &mut G,
) -> SyncReport
where
    G: GraphPatch + ?Sized,
{
    if !is_sketch {
        return SyncReport::default();
    }
    if let Err(err) = graph.validate() {
        log::warn!("skipping sync of inconsistent branch graph: {err}");
        return SyncReport::default();
    }

    let mut patch = Patcher {
        target,
        report: SyncReport::default(),
    };
    match settings.method {
        Method::GeometryNodes => {
            patch.remove_node(NodeKey::Skin);
            patch.remove_node(NodeKey::Subdivision);
            sync_fixed_nodes(&mut patch, settings);
            prune(&mut patch, graph);
            sync_tubes(&mut patch, graph);
        }
        Method::Skin => {
            for key in patch.target.keys() {
                if key.is_geometry() {
                    patch.remove_node(key);
                }
            }
            sync_skin(&mut patch, settings);
        }
    }
    sync_mirror(&mut patch, settings);

    let report = patch.report;
    log::debug!("synchronized {} tubes: {report:?}", graph.len());
    report
}

fn sync_fixed_nodes<G: GraphPatch + ?Sized>(patch: &mut Patcher<'_, G>, settings: &Settings) {
    patch.ensure_node(
        NodeKey::Output,
        NodeKind::GroupOutput,
        Point::new(column::OUTPUT, 0.0),
    );
    patch.ensure_node(
        NodeKey::Sphere,
        NodeKind::UvSphere,
        Point::new(column::SPHERE, 0.0),
    );
    patch.ensure_node(
        NodeKey::Join,
        NodeKind::JoinGeometry,
        Point::new(column::JOIN, 0.0),
    );

    let segments = i64::from(settings.segments());
    patch.set_param(NodeKey::Sphere, param::SEGMENTS, ParamValue::Int(segments * 8));
    patch.set_param(NodeKey::Sphere, param::RINGS, ParamValue::Int(segments * 4));

    let direct = Link::geometry(NodeKey::Join, NodeKey::Output);
    match settings.symmetry {
        Some(axis) => {
            patch.drop_link(direct);
            patch.ensure_node(
                NodeKey::Symmetry,
                NodeKind::Transform,
                Point::new(column::SYMMETRY, 0.0),
            );
            patch.ensure_node(
                NodeKey::Join2,
                NodeKind::JoinGeometry,
                Point::new(column::JOIN2, 0.0),
            );
            patch.set_param(
                NodeKey::Symmetry,
                param::SCALE,
                ParamValue::Vec3(axis.flip_scale()),
            );
            patch.ensure_link(Link::geometry(NodeKey::Join, NodeKey::Symmetry));
            patch.ensure_link(Link::geometry(NodeKey::Join, NodeKey::Join2));
            patch.ensure_link(Link::geometry(NodeKey::Symmetry, NodeKey::Join2));
            patch.ensure_link(Link::geometry(NodeKey::Join2, NodeKey::Output));
        }
        None => {
            patch.remove_node(NodeKey::Symmetry);
            patch.remove_node(NodeKey::Join2);
            patch.ensure_link(direct);
        }
    }
}

/// Removes per-tube and per-node structure whose indices no longer exist.
fn prune<G: GraphPatch + ?Sized>(patch: &mut Patcher<'_, G>, graph: &BranchGraph) {
    for key in patch.target.keys() {
        let Some(t) = key.tube_index() else {
            continue;
        };
        let Some(tube) = graph.tube(t) else {
            patch.remove_node(key);
            continue;
        };
        let stale = match key {
            NodeKey::Transform(_, i) => i >= tube.len(),
            // Pairs start at node 1.
            NodeKey::PairJoin(_, i) | NodeKey::Hull(_, i) => i == 0 || i >= tube.len(),
            _ => false,
        };
        if stale {
            patch.remove_node(key);
        }
    }
}

fn sync_tubes<G: GraphPatch + ?Sized>(patch: &mut Patcher<'_, G>, graph: &BranchGraph) {
    let mut row = 0.0;
    for (t, tube) in graph.tubes().iter().enumerate() {
        let tube_key = NodeKey::Tube(t);
        patch.ensure_node(
            tube_key,
            NodeKind::JoinGeometry,
            Point::new(column::TUBE, row * ROW),
        );
        patch.ensure_link(Link::geometry(tube_key, NodeKey::Join));

        for (i, node) in tube.nodes().iter().enumerate() {
            let transform = NodeKey::Transform(t, i);
            patch.ensure_node(
                transform,
                NodeKind::Transform,
                Point::new(column::TRANSFORM, row * ROW),
            );
            patch.ensure_link(Link::new(
                NodeKey::Sphere,
                Socket::Mesh,
                transform,
                Socket::Geometry,
            ));
            patch.set_param(
                transform,
                param::TRANSLATION,
                ParamValue::Vec3(node.location),
            );
            patch.set_param(
                transform,
                param::SCALE,
                ParamValue::Vec3(DVec3::splat(node.radius)),
            );

            if i > 0 {
                let pair = NodeKey::PairJoin(t, i);
                let hull = NodeKey::Hull(t, i);
                let y = row * ROW - ROW;
                patch.ensure_node(
                    pair,
                    NodeKind::JoinGeometry,
                    Point::new(column::PAIR_JOIN, y),
                );
                patch.ensure_node(hull, NodeKind::ConvexHull, Point::new(column::HULL, y));
                patch.ensure_link(Link::geometry(NodeKey::Transform(t, i - 1), pair));
                patch.ensure_link(Link::geometry(transform, pair));
                patch.ensure_link(Link::geometry(pair, hull));
                patch.ensure_link(Link::new(
                    hull,
                    Socket::ConvexHull,
                    tube_key,
                    Socket::Geometry,
                ));
            }
            row += 1.0;
        }

        // A lone sphere is the whole tube; longer tubes go through the hulls.
        let lone = Link::geometry(NodeKey::Transform(t, 0), tube_key);
        if tube.len() == 1 {
            patch.ensure_link(lone);
        } else {
            patch.drop_link(lone);
        }
    }
}

fn sync_skin<G: GraphPatch + ?Sized>(patch: &mut Patcher<'_, G>, settings: &Settings) {
    patch.ensure_node(NodeKey::Skin, NodeKind::Skin, Point::new(column::SKIN, 0.0));
    patch.ensure_node(
        NodeKey::Subdivision,
        NodeKind::Subdivision,
        Point::new(column::SUBDIVISION, 0.0),
    );
    patch.ensure_link(Link::geometry(NodeKey::Skin, NodeKey::Subdivision));
    patch.set_param(
        NodeKey::Subdivision,
        param::LEVELS,
        ParamValue::Int(i64::from(settings.subdivision_levels())),
    );
}

fn sync_mirror<G: GraphPatch + ?Sized>(patch: &mut Patcher<'_, G>, settings: &Settings) {
    let mirror = &settings.mirror;
    if !mirror.is_enabled() {
        patch.remove_node(NodeKey::Mirror);
        return;
    }
    patch.ensure_node(
        NodeKey::Mirror,
        NodeKind::Mirror,
        Point::new(column::MIRROR, 0.0),
    );
    patch.set_param(NodeKey::Mirror, param::AXIS, ParamValue::Axes(mirror.axes));
    patch.set_param(NodeKey::Mirror, param::BISECT, ParamValue::Axes(mirror.bisect));
    patch.set_param(NodeKey::Mirror, param::MERGE, ParamValue::Bool(mirror.merge));
    patch.set_param(
        NodeKey::Mirror,
        param::MERGE_THRESHOLD,
        ParamValue::Float(mirror.merge_threshold),
    );
}
