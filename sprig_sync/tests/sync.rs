// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `sprig_sync` crate.
//!
//! These drive [`sync`] against a [`MemoryGraph`] through sequences of model
//! edits and check the resulting wiring, parameters, and change counts.

use glam::DVec3;
use kurbo::Point;
use sprig_branch::{BranchGraph, NodeRef, PropagationScratch};
use sprig_sync::{
    Axis, GraphPatch, Link, MemoryGraph, Method, NodeKey, ParamValue, Settings, Socket,
    SyncReport, param, sync,
};

fn tube_of(graph: &mut BranchGraph, len: usize) -> usize {
    let tube = graph.add_tube();
    for i in 0..len {
        graph
            .insert_node(tube, i, DVec3::new(i as f64, 0.0, 0.0), 1.0, false)
            .unwrap();
    }
    tube
}

fn hull_input(t: usize, i: usize) -> Link {
    Link::new(
        NodeKey::Hull(t, i),
        Socket::ConvexHull,
        NodeKey::Tube(t),
        Socket::Geometry,
    )
}

#[test]
fn second_run_is_a_no_op() {
    let mut graph = BranchGraph::new();
    let trunk = tube_of(&mut graph, 4);
    graph.insert_node(trunk, 1, DVec3::Y, 0.5, true).unwrap();
    tube_of(&mut graph, 1);
    let settings = Settings::default().with_symmetry(Some(Axis::X));
    let mut target = MemoryGraph::new();

    let first = sync(&graph, &settings, true, &mut target);
    assert!(first.created > 0);
    target.take_events();

    let second = sync(&graph, &settings, true, &mut target);
    assert_eq!(second, SyncReport::default());
    assert!(target.events().is_empty());
}

#[test]
fn tube_wiring_goes_through_pairs_and_hulls() {
    let mut graph = BranchGraph::new();
    tube_of(&mut graph, 3);
    let mut target = MemoryGraph::new();
    sync(&graph, &Settings::default(), true, &mut target);

    assert_eq!(
        target.inputs(NodeKey::Tube(0)),
        vec![hull_input(0, 1), hull_input(0, 2)]
    );
    assert_eq!(
        target.inputs(NodeKey::PairJoin(0, 2)),
        vec![
            Link::geometry(NodeKey::Transform(0, 1), NodeKey::PairJoin(0, 2)),
            Link::geometry(NodeKey::Transform(0, 2), NodeKey::PairJoin(0, 2)),
        ]
    );
    assert_eq!(
        target.inputs(NodeKey::Transform(0, 2)),
        vec![Link::new(
            NodeKey::Sphere,
            Socket::Mesh,
            NodeKey::Transform(0, 2),
            Socket::Geometry
        )]
    );
    assert!(target.is_linked(&Link::geometry(NodeKey::Tube(0), NodeKey::Join)));
    assert_eq!(
        target.param(NodeKey::Transform(0, 2), param::TRANSLATION),
        Some(ParamValue::Vec3(DVec3::new(2.0, 0.0, 0.0)))
    );
    assert_eq!(
        target.param(NodeKey::Transform(0, 2), param::SCALE),
        Some(ParamValue::Vec3(DVec3::ONE))
    );
}

#[test]
fn single_node_tube_switches_wiring_both_ways() {
    let mut graph = BranchGraph::new();
    let t = tube_of(&mut graph, 1);
    let lone = Link::geometry(NodeKey::Transform(0, 0), NodeKey::Tube(0));
    let settings = Settings::default();
    let mut target = MemoryGraph::new();

    sync(&graph, &settings, true, &mut target);
    assert!(target.is_linked(&lone));

    graph.insert_node(t, 1, DVec3::X, 1.0, false).unwrap();
    let report = sync(&graph, &settings, true, &mut target);
    assert!(!target.is_linked(&lone));
    assert_eq!(report.unlinked, 1);
    assert_eq!(target.inputs(NodeKey::Tube(0)), vec![hull_input(0, 1)]);

    graph.remove_node(NodeRef::new(t, 1)).unwrap();
    let report = sync(&graph, &settings, true, &mut target);
    assert!(target.is_linked(&lone));
    assert_eq!(report.removed, 3);
    assert!(!target.contains(NodeKey::Hull(0, 1)));
    assert!(!target.contains(NodeKey::PairJoin(0, 1)));
    assert!(!target.contains(NodeKey::Transform(0, 1)));
    assert_eq!(target.inputs(NodeKey::Tube(0)), vec![lone]);
}

#[test]
fn removed_tubes_are_pruned_and_indices_reused() {
    let mut graph = BranchGraph::new();
    tube_of(&mut graph, 3);
    tube_of(&mut graph, 1);
    let settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);

    graph.remove_tube(0).unwrap();
    let report = sync(&graph, &settings, true, &mut target);

    // Tube_1 and its transform go; Tube_0 loses its pair structure and
    // Transform_0_1/_0_2, and is rewired to its lone sphere.
    assert!(!target.contains(NodeKey::Tube(1)));
    assert!(!target.contains(NodeKey::Transform(1, 0)));
    assert!(!target.contains(NodeKey::Transform(0, 1)));
    assert_eq!(report.removed, 2 + 2 + 4);
    assert_eq!(report.created, 0);
    assert_eq!(
        target.inputs(NodeKey::Tube(0)),
        vec![Link::geometry(NodeKey::Transform(0, 0), NodeKey::Tube(0))]
    );
    assert_eq!(
        target.param(NodeKey::Transform(0, 0), param::TRANSLATION),
        Some(ParamValue::Vec3(DVec3::ZERO))
    );
}

#[test]
fn propagated_edits_update_both_sides_of_a_joint() {
    let mut graph = BranchGraph::new();
    let trunk = tube_of(&mut graph, 3);
    let tip = graph.insert_node(trunk, 1, DVec3::Y, 0.5, true).unwrap();
    let settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);
    target.take_events();

    let mut scratch = PropagationScratch::new();
    graph
        .set_node_radius(NodeRef::new(trunk, 1), 2.0, &mut scratch)
        .unwrap();
    let report = sync(&graph, &settings, true, &mut target);

    assert_eq!(report.params, 2);
    let scale = Some(ParamValue::Vec3(DVec3::splat(2.0)));
    assert_eq!(target.param(NodeKey::Transform(trunk, 1), param::SCALE), scale);
    assert_eq!(target.param(NodeKey::Transform(tip.tube, 0), param::SCALE), scale);
}

#[test]
fn symmetry_inserts_and_removes_mirrored_branch() {
    let mut graph = BranchGraph::new();
    tube_of(&mut graph, 2);
    let mut settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);

    settings.symmetry = Some(Axis::Y);
    sync(&graph, &settings, true, &mut target);
    assert!(!target.is_linked(&Link::geometry(NodeKey::Join, NodeKey::Output)));
    assert_eq!(
        target.inputs(NodeKey::Join2),
        vec![
            Link::geometry(NodeKey::Join, NodeKey::Join2),
            Link::geometry(NodeKey::Symmetry, NodeKey::Join2),
        ]
    );
    assert_eq!(
        target.inputs(NodeKey::Output),
        vec![Link::geometry(NodeKey::Join2, NodeKey::Output)]
    );
    assert_eq!(
        target.param(NodeKey::Symmetry, param::SCALE),
        Some(ParamValue::Vec3(DVec3::new(1.0, -1.0, 1.0)))
    );

    settings.symmetry = Some(Axis::Z);
    let report = sync(&graph, &settings, true, &mut target);
    assert_eq!((report.created, report.params), (0, 1));

    settings.symmetry = None;
    sync(&graph, &settings, true, &mut target);
    assert!(!target.contains(NodeKey::Symmetry));
    assert!(!target.contains(NodeKey::Join2));
    assert_eq!(
        target.inputs(NodeKey::Output),
        vec![Link::geometry(NodeKey::Join, NodeKey::Output)]
    );
}

#[test]
fn segment_count_drives_sphere_resolution() {
    let graph = BranchGraph::new();
    let mut target = MemoryGraph::new();
    sync(&graph, &Settings::default().with_segments(6), true, &mut target);
    assert_eq!(
        target.param(NodeKey::Sphere, param::SEGMENTS),
        Some(ParamValue::Int(48))
    );
    assert_eq!(
        target.param(NodeKey::Sphere, param::RINGS),
        Some(ParamValue::Int(24))
    );
}

#[test]
fn skin_method_replaces_geometry_graph() {
    let mut graph = BranchGraph::new();
    tube_of(&mut graph, 2);
    let mut settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);

    settings.method = Method::Skin;
    settings.set_subdivision_levels(3);
    sync(&graph, &settings, true, &mut target);

    let mut keys = target.keys();
    keys.sort();
    assert_eq!(keys, vec![NodeKey::Skin, NodeKey::Subdivision]);
    assert_eq!(
        target.param(NodeKey::Subdivision, param::LEVELS),
        Some(ParamValue::Int(3))
    );

    settings.method = Method::GeometryNodes;
    sync(&graph, &settings, true, &mut target);
    assert!(!target.contains(NodeKey::Skin));
    assert!(target.contains(NodeKey::Hull(0, 1)));
}

#[test]
fn mirror_node_follows_axes() {
    let graph = BranchGraph::new();
    let mut settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);
    assert!(!target.contains(NodeKey::Mirror));

    settings.mirror.axes = [true, false, true];
    settings.mirror.merge = true;
    sync(&graph, &settings, true, &mut target);
    assert_eq!(
        target.param(NodeKey::Mirror, param::AXIS),
        Some(ParamValue::Axes([true, false, true]))
    );
    assert_eq!(
        target.param(NodeKey::Mirror, param::MERGE_THRESHOLD),
        Some(ParamValue::Float(0.001))
    );

    settings.mirror.axes = [false; 3];
    sync(&graph, &settings, true, &mut target);
    assert!(!target.contains(NodeKey::Mirror));
}

#[test]
fn editor_positions_survive_resync() {
    let mut graph = BranchGraph::new();
    let t = tube_of(&mut graph, 2);
    let settings = Settings::default();
    let mut target = MemoryGraph::new();
    sync(&graph, &settings, true, &mut target);
    assert_eq!(
        target.node(NodeKey::Hull(0, 1)).unwrap().position,
        Point::new(200.0, 0.0)
    );

    target.move_node(NodeKey::Hull(0, 1), Point::new(-50.0, 75.0));
    graph.insert_node(t, 2, DVec3::Z, 1.0, false).unwrap();
    sync(&graph, &settings, true, &mut target);

    assert_eq!(
        target.node(NodeKey::Hull(0, 1)).unwrap().position,
        Point::new(-50.0, 75.0)
    );
    assert_eq!(
        target.node(NodeKey::Transform(0, 2)).unwrap().position,
        Point::new(-200.0, -60.0)
    );
}

#[test]
fn nothing_happens_outside_a_sketch() {
    let mut graph = BranchGraph::new();
    tube_of(&mut graph, 2);
    let mut target = MemoryGraph::new();
    assert!(sync(&graph, &Settings::default(), false, &mut target).is_empty());
    assert!(target.is_empty());
}
