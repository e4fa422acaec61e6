// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session: a sketch, its generated node graph, and the commands
//! that change them.

use alloc::vec::Vec;
use core::time::Duration;

use glam::DVec3;
use kurbo::{Point, Rect};
use log::debug;
use sprig_branch::{
    BranchGraph, EditError, NodeRef, PropagationScratch, Skeleton, SkinMesh, Tube,
};
use sprig_pick::{Projection, WorldTransform, nodes_in_rect, pick_node};
use sprig_sync::{GraphPatch, Settings, SyncReport, sync};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::gesture::{Gesture, GestureKind, Modifiers, Wheel, snapshot};
use crate::history::{CheckpointThrottle, History};

/// A sketch object: its tubes, how they are turned into geometry, and where it sits.
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    /// The tubes.
    pub graph: BranchGraph,
    /// Representation settings for the generated node graph.
    pub settings: Settings,
    /// Placement of the object in the world.
    pub world: WorldTransform,
    /// Cleared once the host has baked the object into a plain mesh. The session
    /// neither edits nor synchronizes an object that is no longer a sketch.
    pub is_sketch: bool,
}

impl Sketch {
    /// Creates an empty sketch placed by `world`.
    #[must_use]
    pub fn new(world: WorldTransform) -> Self {
        Self {
            graph: BranchGraph::new(),
            settings: Settings::default(),
            world,
            is_sketch: true,
        }
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new(WorldTransform::IDENTITY)
    }
}

/// Where the next insertion would land.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertPreview {
    /// World point under the cursor.
    pub location: DVec3,
    /// The node the new node would follow, if any.
    pub anchor: Option<NodeRef>,
    /// Radius the new node would get, in sketch units.
    pub radius: f64,
    /// Whether branch mode is held.
    pub branch: bool,
}

fn live(sketch: &Option<Sketch>) -> Option<&Sketch> {
    sketch.as_ref().filter(|s| s.is_sketch)
}

fn live_mut(sketch: &mut Option<Sketch>) -> Option<&mut Sketch> {
    sketch.as_mut().filter(|s| s.is_sketch)
}

fn deselect_tube(graph: &mut BranchGraph, tube: usize) {
    let len = graph.tube(tube).map_or(0, Tube::len);
    for node in 0..len {
        if let Some(node) = graph.node_mut(NodeRef::new(tube, node)) {
            node.active = false;
        }
    }
}

/// An interactive editing session over one sketch.
///
/// Every command that changes the sketch's shape records a checkpoint in `H`
/// first, then edits the branch graph (propagating joint shapes), then
/// synchronizes the generated node graph `G`. Commands that cannot apply (no
/// sketch, nothing under the cursor, a degenerate projection) change nothing
/// and report that through their return value.
///
/// Selection changes are not checkpointed and do not touch `G`.
#[derive(Debug)]
pub struct Session<G, H> {
    sketch: Option<Sketch>,
    target: G,
    history: H,
    config: SessionConfig,
    scratch: PropagationScratch,
    insert_radius: f64,
    inserting: bool,
    branch_mode: bool,
    preview: Option<InsertPreview>,
    gesture: Option<Gesture>,
    wheel_throttle: CheckpointThrottle,
    drag_throttle: CheckpointThrottle,
    last_report: SyncReport,
}

impl<G: GraphPatch, H: History> Session<G, H> {
    /// Creates a session with no sketch.
    ///
    /// `target` receives the generated node graph. The first insertion creates a
    /// sketch at the cursor.
    pub fn new(target: G, history: H, config: SessionConfig) -> Self {
        Self {
            sketch: None,
            target,
            history,
            insert_radius: config.default_insert_radius,
            inserting: false,
            branch_mode: false,
            preview: None,
            gesture: None,
            wheel_throttle: CheckpointThrottle::new(config.checkpoint_interval),
            drag_throttle: CheckpointThrottle::new(config.checkpoint_interval),
            scratch: PropagationScratch::new(),
            last_report: SyncReport::default(),
            config,
        }
    }

    /// Starts editing `sketch`, synchronizing `target` to it.
    #[must_use]
    pub fn with_sketch(mut self, sketch: Sketch) -> Self {
        self.sketch = Some(sketch);
        self.resync();
        self
    }

    /// Returns the sketch being edited.
    #[must_use]
    pub fn sketch(&self) -> Option<&Sketch> {
        self.sketch.as_ref()
    }

    /// Returns the sketch's branch graph.
    #[must_use]
    pub fn graph(&self) -> Option<&BranchGraph> {
        self.sketch.as_ref().map(|s| &s.graph)
    }

    /// Returns the generated node graph.
    #[must_use]
    pub fn target(&self) -> &G {
        &self.target
    }

    /// Returns the generated node graph mutably, for edits the synchronizer leaves
    /// alone (such as node editor positions).
    pub fn target_mut(&mut self) -> &mut G {
        &mut self.target
    }

    /// Returns the history collaborator.
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Returns the session tunables.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the report of the most recent synchronization.
    #[must_use]
    pub fn last_report(&self) -> SyncReport {
        self.last_report
    }

    /// Returns the radius given to inserted nodes.
    #[must_use]
    pub fn insert_radius(&self) -> f64 {
        self.insert_radius
    }

    /// Returns `true` while insert mode is held.
    #[must_use]
    pub fn is_inserting(&self) -> bool {
        self.inserting
    }

    /// Returns `true` while branch mode is held.
    #[must_use]
    pub fn is_branch_mode(&self) -> bool {
        self.branch_mode
    }

    /// Returns the latest insertion preview.
    #[must_use]
    pub fn insert_preview(&self) -> Option<InsertPreview> {
        self.preview
    }

    /// Returns the selection box of a box selection in progress, in viewport pixels.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        self.gesture.as_ref()?.selection_box()
    }

    /// Synchronizes the generated node graph to the sketch.
    pub fn resync(&mut self) -> SyncReport {
        let report = match &self.sketch {
            Some(sketch) => sync(
                &sketch.graph,
                &sketch.settings,
                sketch.is_sketch,
                &mut self.target,
            ),
            None => SyncReport::default(),
        };
        self.last_report = report;
        report
    }

    /// Runs `edit` against the branch graph, then synchronizes.
    ///
    /// This is the boundary for edits that have no dedicated command. A checkpoint
    /// is recorded before `edit` runs. Edits made through [`BranchGraph`]'s setters
    /// propagate as they go; an edit that writes node shapes directly should call
    /// [`propagate`](sprig_branch::propagate) with the scratch it is given.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSketch`] if there is no live sketch, or the
    /// [`EditError`] returned by `edit`. On error the branch graph is restored to
    /// its state before `edit` ran, so partial changes never reach the model or
    /// the node graph.
    pub fn apply_edit<R>(
        &mut self,
        edit: impl FnOnce(&mut BranchGraph, &mut PropagationScratch) -> Result<R, EditError>,
    ) -> Result<R, SessionError> {
        let sketch = live_mut(&mut self.sketch).ok_or(SessionError::NoSketch)?;
        self.history.checkpoint();
        let before = sketch.graph.clone();
        match edit(&mut sketch.graph, &mut self.scratch) {
            Ok(value) => {
                self.resync();
                Ok(value)
            }
            Err(err) => {
                debug!("edit refused, rolling back: {err}");
                sketch.graph = before;
                Err(err.into())
            }
        }
    }

    /// Replaces the representation settings and synchronizes.
    pub fn set_settings(&mut self, settings: Settings) -> bool {
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return false;
        };
        if sketch.settings == settings {
            return false;
        }
        self.history.checkpoint();
        sketch.settings = settings;
        self.resync();
        true
    }

    /// Moves the sketch object in the world.
    pub fn set_world(&mut self, world: WorldTransform) {
        if let Some(sketch) = live_mut(&mut self.sketch) {
            sketch.world = world;
        }
    }

    /// Appends an empty tube and makes it active.
    pub fn add_tube(&mut self) -> Option<usize> {
        let sketch = live_mut(&mut self.sketch)?;
        self.history.checkpoint();
        let tube = sketch.graph.add_tube();
        sketch.graph.set_active_tube(Some(tube)).ok()?;
        self.resync();
        Some(tube)
    }

    /// Removes the active tube. The tube now at its index, or the new last tube,
    /// becomes active.
    pub fn remove_active_tube(&mut self) -> Option<Tube> {
        let sketch = live_mut(&mut self.sketch)?;
        let active = sketch.graph.active_tube()?;
        self.history.checkpoint();
        let removed = sketch.graph.remove_tube(active).ok()?;
        self.resync();
        Some(removed)
    }

    /// Steps the insertion radius and returns the new value.
    pub fn adjust_insert_radius(&mut self, wheel: Wheel) -> f64 {
        self.insert_radius = self.config.step_radius(self.insert_radius, wheel);
        self.insert_radius
    }

    /// Tracks the held modifiers.
    ///
    /// Entering insert mode adopts the radius of the first selected node in
    /// scope, so new nodes continue the tube at its current thickness.
    pub fn set_modifiers<P>(&mut self, projection: &P, cursor: Point, modifiers: Modifiers)
    where
        P: Projection + ?Sized,
    {
        let inserting = modifiers.contains(Modifiers::ALT);
        if inserting && !self.inserting {
            let selected = live(&self.sketch).and_then(|sketch| {
                let at = sketch.graph.scoped_selection().next()?;
                sketch.graph.node(at).map(|node| node.radius)
            });
            if let Some(radius) = selected {
                self.insert_radius = radius;
            }
        }
        self.inserting = inserting;
        self.branch_mode = modifiers.contains(Modifiers::SHIFT);
        if inserting {
            self.update_insert_preview(projection, cursor);
        } else {
            self.preview = None;
        }
    }

    /// Recomputes where an insertion at `cursor` would land.
    ///
    /// The new node follows the first selected node in scope, or the active
    /// tube's last node, and is placed on that node's depth plane.
    pub fn update_insert_preview<P>(&mut self, projection: &P, cursor: Point) -> Option<InsertPreview>
    where
        P: Projection + ?Sized,
    {
        let (anchor, depth) = match live(&self.sketch) {
            Some(sketch) => {
                let graph = &sketch.graph;
                let anchor = graph.scoped_selection().next().or_else(|| {
                    let tube = graph.active_tube()?;
                    let last = graph.tube(tube)?.len().checked_sub(1)?;
                    Some(NodeRef::new(tube, last))
                });
                let depth = anchor
                    .and_then(|at| graph.node(at))
                    .map_or(sketch.world.origin(), |node| {
                        sketch.world.to_world(node.location)
                    });
                (anchor, depth)
            }
            None => (None, DVec3::ZERO),
        };
        self.preview = projection
            .unproject(cursor, depth)
            .map(|location| InsertPreview {
                location,
                anchor,
                radius: self.insert_radius,
                branch: self.branch_mode,
            });
        self.preview
    }

    /// Resolves the tube an insertion goes to, adopting the tube of the first
    /// selected node as active when no tube is. Returns the tube and its first
    /// selected node.
    fn adopt_insert_tube(&mut self) -> Option<(usize, Option<usize>)> {
        let graph = &mut live_mut(&mut self.sketch)?.graph;
        let tube = match graph.active_tube() {
            Some(tube) => tube,
            None => {
                let tube = graph.tubes().iter().position(Tube::has_active)?;
                graph.set_active_tube(Some(tube)).ok()?;
                tube
            }
        };
        Some((tube, graph.tube(tube)?.first_active()))
    }

    /// Inserts a node under the cursor and selects it.
    ///
    /// The node goes after the first selected node of the target tube, or at the
    /// end. With `branch` set and that node not the tube's last, a new branch tube
    /// hanging from it receives the node instead and becomes active. Without an
    /// active or selected tube a new tube is started. Without a sketch, one is
    /// created at the cursor.
    ///
    /// Returns where the node landed, or `None` if the cursor could not be
    /// unprojected.
    pub fn insert_at_cursor<P>(&mut self, projection: &P, cursor: Point, branch: bool) -> Option<NodeRef>
    where
        P: Projection + ?Sized,
    {
        let target = self.adopt_insert_tube();
        let depth = match live(&self.sketch) {
            Some(sketch) => {
                let anchor = target.and_then(|(tube, selected)| {
                    let last = sketch.graph.tube(tube)?.len().checked_sub(1)?;
                    sketch.graph.node(NodeRef::new(tube, selected.unwrap_or(last)))
                });
                anchor.map_or(sketch.world.origin(), |node| {
                    sketch.world.to_world(node.location)
                })
            }
            None => DVec3::ZERO,
        };
        let Some(pointer) = projection.unproject(cursor, depth) else {
            debug!("insert skipped: cursor {cursor:?} does not unproject");
            return None;
        };
        if !pointer.is_finite() {
            debug!("insert skipped: cursor {cursor:?} unprojects to {pointer}");
            return None;
        }

        if live(&self.sketch).is_none() {
            debug!("starting a sketch at {pointer}");
            self.sketch = Some(Sketch::new(WorldTransform::from_translation(pointer)));
        }
        self.history.checkpoint();
        let radius = self.insert_radius;
        let sketch = live_mut(&mut self.sketch)?;
        let location = sketch.world.to_local(pointer);
        let graph = &mut sketch.graph;

        let inserted = match target {
            Some((tube, Some(selected)))
                if branch && selected + 1 < graph.tube(tube).map_or(0, Tube::len) =>
            {
                let at = graph.insert_node(tube, selected, location, radius, true).ok()?;
                graph.set_active_tube(Some(at.tube)).ok()?;
                at
            }
            Some((tube, selected)) => {
                deselect_tube(graph, tube);
                let index = match selected {
                    Some(selected) => selected + 1,
                    None => graph.tube(tube).map_or(0, Tube::len),
                };
                graph.insert_node(tube, index, location, radius, false).ok()?
            }
            None => {
                let tube = graph.add_tube();
                graph.set_active_tube(Some(tube)).ok()?;
                graph.insert_node(tube, 0, location, radius, false).ok()?
            }
        };
        graph.set_node_active(inserted, true).ok()?;
        self.resync();
        Some(inserted)
    }

    /// Handles a primary button press.
    ///
    /// With [`Modifiers::ALT`] this inserts (see
    /// [`insert_at_cursor`](Self::insert_at_cursor)). Otherwise it picks the node
    /// under the cursor within the active tube filter and starts a gesture: a drag
    /// when a node was hit, a box selection when not. Returns the node pressed or
    /// inserted.
    pub fn pointer_down<P>(&mut self, projection: &P, cursor: Point, modifiers: Modifiers) -> Option<NodeRef>
    where
        P: Projection + ?Sized,
    {
        self.gesture = None;
        if modifiers.contains(Modifiers::ALT) {
            return self.insert_at_cursor(projection, cursor, modifiers.contains(Modifiers::SHIFT));
        }
        let sketch = live(&self.sketch)?;
        let graph = &sketch.graph;
        let pressed = pick_node(graph, &sketch.world, projection, cursor, graph.active_tube());
        let kind = match pressed.and_then(|at| graph.node(at)) {
            Some(node) => {
                let depth = sketch.world.to_world(node.location);
                GestureKind::Drag {
                    depth,
                    grab: projection.unproject(cursor, depth),
                }
            }
            None => GestureKind::BoxSelect,
        };
        self.gesture = Some(Gesture::new(cursor, pressed, kind, snapshot(graph)));
        pressed
    }

    /// Handles pointer motion.
    ///
    /// During a box selection, nodes in scope are selected when their centers are
    /// inside the box; with [`Modifiers::CTRL`] the selection from the press is
    /// kept as well. During a drag, every selected node in scope follows the
    /// cursor on the pressed node's depth plane. Outside a gesture, holding
    /// [`Modifiers::ALT`] refreshes the insertion preview.
    ///
    /// `now` is a monotonic timestamp used to coalesce a drag into one checkpoint.
    /// Returns `true` if the sketch's shape changed.
    pub fn pointer_move<P>(
        &mut self,
        projection: &P,
        cursor: Point,
        modifiers: Modifiers,
        now: Duration,
    ) -> bool
    where
        P: Projection + ?Sized,
    {
        let Some(mut gesture) = self.gesture.take() else {
            if modifiers.contains(Modifiers::ALT) {
                self.inserting = true;
                self.branch_mode = modifiers.contains(Modifiers::SHIFT);
                self.update_insert_preview(projection, cursor);
            }
            return false;
        };
        if gesture.last == cursor {
            self.gesture = Some(gesture);
            return false;
        }
        let changed = match gesture.kind {
            GestureKind::BoxSelect => {
                self.select_in_box(projection, &gesture, cursor, modifiers.contains(Modifiers::CTRL));
                false
            }
            GestureKind::Drag { depth, grab } => {
                self.drag_to(projection, &gesture, cursor, depth, grab, now)
            }
        };
        gesture.last = cursor;
        gesture.moved = true;
        self.gesture = Some(gesture);
        changed
    }

    fn select_in_box<P>(&mut self, projection: &P, gesture: &Gesture, cursor: Point, keep: bool)
    where
        P: Projection + ?Sized,
    {
        let start = gesture.start;
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return;
        };
        let graph = &mut sketch.graph;
        let rect = Rect::from_points(start, cursor);
        let hits = nodes_in_rect(graph, &sketch.world, projection, rect, graph.active_tube());

        for tube in 0..graph.len() {
            if !graph.in_scope(tube) {
                continue;
            }
            let Some(nodes) = gesture.tube_snapshot(graph, tube) else {
                continue;
            };
            for (index, before) in nodes.iter().enumerate() {
                let at = NodeRef::new(tube, index);
                let active = (keep && before.active) || hits.contains(&at);
                if let Some(node) = graph.node_mut(at) {
                    node.active = active;
                }
            }
        }
    }

    fn drag_to<P>(
        &mut self,
        projection: &P,
        gesture: &Gesture,
        cursor: Point,
        depth: DVec3,
        grab: Option<DVec3>,
        now: Duration,
    ) -> bool
    where
        P: Projection + ?Sized,
    {
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return false;
        };
        let graph = &mut sketch.graph;

        // Dragging an unselected node selects it alone.
        let auto_select = gesture
            .pressed
            .filter(|&at| !gesture.moved && graph.node(at).is_some_and(|node| !node.active));
        if let Some(at) = auto_select {
            graph.clear_all_active();
            if let Some(node) = graph.node_mut(at) {
                node.active = true;
            }
        }

        let (Some(grab), Some(pointer)) = (grab, projection.unproject(cursor, depth)) else {
            return false;
        };
        if self.drag_throttle.ready(now) {
            debug!("drag checkpoint");
            self.history.checkpoint();
        }

        let delta = pointer - grab;
        let world = sketch.world;
        let selected: Vec<NodeRef> = graph.scoped_selection().collect();
        for at in selected {
            let Some(before) = gesture
                .tube_snapshot(graph, at.tube)
                .and_then(|nodes| nodes.get(at.node))
            else {
                continue;
            };
            let location = world.to_local(world.to_world(before.location) + delta);
            if let Err(err) = graph.set_node_location(at, location, &mut self.scratch) {
                debug!("drag skipped {at:?}: {err}");
            }
        }
        self.resync();
        true
    }

    /// Handles a primary button release.
    ///
    /// A release without movement is a click:
    /// - with [`Modifiers::CTRL`] the pressed node's selection is toggled;
    /// - otherwise the pressed node becomes the only selected node in scope, and
    ///   clicking a node that was already selected makes its tube active;
    /// - clicking empty space deselects everything in scope, or clears the active
    ///   tube when nothing was selected.
    ///
    /// Returns `true` if the release was a click.
    pub fn pointer_up(&mut self, modifiers: Modifiers) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        if gesture.moved {
            return false;
        }
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return false;
        };
        let graph = &mut sketch.graph;

        match gesture.pressed {
            Some(at) if modifiers.contains(Modifiers::CTRL) => {
                if let Some(node) = graph.node_mut(at) {
                    node.active = !node.active;
                }
            }
            Some(at) => {
                let mut reselected = None;
                for tube in 0..graph.len() {
                    if !graph.in_scope(tube) {
                        continue;
                    }
                    let len = graph.tube(tube).map_or(0, Tube::len);
                    for index in 0..len {
                        let here = NodeRef::new(tube, index);
                        let Some(node) = graph.node_mut(here) else {
                            continue;
                        };
                        if here != at {
                            node.active = false;
                        } else if node.active {
                            reselected = Some(tube);
                        } else {
                            node.active = true;
                        }
                    }
                }
                if let Some(Err(err)) = reselected.map(|tube| graph.set_active_tube(Some(tube))) {
                    debug!("click activation skipped: {err}");
                }
            }
            None => {
                if !graph.clear_scoped_active() {
                    graph.clear_active_tube();
                }
            }
        }
        true
    }

    /// Abandons the gesture in progress. Changes already made stay.
    pub fn pointer_cancel(&mut self) {
        self.gesture = None;
    }

    /// Handles one wheel step.
    ///
    /// With [`Modifiers::ALT`] the insertion radius is stepped. Otherwise, when
    /// the cursor is over a selected node, every selected node in scope is
    /// resized by one step and its joints follow. Returns `true` if the step was
    /// used.
    ///
    /// `now` is a monotonic timestamp used to coalesce a burst of steps into one
    /// checkpoint.
    pub fn wheel<P>(
        &mut self,
        projection: &P,
        cursor: Point,
        modifiers: Modifiers,
        wheel: Wheel,
        now: Duration,
    ) -> bool
    where
        P: Projection + ?Sized,
    {
        if modifiers.contains(Modifiers::ALT) {
            self.adjust_insert_radius(wheel);
            return true;
        }
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return false;
        };
        let graph = &mut sketch.graph;
        let hovered = pick_node(graph, &sketch.world, projection, cursor, graph.active_tube());
        if !hovered
            .and_then(|at| graph.node(at))
            .is_some_and(|node| node.active)
        {
            return false;
        }
        if self.wheel_throttle.ready(now) {
            debug!("resize checkpoint");
            self.history.checkpoint();
        }

        // Step from the radii before the first write, so a selected node on a
        // joint with another selected node is stepped once.
        let radii: Vec<(NodeRef, f64)> = graph
            .scoped_selection()
            .filter_map(|at| Some((at, graph.node(at)?.radius)))
            .collect();
        for (at, radius) in radii {
            let radius = self.config.step_radius(radius, wheel);
            if let Err(err) = graph.set_node_radius(at, radius, &mut self.scratch) {
                debug!("resize skipped {at:?}: {err}");
            }
        }
        self.resync();
        true
    }

    /// Removes every selected node in scope, last to first. Returns how many.
    pub fn delete_selected(&mut self) -> usize {
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return 0;
        };
        let graph = &mut sketch.graph;
        let selected: Vec<NodeRef> = graph.scoped_selection().collect();
        if selected.is_empty() {
            return 0;
        }
        self.history.checkpoint();
        let mut removed = 0;
        for at in selected.into_iter().rev() {
            match graph.remove_node(at) {
                Ok(_) => removed += 1,
                Err(err) => debug!("delete skipped {at:?}: {err}"),
            }
        }
        self.resync();
        removed
    }

    /// Clears the active tube, or deselects everything when no tube is active.
    pub fn escape(&mut self) {
        self.gesture = None;
        let Some(sketch) = live_mut(&mut self.sketch) else {
            return;
        };
        if sketch.graph.active_tube().is_some() {
            sketch.graph.clear_active_tube();
        } else {
            sketch.graph.clear_all_active();
        }
    }

    /// Flattens the sketch for a skin modifier.
    #[must_use]
    pub fn skin_mesh(&self) -> Option<SkinMesh> {
        live(&self.sketch).map(|sketch| SkinMesh::from_graph(&sketch.graph))
    }

    /// Extracts an armature skeleton from the sketch.
    #[must_use]
    pub fn skeleton(&self) -> Option<Skeleton> {
        live(&self.sketch).map(|sketch| Skeleton::from_graph(&sketch.graph))
    }
}
