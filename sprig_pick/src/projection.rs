// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport projection: the camera collaborator used by picking and editing.

use glam::{DMat4, DVec3};
use kurbo::{Point, Rect};

/// Smallest `|w|` accepted before a projected point is treated as degenerate.
const W_EPSILON: f64 = 1.0e-9;

/// Conversions between viewport pixels and world space.
///
/// Implementations return `None` for degenerate input (a point on the camera
/// plane, an empty viewport, a non-finite result). Callers treat `None` as "no
/// effect" and skip the candidate.
pub trait Projection {
    /// Returns the world point under `cursor` on the view plane through `depth_reference`.
    fn unproject(&self, cursor: Point, depth_reference: DVec3) -> Option<DVec3>;

    /// Projects a world point to clip space, without the perspective divide.
    ///
    /// The `z` component orders points by depth; smaller is closer to the viewer.
    fn project_to_clip(&self, world: DVec3) -> Option<DVec3>;

    /// Projects a world point to viewport pixels (y down). Points behind the
    /// camera have no viewport position.
    fn project_to_view(&self, world: DVec3) -> Option<Point>;
}

/// A [`Projection`] backed by a view-projection matrix and a viewport rectangle.
///
/// The matrix maps world space to clip space with NDC depth in `0..=1`, as
/// produced by Glam's `*_rh` projection constructors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProjection {
    view_proj: DMat4,
    inverse: DMat4,
    viewport: Rect,
}

impl ViewProjection {
    /// Creates a projection from a view-projection matrix and a viewport in pixels.
    ///
    /// Returns `None` if the matrix is not invertible or the viewport is empty.
    #[must_use]
    pub fn new(view_proj: DMat4, viewport: Rect) -> Option<Self> {
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return None;
        }
        let det = view_proj.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inverse = view_proj.inverse();
        inverse.is_finite().then_some(Self {
            view_proj,
            inverse,
            viewport,
        })
    }

    /// Creates a perspective camera at `eye` looking at `target`.
    ///
    /// `fov_y` is the vertical field of view in radians; the aspect ratio comes
    /// from the viewport.
    #[must_use]
    pub fn perspective(
        eye: DVec3,
        target: DVec3,
        up: DVec3,
        fov_y: f64,
        near: f64,
        far: f64,
        viewport: Rect,
    ) -> Option<Self> {
        if viewport.height() <= 0.0 || near <= 0.0 || far <= near {
            return None;
        }
        let view = DMat4::look_at_rh(eye, target, up);
        let proj = DMat4::perspective_rh(fov_y, viewport.width() / viewport.height(), near, far);
        Self::new(proj * view, viewport)
    }

    /// Returns the view-projection matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.view_proj
    }

    /// Returns the viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    fn cursor_to_ndc(&self, cursor: Point) -> (f64, f64) {
        let rect = self.viewport;
        let x = ((cursor.x - rect.x0) / rect.width()) * 2.0 - 1.0;
        let y = 1.0 - ((cursor.y - rect.y0) / rect.height()) * 2.0;
        (x, y)
    }
}

impl Projection for ViewProjection {
    fn unproject(&self, cursor: Point, depth_reference: DVec3) -> Option<DVec3> {
        let clip = self.view_proj * depth_reference.extend(1.0);
        if clip.w.abs() <= W_EPSILON {
            return None;
        }
        let depth = clip.z / clip.w;
        let (x, y) = self.cursor_to_ndc(cursor);
        let world = self.inverse.project_point3(DVec3::new(x, y, depth));
        world.is_finite().then_some(world)
    }

    fn project_to_clip(&self, world: DVec3) -> Option<DVec3> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w.abs() <= W_EPSILON || !clip.is_finite() {
            return None;
        }
        Some(clip.truncate())
    }

    fn project_to_view(&self, world: DVec3) -> Option<Point> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= W_EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !ndc.is_finite() {
            return None;
        }
        let rect = self.viewport;
        let x = rect.x0 + (ndc.x * 0.5 + 0.5) * rect.width();
        let y = rect.y0 + (0.5 - ndc.y * 0.5) * rect.height();
        Some(Point::new(x, y))
    }
}
