// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Representation settings of a sketch.

use core::ops::RangeInclusive;

use glam::DVec3;

/// Allowed sphere segment counts.
pub const SEGMENTS_RANGE: RangeInclusive<u32> = 2..=12;
/// Allowed subdivision levels for the skin representation.
pub const SUBDIVISION_RANGE: RangeInclusive<u32> = 0..=6;

/// How the tube network is turned into geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Spheres per node, convex hulls per segment, joined per tube.
    #[default]
    GeometryNodes,
    /// A skin mesh run through skin and subdivision modifiers.
    Skin,
}

/// A coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Scale that mirrors geometry across the plane orthogonal to this axis.
    #[must_use]
    pub fn flip_scale(self) -> DVec3 {
        match self {
            Self::X => DVec3::new(-1.0, 1.0, 1.0),
            Self::Y => DVec3::new(1.0, -1.0, 1.0),
            Self::Z => DVec3::new(1.0, 1.0, -1.0),
        }
    }
}

/// Mirror modifier settings.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MirrorSettings {
    /// Mirror along X, Y, Z.
    pub axes: [bool; 3],
    /// Bisect along X, Y, Z.
    pub bisect: [bool; 3],
    /// Merge vertices on the mirror plane.
    pub merge: bool,
    /// Distance under which mirrored vertices merge.
    pub merge_threshold: f64,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            axes: [false; 3],
            bisect: [false; 3],
            merge: false,
            merge_threshold: 0.001,
        }
    }
}

impl MirrorSettings {
    /// Returns `true` if mirroring is on for any axis.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.axes.iter().any(|&a| a)
    }
}

/// Settings that shape the generated graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Representation method.
    pub method: Method,
    /// Axis for procedural symmetry in the geometry representation.
    pub symmetry: Option<Axis>,
    /// Mirror modifier settings, applied with either method.
    pub mirror: MirrorSettings,
    segments: u32,
    subdivision_levels: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            method: Method::default(),
            symmetry: None,
            mirror: MirrorSettings::default(),
            segments: 4,
            subdivision_levels: 1,
        }
    }
}

impl Settings {
    /// Returns the sphere segment count.
    #[must_use]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Sets the sphere segment count, clamped to [`SEGMENTS_RANGE`].
    pub fn set_segments(&mut self, segments: u32) {
        self.segments = segments.clamp(*SEGMENTS_RANGE.start(), *SEGMENTS_RANGE.end());
    }

    /// Returns the subdivision level used by the skin representation.
    #[must_use]
    pub fn subdivision_levels(&self) -> u32 {
        self.subdivision_levels
    }

    /// Sets the subdivision level, clamped to [`SUBDIVISION_RANGE`].
    pub fn set_subdivision_levels(&mut self, levels: u32) {
        self.subdivision_levels =
            levels.clamp(*SUBDIVISION_RANGE.start(), *SUBDIVISION_RANGE.end());
    }

    /// Builder form of [`set_segments`](Self::set_segments).
    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.set_segments(segments);
        self
    }

    /// Builder form of setting [`method`](Self::method).
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Builder form of setting [`symmetry`](Self::symmetry).
    #[must_use]
    pub fn with_symmetry(mut self, symmetry: Option<Axis>) -> Self {
        self.symmetry = symmetry;
        self
    }
}
