// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object-to-world placement of a sketch.

use glam::{DMat4, DVec3};

/// The world matrix of a sketch object together with its inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    matrix: DMat4,
    inverse: DMat4,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl WorldTransform {
    /// The identity placement.
    pub const IDENTITY: Self = Self {
        matrix: DMat4::IDENTITY,
        inverse: DMat4::IDENTITY,
    };

    /// Wraps a world matrix. Returns `None` if it is not invertible.
    #[must_use]
    pub fn from_matrix(matrix: DMat4) -> Option<Self> {
        let det = matrix.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inverse = matrix.inverse();
        inverse.is_finite().then_some(Self { matrix, inverse })
    }

    /// A pure translation.
    #[must_use]
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            matrix: DMat4::from_translation(translation),
            inverse: DMat4::from_translation(-translation),
        }
    }

    /// Returns the world matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Returns the inverse world matrix.
    #[must_use]
    pub fn inverse(&self) -> DMat4 {
        self.inverse
    }

    /// Maps a point from the object's local space to world space.
    #[must_use]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.matrix.transform_point3(local)
    }

    /// Maps a world-space point into the object's local space.
    #[must_use]
    pub fn to_local(&self, world: DVec3) -> DVec3 {
        self.inverse.transform_point3(world)
    }

    /// Returns the world-space origin of the object.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// The smallest absolute scale factor among the three axes.
    ///
    /// Radii are stored in local units and scaled uniformly by this value; a
    /// non-uniformly scaled object is treated as if scaled by its smallest axis.
    #[must_use]
    pub fn uniform_scale(&self) -> f64 {
        let x = self.matrix.x_axis.truncate().length();
        let y = self.matrix.y_axis.truncate().length();
        let z = self.matrix.z_axis.truncate().length();
        x.min(y).min(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_takes_the_smallest_axis() {
        let world = WorldTransform::from_matrix(DMat4::from_scale(DVec3::new(2.0, -0.5, 3.0)))
            .unwrap();
        assert_eq!(world.uniform_scale(), 0.5);
        assert_eq!(WorldTransform::IDENTITY.uniform_scale(), 1.0);
    }

    #[test]
    fn local_and_world_round_trip() {
        let matrix = DMat4::from_scale_rotation_translation(
            DVec3::splat(2.0),
            glam::DQuat::from_rotation_z(0.5),
            DVec3::new(1.0, 2.0, 3.0),
        );
        let world = WorldTransform::from_matrix(matrix).unwrap();
        let p = DVec3::new(0.25, -1.0, 4.0);
        assert!(world.to_local(world.to_world(p)).distance(p) < 1e-12);
        assert_eq!(world.origin(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn singular_matrix_is_refused() {
        assert!(WorldTransform::from_matrix(DMat4::from_scale(DVec3::new(1.0, 0.0, 1.0))).is_none());
    }

    #[test]
    fn translation_inverse_is_exact() {
        let world = WorldTransform::from_translation(DVec3::new(5.0, 0.0, -1.0));
        assert_eq!(world.to_local(DVec3::new(5.0, 0.0, -1.0)), DVec3::ZERO);
    }
}
