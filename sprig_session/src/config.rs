// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for an editing session.

use core::time::Duration;

use crate::gesture::Wheel;

/// Session tunables: radius stepping and bounds, and checkpoint coalescing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Radius change per wheel step.
    pub radius_step: f64,
    /// Smallest radius a wheel step produces.
    pub radius_min: f64,
    /// Largest radius a wheel step produces.
    pub radius_max: f64,
    /// Insertion radius at session start.
    pub default_insert_radius: f64,
    /// Idle time that ends a burst of wheel or drag input.
    pub checkpoint_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius_step: 0.02,
            radius_min: 0.02,
            radius_max: 10.0,
            default_insert_radius: 0.5,
            checkpoint_interval: Duration::from_millis(300),
        }
    }
}

impl SessionConfig {
    /// Returns `radius` moved one step in the direction of `wheel`.
    ///
    /// Growing is capped at `radius_max` and shrinking at `radius_min`. A radius
    /// already outside the bounds is only pulled towards them.
    #[must_use]
    pub fn step_radius(&self, radius: f64, wheel: Wheel) -> f64 {
        match wheel {
            Wheel::Up => (radius + self.radius_step).min(self.radius_max),
            Wheel::Down => (radius - self.radius_step).max(self.radius_min),
        }
    }
}
