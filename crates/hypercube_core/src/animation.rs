//! Auto-rotation state
//!
//! Holds the six stored plane angles and their per-tick increments. Stored
//! angles always lie in `[0, 2π)`.

use std::f32::consts::TAU;

use hypercube_math::{PlaneAngles, RotationPlane};

use crate::controls::ControlPanel;

/// Per-tick increments in radians, in plane order XY, XZ, XW, YZ, YW, ZW
pub const DEFAULT_SPEEDS: PlaneAngles = PlaneAngles([0.01, 0.008, 0.012, 0.007, 0.009, 0.011]);

/// Wrap an angle into `[0, 2π)`
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Stored angles that advance by a fixed increment each tick
#[derive(Clone, Debug, PartialEq)]
pub struct AutoRotation {
    angles: PlaneAngles,
    speeds: PlaneAngles,
}

impl Default for AutoRotation {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoRotation {
    /// All angles at zero with the default speeds
    pub fn new() -> Self {
        Self::with_speeds(DEFAULT_SPEEDS)
    }

    pub fn with_speeds(speeds: PlaneAngles) -> Self {
        Self {
            angles: PlaneAngles::ZERO,
            speeds,
        }
    }

    /// Advance every plane whose auto flag is set
    pub fn advance(&mut self, panel: &ControlPanel) {
        for (plane, control) in panel.iter() {
            if control.auto_advance {
                self.advance_plane(plane);
            }
        }
    }

    /// Advance a single plane by its increment
    pub fn advance_plane(&mut self, plane: RotationPlane) {
        self.angles[plane] = wrap_angle(self.angles[plane] + self.speeds[plane]);
    }

    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        self.angles[plane]
    }

    #[inline]
    pub fn angles(&self) -> &PlaneAngles {
        &self.angles
    }

    /// Overwrite a stored angle (wrapped into range)
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f32) {
        self.angles[plane] = wrap_angle(angle);
    }

    #[inline]
    pub fn speeds(&self) -> &PlaneAngles {
        &self.speeds
    }

    /// Zero all stored angles, keeping speeds
    pub fn reset(&mut self) {
        self.angles = PlaneAngles::ZERO;
    }
}
