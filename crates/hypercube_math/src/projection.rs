//! Perspective projection from 4D to 3D
//!
//! The eye sits on the W axis at `w = w_distance`, looking toward `-W`.
//! A point's x, y and z are scaled by `w_distance / (w_distance - w)`, so
//! points closer to the eye along W appear larger. This is the same scheme
//! as a pinhole 3D to 2D projection, one dimension up.
//!
//! The projection is undefined at `w == w_distance` and mirrors points with
//! `w > w_distance`. Callers must keep geometry in front of the eye. A
//! rotated unit tesseract stays within distance 1 of its center, so its `w`
//! never leaves `[-0.5, 1.5]`, well short of the default distance of 2.5.

use serde::{Deserialize, Serialize};

use crate::Vec4;

/// Default eye distance along the W axis
pub const DEFAULT_W_DISTANCE: f32 = 2.5;

/// 4D to 3D perspective projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveProjection {
    /// Position of the eye on the W axis
    pub w_distance: f32,
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        Self::new(DEFAULT_W_DISTANCE)
    }
}

impl PerspectiveProjection {
    pub const fn new(w_distance: f32) -> Self {
        Self { w_distance }
    }

    /// Whether a point at `w` lies strictly in front of the eye
    #[inline]
    pub fn is_safe(&self, w: f32) -> bool {
        w < self.w_distance
    }

    /// Scale applied to x, y and z of a point at `w`
    #[inline]
    pub fn scale_factor(&self, w: f32) -> f32 {
        debug_assert!(
            self.is_safe(w),
            "point at w={} is not in front of the projection eye at w={}",
            w,
            self.w_distance
        );
        self.w_distance / (self.w_distance - w)
    }

    /// Project a single point
    #[inline]
    pub fn project(&self, v: Vec4) -> [f32; 3] {
        let factor = self.scale_factor(v.w);
        [v.x * factor, v.y * factor, v.z * factor]
    }

    /// Project a fixed-size batch of points, preserving order
    pub fn project_all<const N: usize>(&self, points: &[Vec4; N]) -> [[f32; 3]; N] {
        std::array::from_fn(|i| self.project(points[i]))
    }
}
