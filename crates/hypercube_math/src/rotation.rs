//! Rotation planes of 4D space and their composition
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! The viewer composes one elementary rotation per plane, always in the order
//! of [`RotationPlane::ALL`]. 4D rotations do not commute, so this order
//! determines what the animation looks like and must stay fixed.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::mat4::{self, Mat4, IDENTITY};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - rotates X toward Y
    XY,
    /// XZ plane - rotates X toward Z
    XZ,
    /// XW plane - rotates X toward W
    XW,
    /// YZ plane - rotates Y toward Z
    YZ,
    /// YW plane - rotates Y toward W
    YW,
    /// ZW plane - rotates Z toward W
    ZW,
}

impl RotationPlane {
    /// All planes in composition order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices spanning the plane (0=X, 1=Y, 2=Z, 3=W)
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Position of the plane in [`RotationPlane::ALL`]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Plane for an index into [`RotationPlane::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }

    /// Elementary rotation matrix for this plane
    pub fn matrix(self, angle: f32) -> Mat4 {
        let (p1, p2) = self.axes();
        mat4::plane_rotation(angle, p1, p2)
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One angle (radians) per rotation plane, indexed by [`RotationPlane`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngles(pub [f32; 6]);

impl PlaneAngles {
    pub const ZERO: Self = Self([0.0; 6]);

    /// Iterate `(plane, angle)` pairs in composition order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f32)> + '_ {
        RotationPlane::ALL.iter().map(move |&p| (p, self[p]))
    }

    /// Same angles with every entry negated
    pub fn negated(&self) -> Self {
        Self(self.0.map(|a| -a))
    }
}

impl Index<RotationPlane> for PlaneAngles {
    type Output = f32;

    fn index(&self, plane: RotationPlane) -> &f32 {
        &self.0[plane.index()]
    }
}

impl IndexMut<RotationPlane> for PlaneAngles {
    fn index_mut(&mut self, plane: RotationPlane) -> &mut f32 {
        &mut self.0[plane.index()]
    }
}

/// Compose the six plane rotations into a single matrix
///
/// Returns `R_xy * R_xz * R_xw * R_yz * R_yw * R_zw`. Applied to a column
/// vector, the ZW rotation acts first and the XY rotation last.
pub fn compose_rotation(angles: &PlaneAngles) -> Mat4 {
    angles
        .iter()
        .fold(IDENTITY, |acc, (plane, angle)| mat4::mul(acc, plane.matrix(angle)))
}
