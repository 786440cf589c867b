//! Orbit camera for viewing the projected hypercube
//!
//! The camera circles a fixed target with Z as the up axis. Its eye sits at
//! `target + distance * (cos(el) cos(az), cos(el) sin(az), sin(el))`.

use hypercube_input::OrbitControl;
use hypercube_math::mat4::{self, Mat4};

use crate::pipeline::{look_at_matrix, perspective_matrix};

/// Closest the camera may get to its target
pub const MIN_DISTANCE: f32 = 0.5;

/// Elevation stays just short of the poles so the up vector stays valid
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit camera around a fixed target
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: [f32; 3],
    pub distance: f32,
    /// Radians around the Z axis, measured from +X
    pub azimuth: f32,
    /// Radians above the XY plane
    pub elevation: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    home: Home,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Home {
    distance: f32,
    azimuth: f32,
    elevation: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new([0.625; 3], 6.0)
    }
}

impl OrbitCamera {
    /// Camera at `distance` from `target`, 45 degrees around and 30 degrees up
    pub fn new(target: [f32; 3], distance: f32) -> Self {
        let home = Home {
            distance: distance.max(MIN_DISTANCE),
            azimuth: 45f32.to_radians(),
            elevation: 30f32.to_radians(),
        };
        Self {
            target,
            distance: home.distance,
            azimuth: home.azimuth,
            elevation: home.elevation,
            fov_y: 60f32.to_radians(),
            near: 0.1,
            far: 100.0,
            home,
        }
    }

    /// Builder: set the starting angles in degrees
    pub fn with_angles(mut self, azimuth_deg: f32, elevation_deg: f32) -> Self {
        self.home.azimuth = azimuth_deg.to_radians();
        self.home.elevation = elevation_deg.to_radians().clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.azimuth = self.home.azimuth;
        self.elevation = self.home.elevation;
        self
    }

    /// Builder: set field of view (degrees) and clip planes
    pub fn with_lens(mut self, fov_deg: f32, near: f32, far: f32) -> Self {
        self.fov_y = fov_deg.to_radians();
        self.near = near;
        self.far = far;
        self
    }

    /// Eye position in world space
    pub fn eye(&self) -> [f32; 3] {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        [
            self.target[0] + self.distance * cos_el * cos_az,
            self.target[1] + self.distance * cos_el * sin_az,
            self.target[2] + self.distance * sin_el,
        ]
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at_matrix(self.eye(), self.target, [0.0, 0.0, 1.0])
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_matrix(self.fov_y, aspect, self.near, self.far)
    }

    /// Projection * view, ready for the line shader
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }

    /// Return to the starting distance and angles
    pub fn reset(&mut self) {
        self.distance = self.home.distance;
        self.azimuth = self.home.azimuth;
        self.elevation = self.home.elevation;
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth = (self.azimuth + delta_azimuth).rem_euclid(std::f32::consts::TAU);
        self.elevation = (self.elevation + delta_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    fn zoom(&mut self, delta_distance: f32) {
        let max = (self.far * 0.9).max(MIN_DISTANCE);
        self.distance = (self.distance + delta_distance).clamp(MIN_DISTANCE, max);
    }
}
