//! Mouse orbit controls for the 3D view
//!
//! Controls:
//! - Left mouse drag: Orbit around the model
//! - Scroll wheel: Zoom in/out

use winit::event::{ElementState, MouseButton};

/// Turns mouse drags and scrolls into orbit camera motion
pub struct ViewController {
    // Mouse state
    dragging: bool,
    pending_dx: f32,
    pending_dy: f32,
    pending_zoom: f32,

    // Configuration
    pub orbit_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_zoom: 0.0,

            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process cursor movement (only counts while dragging)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging {
            self.pending_dx += delta_x as f32;
            self.pending_dy += delta_y as f32;
        }
    }

    /// Process scroll wheel, in lines (positive scrolls away from the user)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_zoom += lines;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply accumulated input to the camera and clear it
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C) {
        if self.pending_dx != 0.0 || self.pending_dy != 0.0 {
            // Dragging right spins the model right, dragging down tilts it toward the viewer
            camera.orbit(
                -self.pending_dx * self.orbit_sensitivity,
                self.pending_dy * self.orbit_sensitivity,
            );
        }
        if self.pending_zoom != 0.0 {
            camera.zoom(-self.pending_zoom * self.zoom_sensitivity);
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        self.pending_zoom = 0.0;
    }

    /// Builder: set orbit sensitivity (radians per pixel)
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom sensitivity (distance per scroll line)
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Rotate around the target by azimuth/elevation deltas (radians)
    fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32);
    /// Move toward (negative) or away from (positive) the target
    fn zoom(&mut self, delta_distance: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingCamera {
        azimuth: f32,
        elevation: f32,
        distance: f32,
        calls: usize,
    }

    impl OrbitControl for RecordingCamera {
        fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
            self.azimuth += delta_azimuth;
            self.elevation += delta_elevation;
            self.calls += 1;
        }

        fn zoom(&mut self, delta_distance: f32) {
            self.distance += delta_distance;
            self.calls += 1;
        }
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut controller = ViewController::new();
        let mut camera = RecordingCamera::default();
        controller.process_mouse_motion(100.0, 50.0);
        controller.update(&mut camera);
        assert_eq!(camera.calls, 0);
    }

    #[test]
    fn test_drag_orbits() {
        let mut controller = ViewController::new().with_orbit_sensitivity(0.01);
        let mut camera = RecordingCamera::default();

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(controller.is_dragging());
        controller.process_mouse_motion(10.0, -20.0);
        controller.update(&mut camera);

        assert!((camera.azimuth - (-0.1)).abs() < 1e-6);
        assert!((camera.elevation - (-0.2)).abs() < 1e-6);

        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        controller.process_mouse_motion(10.0, 10.0);
        controller.update(&mut camera);
        assert_eq!(camera.calls, 1);
    }

    #[test]
    fn test_scroll_zooms_in() {
        let mut controller = ViewController::new().with_zoom_sensitivity(1.0);
        let mut camera = RecordingCamera::default();
        controller.process_scroll(2.0);
        controller.update(&mut camera);
        assert_eq!(camera.distance, -2.0);

        // Pending input is consumed
        controller.update(&mut camera);
        assert_eq!(camera.distance, -2.0);
    }
}
