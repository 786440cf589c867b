//! Input handling for the hypercube viewer
//!
//! Keyboard input edits the rotation control panel; mouse input orbits the
//! 3D view around the projected hypercube.

mod control_panel_controller;
mod view_controller;

pub use control_panel_controller::ControlPanelController;
pub use view_controller::{OrbitControl, ViewController};
