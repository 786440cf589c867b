//! Keyboard bindings for the rotation control panel
//!
//! Controls:
//! - 1-6: Select plane XY, XZ, XW, YZ, YW, ZW
//! - Left/Right: Nudge the selected plane's slider down/up
//! - Down/Up: Nudge by ten steps
//! - A: Toggle auto-rotation for the selected plane
//! - Backspace: Return the selected plane to rest (auto angle)
//! - Space: Pause/resume auto-rotation on every plane

use hypercube_core::{ControlPanel, RotationPlane, SliderMapping};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Edits a [`ControlPanel`] in response to key presses
pub struct ControlPanelController {
    selected: RotationPlane,
    mapping: SliderMapping,

    // Configuration
    pub slider_step: u32,
}

impl Default for ControlPanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanelController {
    pub fn new() -> Self {
        Self {
            selected: RotationPlane::XY,
            mapping: SliderMapping::default(),
            slider_step: 5,
        }
    }

    /// Currently selected plane
    pub fn selected(&self) -> RotationPlane {
        self.selected
    }

    pub fn mapping(&self) -> &SliderMapping {
        &self.mapping
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was handled.
    pub fn process_keyboard(
        &mut self,
        key: KeyCode,
        state: ElementState,
        panel: &mut ControlPanel,
    ) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        if let Some(plane) = Self::plane_for_key(key) {
            self.selected = plane;
            log::debug!("Selected plane {}", plane);
            return true;
        }

        let step = self.slider_step as i32;
        match key {
            KeyCode::ArrowRight => { self.nudge(panel, step); true }
            KeyCode::ArrowLeft => { self.nudge(panel, -step); true }
            KeyCode::ArrowUp => { self.nudge(panel, step * 10); true }
            KeyCode::ArrowDown => { self.nudge(panel, -step * 10); true }
            KeyCode::KeyA => {
                let enabled = panel.toggle_auto(self.selected);
                log::debug!("{} auto-rotation: {}", self.selected, if enabled { "ON" } else { "OFF" });
                true
            }
            KeyCode::Backspace => {
                panel.reset(self.selected);
                log::debug!("{} control back at rest", self.selected);
                true
            }
            KeyCode::Space => {
                let enable = !panel.any_auto();
                panel.set_all_auto(enable);
                log::debug!("Auto-rotation on all planes: {}", if enable { "ON" } else { "OFF" });
                true
            }
            _ => false,
        }
    }

    fn nudge(&self, panel: &mut ControlPanel, steps: i32) {
        let position = panel.nudge(self.selected, steps, &self.mapping);
        log::debug!(
            "{} slider at {} ({:.2} rad)",
            self.selected,
            position,
            self.mapping.angle_for(position)
        );
    }

    fn plane_for_key(key: KeyCode) -> Option<RotationPlane> {
        let index = match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => 0,
            KeyCode::Digit2 | KeyCode::Numpad2 => 1,
            KeyCode::Digit3 | KeyCode::Numpad3 => 2,
            KeyCode::Digit4 | KeyCode::Numpad4 => 3,
            KeyCode::Digit5 | KeyCode::Numpad5 => 4,
            KeyCode::Digit6 | KeyCode::Numpad6 => 5,
            _ => return None,
        };
        RotationPlane::from_index(index)
    }

    /// Builder: set the slider mapping
    pub fn with_mapping(mut self, mapping: SliderMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Builder: set slider positions moved per key press
    pub fn with_slider_step(mut self, step: u32) -> Self {
        self.slider_step = step;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_core::AngleSource;

    fn press(controller: &mut ControlPanelController, key: KeyCode, panel: &mut ControlPanel) -> bool {
        controller.process_keyboard(key, ElementState::Pressed, panel)
    }

    #[test]
    fn test_digit_keys_select_planes() {
        let mut controller = ControlPanelController::new();
        let mut panel = ControlPanel::default();

        assert!(press(&mut controller, KeyCode::Digit3, &mut panel));
        assert_eq!(controller.selected(), RotationPlane::XW);

        assert!(press(&mut controller, KeyCode::Numpad6, &mut panel));
        assert_eq!(controller.selected(), RotationPlane::ZW);
    }

    #[test]
    fn test_arrows_nudge_selected_plane() {
        let mut controller = ControlPanelController::new().with_slider_step(10);
        let mut panel = ControlPanel::default();

        press(&mut controller, KeyCode::Digit2, &mut panel);
        press(&mut controller, KeyCode::ArrowRight, &mut panel);
        assert_eq!(panel.control(RotationPlane::XZ).source, AngleSource::Manual(0.1));
        assert!(panel.control(RotationPlane::XY).is_at_rest());

        press(&mut controller, KeyCode::ArrowUp, &mut panel);
        assert_eq!(panel.slider_position(RotationPlane::XZ, controller.mapping()), 110);

        press(&mut controller, KeyCode::ArrowDown, &mut panel);
        press(&mut controller, KeyCode::ArrowLeft, &mut panel);
        assert!(panel.control(RotationPlane::XZ).is_at_rest());
    }

    #[test]
    fn test_toggle_auto_and_reset() {
        let mut controller = ControlPanelController::new();
        let mut panel = ControlPanel::default();

        press(&mut controller, KeyCode::KeyA, &mut panel);
        assert!(!panel.control(RotationPlane::XY).auto_advance);

        press(&mut controller, KeyCode::ArrowRight, &mut panel);
        assert!(!panel.control(RotationPlane::XY).is_at_rest());
        press(&mut controller, KeyCode::Backspace, &mut panel);
        assert!(panel.control(RotationPlane::XY).is_at_rest());
    }

    #[test]
    fn test_space_pauses_and_resumes_all() {
        let mut controller = ControlPanelController::new();
        let mut panel = ControlPanel::default();

        press(&mut controller, KeyCode::Space, &mut panel);
        assert!(!panel.any_auto());

        press(&mut controller, KeyCode::Space, &mut panel);
        assert!(panel.iter().all(|(_, c)| c.auto_advance));
    }

    #[test]
    fn test_release_and_unbound_keys_ignored() {
        let mut controller = ControlPanelController::new();
        let mut panel = ControlPanel::default();

        assert!(!controller.process_keyboard(KeyCode::KeyA, ElementState::Released, &mut panel));
        assert!(panel.control(RotationPlane::XY).auto_advance);
        assert!(!press(&mut controller, KeyCode::KeyZ, &mut panel));
    }
}
