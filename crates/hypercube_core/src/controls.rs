//! User-facing rotation controls
//!
//! Each rotation plane has one [`PlaneControl`]. It says whether the plane's
//! stored angle keeps advancing on its own and where the angle used for
//! drawing comes from.
//!
//! Slider-style front ends use [`SliderMapping`]: position `p` in
//! `[0, max_position]` stands for angle `p / scale`. Position 0 is the rest
//! position and hands the plane back to its auto angle. Use
//! [`ControlPanel::set_manual`] for a real zero rotation.

use hypercube_math::{PlaneAngles, RotationPlane};
use serde::{Deserialize, Serialize};

/// Where a plane's effective angle comes from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AngleSource {
    /// Control at rest: use the stored auto angle
    Auto,
    /// Use this angle in radians
    Manual(f32),
}

/// Control state for a single rotation plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneControl {
    /// Advance the stored angle every tick
    pub auto_advance: bool,
    pub source: AngleSource,
}

impl PlaneControl {
    pub const fn new(auto_advance: bool) -> Self {
        Self {
            auto_advance,
            source: AngleSource::Auto,
        }
    }

    /// Build a control from a slider position and an auto checkbox
    pub fn from_slider(position: u32, auto_advance: bool, mapping: &SliderMapping) -> Self {
        Self {
            auto_advance,
            source: mapping.source_for(position),
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.source == AngleSource::Auto
    }

    /// Angle to draw with, given the plane's stored auto angle
    #[inline]
    pub fn effective_angle(&self, stored: f32) -> f32 {
        match self.source {
            AngleSource::Auto => stored,
            AngleSource::Manual(angle) => angle,
        }
    }
}

impl Default for PlaneControl {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Linear mapping between integer slider positions and angles
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderMapping {
    /// Largest slider position (628 covers 0 to 2π at scale 100)
    pub max_position: u32,
    /// Positions per radian
    pub scale: f32,
}

impl Default for SliderMapping {
    fn default() -> Self {
        Self {
            max_position: 628,
            scale: 100.0,
        }
    }
}

impl SliderMapping {
    #[inline]
    pub fn angle_for(&self, position: u32) -> f32 {
        position as f32 / self.scale
    }

    /// Nearest slider position for an angle, clamped to the slider range
    pub fn position_for(&self, angle: f32) -> u32 {
        let position = (angle * self.scale).round();
        if position <= 0.0 {
            0
        } else {
            (position as u32).min(self.max_position)
        }
    }

    /// Angle source for a slider position (0 is the rest position)
    pub fn source_for(&self, position: u32) -> AngleSource {
        if position == 0 {
            AngleSource::Auto
        } else {
            AngleSource::Manual(self.angle_for(position.min(self.max_position)))
        }
    }
}

/// Controls for all six rotation planes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    controls: [PlaneControl; 6],
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ControlPanel {
    /// All planes at rest with the given auto flag
    pub fn new(auto_advance: bool) -> Self {
        Self {
            controls: [PlaneControl::new(auto_advance); 6],
        }
    }

    /// Build from six slider positions and six auto checkboxes, in plane order
    pub fn from_sliders(positions: [u32; 6], autos: [bool; 6], mapping: &SliderMapping) -> Self {
        Self {
            controls: std::array::from_fn(|i| {
                PlaneControl::from_slider(positions[i], autos[i], mapping)
            }),
        }
    }

    #[inline]
    pub fn control(&self, plane: RotationPlane) -> &PlaneControl {
        &self.controls[plane.index()]
    }

    #[inline]
    pub fn control_mut(&mut self, plane: RotationPlane) -> &mut PlaneControl {
        &mut self.controls[plane.index()]
    }

    /// Iterate `(plane, control)` pairs in composition order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, &PlaneControl)> + '_ {
        RotationPlane::ALL.iter().map(move |&p| (p, self.control(p)))
    }

    /// Resolve the angle to draw with for every plane
    pub fn effective_angles(&self, stored: &PlaneAngles) -> PlaneAngles {
        let mut angles = PlaneAngles::ZERO;
        for (plane, control) in self.iter() {
            angles[plane] = control.effective_angle(stored[plane]);
        }
        angles
    }

    pub fn set_manual(&mut self, plane: RotationPlane, angle: f32) {
        self.control_mut(plane).source = AngleSource::Manual(angle);
    }

    /// Return a plane's control to rest
    pub fn reset(&mut self, plane: RotationPlane) {
        self.control_mut(plane).source = AngleSource::Auto;
    }

    /// Return every control to rest, leaving auto flags alone
    pub fn reset_all(&mut self) {
        for control in &mut self.controls {
            control.source = AngleSource::Auto;
        }
    }

    /// Flip a plane's auto flag, returning the new value
    pub fn toggle_auto(&mut self, plane: RotationPlane) -> bool {
        let control = self.control_mut(plane);
        control.auto_advance = !control.auto_advance;
        control.auto_advance
    }

    pub fn set_all_auto(&mut self, enabled: bool) {
        for control in &mut self.controls {
            control.auto_advance = enabled;
        }
    }

    pub fn any_auto(&self) -> bool {
        self.controls.iter().any(|c| c.auto_advance)
    }

    /// Slider position currently represented by a plane's control
    pub fn slider_position(&self, plane: RotationPlane, mapping: &SliderMapping) -> u32 {
        match self.control(plane).source {
            AngleSource::Auto => 0,
            AngleSource::Manual(angle) => mapping.position_for(angle),
        }
    }

    /// Move a plane's slider by `steps` positions, clamped to the slider range
    ///
    /// Landing on position 0 returns the plane to rest. Returns the new position.
    pub fn nudge(&mut self, plane: RotationPlane, steps: i32, mapping: &SliderMapping) -> u32 {
        let current = self.slider_position(plane, mapping) as i64;
        let target = (current + steps as i64).clamp(0, mapping.max_position as i64) as u32;
        self.control_mut(plane).source = mapping.source_for(target);
        target
    }
}
