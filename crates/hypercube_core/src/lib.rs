//! Core animation types for the hypercube viewer
//!
//! This crate turns control input into per-tick geometry:
//!
//! - [`ControlPanel`] - Per-plane auto flags and angle sources
//! - [`SliderMapping`] - Integer slider positions to angles
//! - [`AutoRotation`] - Stored angles advancing at fixed speeds
//! - [`FrameUpdater`] - Rotates and projects the tesseract each tick
//! - [`ProjectedFrame`] - The 16 points and 32 segments of one tick
//! - [`FrameTicker`] - Fixed-rate tick scheduling

mod controls;
mod animation;
mod frame;
mod ticker;

pub use controls::{AngleSource, ControlPanel, PlaneControl, SliderMapping};
pub use animation::{wrap_angle, AutoRotation, DEFAULT_SPEEDS};
pub use frame::{EdgeSegment, FrameUpdater, ProjectedFrame};
pub use ticker::{FrameTicker, DEFAULT_MAX_CATCH_UP, DEFAULT_TICK_INTERVAL};

// Re-export commonly used types from hypercube_math for convenience
pub use hypercube_math::{PerspectiveProjection, PlaneAngles, RotationPlane, Tesseract4D, Vec4};
