//! Hypercube4D - 4D hypercube rotation and projection viewer
//!
//! The application shell: configuration, input mapping and the systems
//! that drive the window, the animation and the GPU.

pub mod config;
pub mod input;
pub mod systems;
