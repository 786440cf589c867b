//! Hypercube Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the projected
//! tesseract as a wireframe.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - 3D orbit camera around the projected model
//! - [`pipeline::LinePipeline`] - Line-list rendering of the 32 edges
//! - [`edge_geometry::EdgeGeometry`] - Converts a projected frame to GPU vertices

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod edge_geometry;

pub use camera::OrbitCamera;
pub use context::{ContextError, RenderContext};
pub use edge_geometry::EdgeGeometry;
pub use pipeline::{LinePipeline, LineUniforms, LineVertex};
