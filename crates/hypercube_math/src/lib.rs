//! 4D Mathematics Library
//!
//! This crate provides the geometry behind the hypercube viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 matrix for transformations
//! - [`RotationPlane`] - One of the six coordinate planes of 4D space
//! - [`PlaneAngles`] - One angle per rotation plane
//!
//! ## Geometry
//!
//! - [`Tesseract4D`] - The 16 vertices and 32 edges of a 4D hypercube
//! - [`PerspectiveProjection`] - 4D to 3D perspective divide along W

mod vec4;
pub mod mat4;
pub mod rotation;
pub mod tesseract;
pub mod projection;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use rotation::{compose_rotation, PlaneAngles, RotationPlane};
pub use tesseract::{Tesseract4D, EDGES, EDGE_COUNT, VERTEX_COUNT};
pub use projection::{PerspectiveProjection, DEFAULT_W_DISTANCE};
