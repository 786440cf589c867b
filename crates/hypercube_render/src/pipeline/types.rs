//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use hypercube_math::EDGE_COUNT;

/// One endpoint of a projected edge
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

impl Default for LineVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            color: [1.0; 4],
        }
    }
}

/// Uniforms for the line shader
/// Layout: 64 bytes (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// Projection * view, column-major
    pub view_projection: [[f32; 4]; 4],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            view_projection: hypercube_math::mat4::IDENTITY,
        }
    }
}

/// Vertices needed to draw every tesseract edge as a line list
pub const EDGE_VERTEX_COUNT: usize = EDGE_COUNT * 2;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_line_vertex_size() {
        // 3 floats position + 4 floats color = 28 bytes
        assert_eq!(size_of::<LineVertex>(), 28);
    }

    #[test]
    fn test_line_uniforms_size() {
        assert_eq!(size_of::<LineUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
        assert_eq!(std::mem::align_of::<LineUniforms>(), 4);
    }

    #[test]
    fn test_edge_vertex_count() {
        assert_eq!(EDGE_VERTEX_COUNT, 64);
    }
}
