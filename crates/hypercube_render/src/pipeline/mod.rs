//! Rendering pipeline components
//!
//! A single render pipeline draws the projected edges as a line list.

pub mod types;
pub mod line_pipeline;

// Re-export types
pub use types::{LineUniforms, LineVertex, EDGE_VERTEX_COUNT};

// Re-export pipelines
pub use line_pipeline::{LinePipeline, perspective_matrix, look_at_matrix};
