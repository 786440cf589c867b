//! Turns a projected frame into line-list vertices
//!
//! Each edge contributes two vertices, in edge-list order. With a non-zero
//! `w_color_strength`, edges are tinted by the mean rotated `w` of their
//! endpoints: warm below the tesseract's center, cool above it.

use hypercube_core::ProjectedFrame;
use hypercube_math::{EDGES, Vec4};

use crate::pipeline::{LineVertex, EDGE_VERTEX_COUNT};

/// Tint for edges far below the center in `w`
const NEAR_W_TINT: [f32; 3] = [1.0, 0.35, 0.2];
/// Tint for edges far above the center in `w`
const FAR_W_TINT: [f32; 3] = [0.3, 0.55, 1.0];

/// Line vertices for one frame
#[derive(Clone, Debug)]
pub struct EdgeGeometry {
    pub vertices: Vec<LineVertex>,
}

impl EdgeGeometry {
    /// Build vertices for every edge of `frame`
    ///
    /// `center_w` is the tesseract center's `w`, and `w_range` the half-extent
    /// of rotated `w` around it; both come from the tesseract size.
    pub fn from_frame(
        frame: &ProjectedFrame,
        base_color: [f32; 4],
        w_color_strength: f32,
        center_w: f32,
        w_range: f32,
    ) -> Self {
        let rotated = frame.rotated();
        let mut vertices = Vec::with_capacity(EDGE_VERTEX_COUNT);

        for (segment, &(a, b)) in frame.segments().iter().zip(EDGES.iter()) {
            let color = w_tinted_color(
                base_color,
                edge_mean_w(rotated[a], rotated[b]),
                center_w,
                w_range,
                w_color_strength,
            );
            vertices.push(LineVertex::new(segment.start, color));
            vertices.push(LineVertex::new(segment.end, color));
        }

        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

fn edge_mean_w(a: Vec4, b: Vec4) -> f32 {
    (a.w + b.w) * 0.5
}

/// Blend `base` toward the near or far tint by how far `w` sits from center
pub fn w_tinted_color(base: [f32; 4], w: f32, center_w: f32, w_range: f32, strength: f32) -> [f32; 4] {
    if strength <= 0.0 || w_range <= 0.0 {
        return base;
    }

    let t = ((w - center_w) / w_range).clamp(-1.0, 1.0);
    let tint = if t < 0.0 { NEAR_W_TINT } else { FAR_W_TINT };
    let amount = t.abs() * strength.min(1.0);

    [
        base[0] + (tint[0] - base[0]) * amount,
        base[1] + (tint[1] - base[1]) * amount,
        base[2] + (tint[2] - base[2]) * amount,
        base[3],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_core::{AutoRotation, ControlPanel, FrameUpdater, PerspectiveProjection};

    const EPSILON: f32 = 0.0001;
    const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn frame() -> ProjectedFrame {
        let mut updater = FrameUpdater::new(AutoRotation::new(), PerspectiveProjection::default());
        updater.tick(&ControlPanel::default())
    }

    #[test]
    fn test_two_vertices_per_edge() {
        let geometry = EdgeGeometry::from_frame(&frame(), YELLOW, 0.0, 0.5, 1.0);
        assert_eq!(geometry.vertex_count(), EDGE_VERTEX_COUNT);
    }

    #[test]
    fn test_vertices_follow_segments() {
        let frame = frame();
        let geometry = EdgeGeometry::from_frame(&frame, YELLOW, 0.0, 0.5, 1.0);
        for (i, segment) in frame.segments().iter().enumerate() {
            assert_eq!(geometry.vertices[2 * i].position, segment.start);
            assert_eq!(geometry.vertices[2 * i + 1].position, segment.end);
        }
    }

    #[test]
    fn test_zero_strength_keeps_base_color() {
        let geometry = EdgeGeometry::from_frame(&frame(), YELLOW, 0.0, 0.5, 1.0);
        assert!(geometry.vertices.iter().all(|v| v.color == YELLOW));
    }

    #[test]
    fn test_tint_at_center_is_base() {
        let c = w_tinted_color(YELLOW, 0.5, 0.5, 1.0, 1.0);
        assert_eq!(c, YELLOW);
    }

    #[test]
    fn test_tint_extremes() {
        let near = w_tinted_color(YELLOW, -0.5, 0.5, 1.0, 1.0);
        let far = w_tinted_color(YELLOW, 1.5, 0.5, 1.0, 1.0);
        for i in 0..3 {
            assert!(approx_eq(near[i], NEAR_W_TINT[i]));
            assert!(approx_eq(far[i], FAR_W_TINT[i]));
        }
        // Alpha is untouched
        assert_eq!(near[3], 1.0);
    }

    #[test]
    fn test_tint_half_strength() {
        let c = w_tinted_color(YELLOW, 1.5, 0.5, 1.0, 0.5);
        assert!(approx_eq(c[2], 0.5 * FAR_W_TINT[2]));
    }
}
