//! Per-tick frame update
//!
//! [`FrameUpdater`] owns the tesseract, the auto-rotation state and the
//! projection. Each [`FrameUpdater::tick`]:
//!
//! 1. advances the stored angle of every plane whose auto flag is set
//! 2. resolves each plane's effective angle from its control
//! 3. composes the six plane rotations and applies them about the center
//! 4. projects the 16 rotated vertices to 3D
//! 5. emits one segment per edge, in edge-list order
//!
//! The resulting [`ProjectedFrame`] is rebuilt from scratch every tick.

use hypercube_math::{
    compose_rotation,
    mat4::{self, Mat4},
    PerspectiveProjection, PlaneAngles, Tesseract4D, Vec4, EDGE_COUNT, VERTEX_COUNT,
};

use crate::animation::AutoRotation;
use crate::controls::ControlPanel;

/// One projected edge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

/// Geometry produced by a single tick
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFrame {
    angles: PlaneAngles,
    rotation: Mat4,
    rotated: [Vec4; VERTEX_COUNT],
    points: [[f32; 3]; VERTEX_COUNT],
    segments: [EdgeSegment; EDGE_COUNT],
}

impl ProjectedFrame {
    /// Effective angles the frame was built from
    #[inline]
    pub fn angles(&self) -> &PlaneAngles {
        &self.angles
    }

    /// Composed rotation matrix
    #[inline]
    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }

    /// Rotated 4D vertices before projection
    #[inline]
    pub fn rotated(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.rotated
    }

    /// Projected 3D vertices, in vertex order
    #[inline]
    pub fn points(&self) -> &[[f32; 3]; VERTEX_COUNT] {
        &self.points
    }

    /// Projected edges, in edge-list order
    #[inline]
    pub fn segments(&self) -> &[EdgeSegment; EDGE_COUNT] {
        &self.segments
    }
}

/// Drives the tesseract animation one tick at a time
pub struct FrameUpdater {
    tesseract: Tesseract4D,
    auto: AutoRotation,
    projection: PerspectiveProjection,
    tick_count: u64,
}

impl FrameUpdater {
    /// Create an updater for the unit tesseract
    pub fn new(auto: AutoRotation, projection: PerspectiveProjection) -> Self {
        Self {
            tesseract: Tesseract4D::unit(),
            auto,
            projection,
            tick_count: 0,
        }
    }

    /// Builder: replace the tesseract
    pub fn with_tesseract(mut self, tesseract: Tesseract4D) -> Self {
        self.tesseract = tesseract;
        self
    }

    /// Advance one tick and build the frame for it
    pub fn tick(&mut self, panel: &ControlPanel) -> ProjectedFrame {
        self.auto.advance(panel);
        self.tick_count += 1;

        let angles = self.effective_angles(panel);
        log::trace!("tick {}: effective angles {:?}", self.tick_count, angles.0);

        self.project_with(&angles)
    }

    /// Angle to draw with for each plane, without advancing anything
    pub fn effective_angles(&self, panel: &ControlPanel) -> PlaneAngles {
        panel.effective_angles(self.auto.angles())
    }

    /// Rotate about the center by `angles`, project, and collect edges
    pub fn project_with(&self, angles: &PlaneAngles) -> ProjectedFrame {
        let rotation = compose_rotation(angles);
        let center = self.tesseract.center();

        let vertices = self.tesseract.vertices();
        let rotated: [Vec4; VERTEX_COUNT] =
            std::array::from_fn(|i| mat4::rotate_about(rotation, vertices[i], center));
        let points = self.projection.project_all(&rotated);

        let edges = self.tesseract.edges();
        let segments = std::array::from_fn(|i| {
            let (a, b) = edges[i];
            EdgeSegment {
                start: points[a],
                end: points[b],
            }
        });

        ProjectedFrame {
            angles: *angles,
            rotation,
            rotated,
            points,
            segments,
        }
    }

    /// Zero the stored angles and the tick counter
    pub fn reset(&mut self) {
        self.auto.reset();
        self.tick_count = 0;
    }

    #[inline]
    pub fn auto(&self) -> &AutoRotation {
        &self.auto
    }

    #[inline]
    pub fn auto_mut(&mut self) -> &mut AutoRotation {
        &mut self.auto
    }

    #[inline]
    pub fn projection(&self) -> &PerspectiveProjection {
        &self.projection
    }

    #[inline]
    pub fn tesseract(&self) -> &Tesseract4D {
        &self.tesseract
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for FrameUpdater {
    fn default() -> Self {
        Self::new(AutoRotation::new(), PerspectiveProjection::default())
    }
}
