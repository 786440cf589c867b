//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices and 32 edges. Vertices sit on the corners of
//! `[0, size]^4`; vertex `i` takes bit 0 of `i` for x, bit 1 for y, bit 2 for
//! z and bit 3 for w. Two vertices share an edge when their indices differ in
//! exactly one bit.

use crate::Vec4;

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;

/// Number of edges of a tesseract
pub const EDGE_COUNT: usize = 32;

/// Edge list as `(low, high)` vertex index pairs, in lexicographic order.
///
/// Renderers allocate one line segment per entry, so this order is part of
/// the output contract.
pub const EDGES: [(usize, usize); EDGE_COUNT] = [
    (0, 1), (0, 2), (0, 4), (0, 8),
    (1, 3), (1, 5), (1, 9),
    (2, 3), (2, 6), (2, 10),
    (3, 7), (3, 11),
    (4, 5), (4, 6), (4, 12),
    (5, 7), (5, 13),
    (6, 7), (6, 14),
    (7, 15),
    (8, 9), (8, 10), (8, 12),
    (9, 11), (9, 13),
    (10, 11), (10, 14),
    (11, 15),
    (12, 13), (12, 14),
    (13, 15),
    (14, 15),
];

/// A tesseract anchored at the origin
#[derive(Clone, Debug, PartialEq)]
pub struct Tesseract4D {
    /// Side length
    size: f32,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; VERTEX_COUNT],
}

impl Tesseract4D {
    /// Create a tesseract covering `[0, size]^4`
    ///
    /// # Arguments
    /// * `size` - The full side length of the tesseract
    pub fn new(size: f32) -> Self {
        let vertices = std::array::from_fn(|i| {
            let bit = |b: usize| if i & (1 << b) != 0 { size } else { 0.0 };
            Vec4::new(bit(0), bit(1), bit(2), bit(3))
        });

        Self { size, vertices }
    }

    /// The unit tesseract with every coordinate in {0, 1}
    pub fn unit() -> Self {
        Self::new(1.0)
    }

    /// Get the full size (side length)
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Center point of the tesseract
    #[inline]
    pub fn center(&self) -> Vec4 {
        Vec4::splat(self.size * 0.5)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &'static [(usize, usize); EDGE_COUNT] {
        &EDGES
    }

    /// Positions of both endpoints of edge `edge`
    pub fn edge_endpoints(&self, edge: usize) -> (Vec4, Vec4) {
        let (a, b) = EDGES[edge];
        (self.vertices[a], self.vertices[b])
    }
}

impl Default for Tesseract4D {
    fn default() -> Self {
        Self::unit()
    }
}
