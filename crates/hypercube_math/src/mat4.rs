//! 4x4 Matrix utilities for 4D rotations
//!
//! Matrices are stored column-major (`m[col][row]`) so they can be copied
//! straight into GPU uniforms. Every elementary rotation used by the viewer
//! is built by [`plane_rotation`].

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// The result is the identity with a `[[c, -s], [s, c]]` block at rows and
/// columns `p1`, `p2`. A positive angle rotates axis `p1` toward axis `p2`.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use hypercube_math::mat4::{plane_rotation, transform};
/// use hypercube_math::Vec4;
/// // Quarter turn in the XW plane sends X to W
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 0, 3);
/// let v = transform(m, Vec4::X);
/// assert!((v.w - 1.0).abs() < 1e-6);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    debug_assert!(p1 < 4 && p2 < 4 && p1 != p2, "invalid rotation plane ({}, {})", p1, p2);

    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    // Column p1 holds the image of axis p1: cos along p1, sin along p2
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Rotate `v` about `center` instead of the origin
///
/// result = M * (v - center) + center
#[inline]
pub fn rotate_about(m: Mat4, v: Vec4, center: Vec4) -> Vec4 {
    transform(m, v - center) + center
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Determinant via Laplace expansion over 2x2 minors
///
/// The determinant of a matrix equals that of its transpose, so the storage
/// order does not matter here.
pub fn determinant(m: Mat4) -> f32 {
    let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
    let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
    let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
    let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
    let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
    let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

    let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
    let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
    let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
    let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
    let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
    let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

    s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
}

/// Check whether `m^T * m` is the identity within `epsilon`
pub fn is_orthogonal(m: Mat4, epsilon: f32) -> bool {
    let product = mul(transpose(m), m);
    product
        .iter()
        .zip(IDENTITY.iter())
        .all(|(col, id_col)| {
            col.iter()
                .zip(id_col.iter())
                .all(|(a, b)| (a - b).abs() < epsilon)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = transform(IDENTITY, v);
        assert!(vec_approx_eq(v, result));
    }

    #[test]
    fn test_plane_rotation_xy() {
        let m = plane_rotation(FRAC_PI_2, 0, 1);

        // X should go to Y
        let result = transform(m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::Y), "X should become Y, got {:?}", result);

        // Y should go to -X
        let result = transform(m, Vec4::Y);
        assert!(vec_approx_eq(result, -Vec4::X), "Y should become -X, got {:?}", result);

        // Z and W untouched
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::Z));
        assert!(vec_approx_eq(transform(m, Vec4::W), Vec4::W));
    }

    #[test]
    fn test_plane_rotation_zw() {
        let m = plane_rotation(FRAC_PI_2, 2, 3);
        let result = transform(m, Vec4::Z);
        assert!(vec_approx_eq(result, Vec4::W), "Z should become W, got {:?}", result);
    }

    #[test]
    fn test_plane_rotation_matches_row_major_block() {
        // Row-major view: R[p1][p2] = -s, R[p2][p1] = s
        let angle = 0.3f32;
        let m = plane_rotation(angle, 1, 3);
        let row_major = transpose(m);
        assert!(approx_eq(row_major[1][1], angle.cos()));
        assert!(approx_eq(row_major[1][3], -angle.sin()));
        assert!(approx_eq(row_major[3][1], angle.sin()));
        assert!(approx_eq(row_major[3][3], angle.cos()));
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation(0.5, 0, 1);
        assert!(mat_approx_eq(a, mul(IDENTITY, a)));
        assert!(mat_approx_eq(a, mul(a, IDENTITY)));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        // a * b applied to X: b (XY quarter turn) sends X to Y, then a (YZ) sends Y to Z
        let a = plane_rotation(FRAC_PI_2, 1, 2);
        let b = plane_rotation(FRAC_PI_2, 0, 1);
        let result = transform(mul(a, b), Vec4::X);
        assert!(vec_approx_eq(result, Vec4::Z), "got {:?}", result);
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45° rotations should equal one 90° rotation
        let r45 = plane_rotation(FRAC_PI_4, 0, 1);
        let r90 = plane_rotation(FRAC_PI_4 * 2.0, 0, 1);
        assert!(mat_approx_eq(mul(r45, r45), r90));
    }

    #[test]
    fn test_rotate_about_center_fixes_center() {
        let center = Vec4::splat(0.5);
        let m = plane_rotation(1.1, 0, 3);
        assert!(vec_approx_eq(rotate_about(m, center, center), center));
    }

    #[test]
    fn test_determinant() {
        assert!(approx_eq(determinant(IDENTITY), 1.0));

        let diag = [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 5.0],
        ];
        assert!(approx_eq(determinant(diag), 120.0));

        // Swapping two axes flips orientation
        let swap = [
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert!(approx_eq(determinant(swap), -1.0));
    }

    #[test]
    fn test_is_orthogonal() {
        assert!(is_orthogonal(plane_rotation(0.7, 0, 2), EPSILON));

        let skew = [
            [1.0, 0.5, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert!(!is_orthogonal(skew, EPSILON));
    }
}
