//! 4x4 affine matrix helpers.
//!
//! This module provides a `Mat4` struct covering the transform
//! constructors the renderer needs: translation, rotation, scaling, and
//! composition.
//!
//! Matrices are row-major with column vectors, so `m * p` applies `m` to
//! the point `p` and `a.then(&b)` yields a matrix that applies `a` first.

use serde::{Deserialize, Serialize};

/// A 4x4 affine transformation matrix.
///
/// Stored row-major:
/// ```text
/// | m[0][0]  m[0][1]  m[0][2]  m[0][3] |
/// | m[1][0]  m[1][1]  m[1][2]  m[1][3] |
/// | m[2][0]  m[2][1]  m[2][2]  m[2][3] |
/// | m[3][0]  m[3][1]  m[3][2]  m[3][3] |
/// ```
///
/// The translation lives in the last column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Create an identity transform (no change).
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a translation transform.
    pub fn translate(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, tx],
                [0.0, 1.0, 0.0, ty],
                [0.0, 0.0, 1.0, tz],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a non-uniform scale transform.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            m: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a uniform scale transform.
    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    /// Create a rotation transform about an arbitrary axis, in radians.
    ///
    /// The axis is normalized first; a zero-length axis yields identity.
    pub fn rotate(axis: [f32; 3], angle_rad: f32) -> Self {
        let len_sq = axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2];
        if len_sq <= f32::EPSILON {
            return Self::identity();
        }
        let inv_len = len_sq.sqrt().recip();
        let (x, y, z) = (axis[0] * inv_len, axis[1] * inv_len, axis[2] * inv_len);

        let cos = angle_rad.cos();
        let sin = angle_rad.sin();
        let t = 1.0 - cos;

        Self {
            m: [
                [t * x * x + cos, t * x * y - sin * z, t * x * z + sin * y, 0.0],
                [t * x * y + sin * z, t * y * y + cos, t * y * z - sin * x, 0.0],
                [t * x * z - sin * y, t * y * z + sin * x, t * z * z + cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a rotation transform from degrees.
    pub fn rotate_deg(axis: [f32; 3], angle_deg: f32) -> Self {
        Self::rotate(axis, angle_deg.to_radians())
    }

    /// Compose this transform with another (`other * self`).
    ///
    /// The resulting transform applies `self` first, then `other`.
    pub fn then(&self, other: &Self) -> Self {
        *other * *self
    }

    /// Apply this transform to a point (includes translation).
    pub fn apply_point(&self, p: [f32; 3]) -> [f32; 3] {
        [
            self.m[0][0] * p[0] + self.m[0][1] * p[1] + self.m[0][2] * p[2] + self.m[0][3],
            self.m[1][0] * p[0] + self.m[1][1] * p[1] + self.m[1][2] * p[2] + self.m[1][3],
            self.m[2][0] * p[0] + self.m[2][1] * p[1] + self.m[2][2] * p[2] + self.m[2][3],
        ]
    }

    /// Apply this transform to a direction vector (ignores translation).
    pub fn apply_vector(&self, v: [f32; 3]) -> [f32; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Check if this is approximately an identity transform.
    pub fn is_identity(&self, epsilon: f32) -> bool {
        let id = Self::identity();
        self.m
            .iter()
            .flatten()
            .zip(id.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    /// Standard row-by-column product; `a * b` applies `b` first.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[row][k] * rhs.m[k][col]).sum();
            }
        }
        Mat4 { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for (lhs, rhs) in a.iter().zip(b.iter()) {
            assert!((lhs - rhs).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn identity_is_neutral_under_multiplication() {
        let m = Mat4::translate(3.0, -2.0, 1.0);
        assert_eq!(m * Mat4::identity(), m);
        assert_eq!(Mat4::identity() * m, m);
        assert!(Mat4::identity().is_identity(1e-6));
    }

    #[test]
    fn translate_moves_points_but_not_vectors() {
        let m = Mat4::translate(5.0, 10.0, -3.0);
        assert_close(m.apply_point([1.0, 2.0, 3.0]), [6.0, 12.0, 0.0]);
        assert_close(m.apply_vector([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let m = Mat4::rotate([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2);
        assert_close(m.apply_point([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_close(m.apply_point([0.0, 1.0, 0.0]), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn rotate_normalizes_axis() {
        let a = Mat4::rotate([0.0, 0.0, 10.0], 1.0);
        let b = Mat4::rotate([0.0, 0.0, 1.0], 1.0);
        assert_close(
            a.apply_point([1.0, 0.0, 0.0]),
            b.apply_point([1.0, 0.0, 0.0]),
        );
    }

    #[test]
    fn then_applies_left_transform_first() {
        let m = Mat4::translate(1.0, 0.0, 0.0)
            .then(&Mat4::rotate([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2));
        // Translated to (1, 0, 0) first, then rotated onto the y axis.
        assert_close(m.apply_point([0.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_axis_rotation_is_identity() {
        assert!(Mat4::rotate([0.0, 0.0, 0.0], 1.5).is_identity(1e-6));
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let m = Mat4::scale(2.0, 2.0, 2.0)
            .then(&Mat4::rotate([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2))
            .then(&Mat4::translate(10.0, 0.0, 0.0));
        // (1, 0, 0) -> scaled (2, 0, 0) -> rotated (0, 2, 0) -> moved (10, 2, 0)
        assert_close(m.apply_point([1.0, 0.0, 0.0]), [10.0, 2.0, 0.0]);
    }
}
