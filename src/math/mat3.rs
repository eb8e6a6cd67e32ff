use std::ops::Mul;

use super::{Mat4, Vec3};

/// Column-major 3x3 `f32` matrix, mostly used as a normal matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3 {
    /// Components in column-major order.
    pub m: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Build from a column-major array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Upper-left 3x3 block of a 4x4 matrix.
    #[must_use]
    pub fn from_mat4(a: &Mat4) -> Self {
        let a = &a.m;
        Self {
            m: [a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]],
        }
    }

    /// Matrix that transforms normals under `model_view`: the inverse
    /// transpose of its upper-left 3x3 block. `None` when that block is
    /// singular.
    #[must_use]
    pub fn normal_matrix(model_view: &Mat4) -> Option<Self> {
        Self::from_mat4(model_view).inverse().map(|inv| inv.transpose())
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let a = &self.m;
        Self {
            m: [a[0], a[3], a[6], a[1], a[4], a[7], a[2], a[5], a[8]],
        }
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let a = &self.m;
        a[0] * (a[8] * a[4] - a[5] * a[7])
            + a[1] * (-a[8] * a[3] + a[5] * a[6])
            + a[2] * (a[7] * a[3] - a[4] * a[6])
    }

    /// Inverse, or `None` when singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let a = &self.m;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        Some(Self {
            m: [
                b01 * inv,
                (-a22 * a01 + a02 * a21) * inv,
                (a12 * a01 - a02 * a11) * inv,
                b11 * inv,
                (a22 * a00 - a02 * a20) * inv,
                (-a12 * a00 + a02 * a10) * inv,
                b21 * inv,
                (-a21 * a00 + a01 * a20) * inv,
                (a11 * a00 - a01 * a10) * inv,
            ],
        })
    }

    /// Matrix product `self · rhs`.
    #[must_use]
    pub fn mul_mat3(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Self { m: out }
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, rhs: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(rhs.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat3(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.transform_mat3(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_normal_matrix_is_rotation() {
        let rot = Mat4::from_rotation_y(0.8);
        let normal = Mat3::normal_matrix(&rot).unwrap();
        assert!(normal.abs_diff_eq(&Mat3::from_mat4(&rot), 1e-5));
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let scale = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let normal = Mat3::normal_matrix(&scale).unwrap();
        let n = (normal * Vec3::new(1.0, 1.0, 0.0)).normalize();
        // Surface x = y stretched along X: normal tilts towards Y.
        assert!(n.y > n.x);
    }

    #[test]
    fn inverse_round_trips() {
        let m = Mat3::from_cols_array([2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat3::IDENTITY, 1e-5));
        let expected = glam::Mat3::from_cols_array(&m.m).determinant();
        assert!((m.determinant() - expected).abs() < 1e-5);
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0]);
        assert!(m.inverse().is_none());
    }
}
