use std::ops::{Add, Mul};

use super::{Vec3, EPSILON};

/// Rotation quaternion stored as `(x, y, z, w)`.
///
/// Unit norm is assumed by [`Quat::slerp`] and [`Quat::rotate_vec3`] but is
/// only enforced by [`Quat::normalize`]. A sum of rotations (see
/// [`Add`]) is not a rotation until it has been normalized.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quat {
    /// Imaginary i.
    pub x: f32,
    /// Imaginary j.
    pub y: f32,
    /// Imaginary k.
    pub z: f32,
    /// Real part.
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from raw components.
    #[inline]
    #[must_use]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`. The axis is used as given
    /// and should already be unit length.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Self::from_xyzw(s * axis.x, s * axis.y, s * axis.z, half.cos())
    }

    /// Four-dimensional dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Norm of the quaternion.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Multiply every component by `s`.
    #[inline]
    #[must_use]
    pub fn scale(self, s: f32) -> Self {
        Self::from_xyzw(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Scale to unit norm. The zero quaternion is returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len_sq = self.dot(self);
        if len_sq > 0.0 {
            self.scale(1.0 / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Conjugate (negated vector part). Equals the inverse for unit
    /// quaternions.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse. The zero quaternion inverts to zero.
    #[must_use]
    pub fn inverse(self) -> Self {
        let len_sq = self.dot(self);
        if len_sq > 0.0 {
            self.conjugate().scale(1.0 / len_sq)
        } else {
            Self::from_xyzw(0.0, 0.0, 0.0, 0.0)
        }
    }

    /// Hamilton product `self · rhs` (applies `rhs` first when rotating).
    #[must_use]
    pub fn mul_quat(self, rhs: Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (rhs.x, rhs.y, rhs.z, rhs.w);
        Self::from_xyzw(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Spherical linear interpolation towards `rhs`.
    ///
    /// Takes the shorter arc. When the operands are within [`EPSILON`] of
    /// each other the sine denominator vanishes and plain linear
    /// interpolation is used instead.
    #[must_use]
    pub fn slerp(self, rhs: Self, t: f32) -> Self {
        let mut cos_omega = self.dot(rhs);
        let mut end = rhs;
        if cos_omega < 0.0 {
            cos_omega = -cos_omega;
            end = rhs.scale(-1.0);
        }

        let (scale0, scale1) = if 1.0 - cos_omega > EPSILON {
            let omega = cos_omega.acos();
            let sin_omega = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (1.0 - t, t)
        };

        self.scale(scale0) + end.scale(scale1)
    }

    /// Rotate a vector with the sandwich product `q · (v, 0) · q⁻¹`.
    #[must_use]
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let pure = Self::from_xyzw(v.x, v.y, v.z, 0.0);
        let r = self.mul_quat(pure).mul_quat(self.inverse());
        Vec3::new(r.x, r.y, r.z)
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(self, rhs: Self, epsilon: f32) -> bool {
        (self.x - rhs.x).abs() <= epsilon
            && (self.y - rhs.y).abs() <= epsilon
            && (self.z - rhs.z).abs() <= epsilon
            && (self.w - rhs.w).abs() <= epsilon
    }
}

/// Component-wise sum. The result is generally not unit length.
impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_xyzw(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_quat(rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn axis_angle_rotates_x_into_y() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert!((q * Vec3::X).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn multiply_composes_right_to_left() {
        let about_z = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let about_x = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
        // X -> Y under about_z, then Y -> Z under about_x.
        let v = (about_x * about_z) * Vec3::X;
        assert!(v.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.7);
        let v = Vec3::new(0.3, -2.0, 5.0);
        let back = q.inverse().rotate_vec3(q.rotate_vec3(v));
        assert!(back.abs_diff_eq(v, 1e-5));
        assert!(q.mul_quat(q.conjugate()).abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn zero_quaternion_is_safe() {
        let zero = Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), zero);
        assert_eq!(zero.inverse(), zero);
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::Y, PI / 2.0);
        assert!(a.slerp(b, 0.0).abs_diff_eq(a, 1e-6));
        assert!(a.slerp(b, 1.0).abs_diff_eq(b, 1e-6));
        let mid = a.slerp(b, 0.5);
        assert!(mid.abs_diff_eq(Quat::from_axis_angle(Vec3::Y, PI / 4.0), 1e-6));
    }

    #[test]
    fn slerp_identical_operands_falls_back_to_lerp() {
        let q = Quat::from_axis_angle(Vec3::X, 0.25);
        let r = q.slerp(q, 0.3);
        assert!(r.x.is_finite() && r.w.is_finite());
        assert!(r.abs_diff_eq(q, 1e-6));
    }

    #[test]
    fn slerp_takes_short_path() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::Y, 0.5).scale(-1.0);
        let mid = a.slerp(b, 0.5);
        assert!(mid.abs_diff_eq(Quat::from_axis_angle(Vec3::Y, 0.25), 1e-5));
    }

    #[test]
    fn summed_quaternions_need_normalizing() {
        let a = Quat::from_axis_angle(Vec3::X, 0.2);
        let b = Quat::from_axis_angle(Vec3::Y, 0.2);
        let sum = a + b;
        assert!((sum.length() - 1.0).abs() > 0.5);
        assert!((sum.normalize().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn matches_glam_rotation() {
        let axis = Vec3::new(0.2, 0.9, -0.4).normalize();
        let q = Quat::from_axis_angle(axis, 1.3);
        let g = glam::Quat::from_axis_angle(glam::Vec3::from(axis), 1.3);
        let v = Vec3::new(1.0, 2.0, 3.0);
        let expected: Vec3 = (g * glam::Vec3::from(v)).into();
        assert!(q.rotate_vec3(v).abs_diff_eq(expected, 1e-5));
    }
}
