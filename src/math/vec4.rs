use std::ops::{Add, Mul, Sub};

use super::{Mat4, Vec3};

/// Four-component `f32` vector (homogeneous points, colors).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W component.
    pub w: f32,
}

impl Vec4 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extend a [`Vec3`] with the given w.
    #[inline]
    #[must_use]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drop the w component.
    #[inline]
    #[must_use]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length; zero stays zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len_sq = self.dot(self);
        if len_sq > 0.0 {
            self * (1.0 / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Multiply by a column-major 4x4 matrix (`M · v`).
    #[must_use]
    pub fn transform_mat4(self, m: &Mat4) -> Self {
        let c = &m.m;
        let Self { x, y, z, w } = self;
        Self::new(
            c[0] * x + c[4] * y + c[8] * z + c[12] * w,
            c[1] * x + c[5] * y + c[9] * z + c[13] * w,
            c[2] * x + c[6] * y + c[10] * z + c[14] * w,
            c[3] * x + c[7] * y + c[11] * z + c[15] * w,
        )
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(self, rhs: Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(rhs.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}
