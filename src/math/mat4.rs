//! Column-major 4x4 matrix.
//!
//! Storage index `c * 4 + r` holds column `c`, row `r`, so a column vector is
//! transformed as `M · v` and `A * B` applies `B` first. Every in-place
//! routine copies the source components it reads into locals before writing
//! any output component; the value-returning variants (`rotated_x`, ...)
//! start from a copy of `self` and therefore leave untouched columns
//! bit-identical.

use std::ops::{Mul, MulAssign};

use super::{Quat, Vec3, Vec4, EPSILON};

/// Column-major 4x4 `f32` matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    /// Components in column-major order.
    pub m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Build from a column-major array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Build from four column vectors.
    #[must_use]
    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self {
            m: [
                x.x, x.y, x.z, x.w, //
                y.x, y.y, y.z, y.w, //
                z.x, z.y, z.z, z.w, //
                w.x, w.y, w.z, w.w,
            ],
        }
    }

    /// Components in column-major order.
    #[inline]
    #[must_use]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Components as four column arrays (the layout GPU uniforms expect).
    #[must_use]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [self.col_array(0), self.col_array(1), self.col_array(2), self.col_array(3)]
    }

    /// Column `index` (0..4) as a vector.
    #[must_use]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::from(self.col_array(index))
    }

    fn col_array(&self, index: usize) -> [f32; 4] {
        let base = index * 4;
        [self.m[base], self.m[base + 1], self.m[base + 2], self.m[base + 3]]
    }

    fn set_col(&mut self, index: usize, col: [f32; 4]) {
        let base = index * 4;
        self.m[base..base + 4].copy_from_slice(&col);
    }

    /// Translation matrix.
    #[must_use]
    pub fn from_translation(v: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[12] = v.x;
        out.m[13] = v.y;
        out.m[14] = v.z;
        out
    }

    /// Non-uniform scale matrix.
    #[must_use]
    pub fn from_scale(v: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0] = v.x;
        out.m[5] = v.y;
        out.m[10] = v.z;
        out
    }

    /// Rotation of `rad` radians about the X axis.
    #[must_use]
    pub fn from_rotation_x(rad: f32) -> Self {
        Self::IDENTITY.rotated_x(rad)
    }

    /// Rotation of `rad` radians about the Y axis.
    #[must_use]
    pub fn from_rotation_y(rad: f32) -> Self {
        Self::IDENTITY.rotated_y(rad)
    }

    /// Rotation of `rad` radians about the Z axis.
    #[must_use]
    pub fn from_rotation_z(rad: f32) -> Self {
        Self::IDENTITY.rotated_z(rad)
    }

    /// Rotation matrix equivalent to a unit quaternion.
    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (x2, y2, z2) = (q.x + q.x, q.y + q.y, q.z + q.z);
        let xx = q.x * x2;
        let yx = q.y * x2;
        let yy = q.y * y2;
        let zx = q.z * x2;
        let zy = q.z * y2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self {
            m: [
                1.0 - yy - zz, yx + wz, zx - wy, 0.0, //
                yx - wz, 1.0 - xx - zz, zy + wx, 0.0, //
                zx + wy, zy - wx, 1.0 - xx - yy, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix product `self · rhs`.
    #[must_use]
    pub fn mul_mat4(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let mut out = [0.0; 16];
        for col in 0..4 {
            let b = rhs.col_array(col);
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[0]
                    + a[4 + row] * b[1]
                    + a[8 + row] * b[2]
                    + a[12 + row] * b[3];
            }
        }
        Self { m: out }
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row * 4 + col] = self.m[col * 4 + row];
            }
        }
        Self { m: out }
    }

    /// The 2x2 sub-determinants shared by [`Self::determinant`] and
    /// [`Self::inverse`].
    fn cofactor_pairs(&self) -> [f32; 12] {
        let a = &self.m;
        [
            a[0] * a[5] - a[1] * a[4],
            a[0] * a[6] - a[2] * a[4],
            a[0] * a[7] - a[3] * a[4],
            a[1] * a[6] - a[2] * a[5],
            a[1] * a[7] - a[3] * a[5],
            a[2] * a[7] - a[3] * a[6],
            a[8] * a[13] - a[9] * a[12],
            a[8] * a[14] - a[10] * a[12],
            a[8] * a[15] - a[11] * a[12],
            a[9] * a[14] - a[10] * a[13],
            a[9] * a[15] - a[11] * a[13],
            a[10] * a[15] - a[11] * a[14],
        ]
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let b = self.cofactor_pairs();
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7]
            + b[5] * b[6]
    }

    /// Inverse, or `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let a = &self.m;
        let b = self.cofactor_pairs();
        let det = b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8]
            - b[4] * b[7]
            + b[5] * b[6];
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        Some(Self {
            m: [
                (a11 * b[11] - a12 * b[10] + a13 * b[9]) * inv,
                (a02 * b[10] - a01 * b[11] - a03 * b[9]) * inv,
                (a31 * b[5] - a32 * b[4] + a33 * b[3]) * inv,
                (a22 * b[4] - a21 * b[5] - a23 * b[3]) * inv,
                (a12 * b[8] - a10 * b[11] - a13 * b[7]) * inv,
                (a00 * b[11] - a02 * b[8] + a03 * b[7]) * inv,
                (a32 * b[2] - a30 * b[5] - a33 * b[1]) * inv,
                (a20 * b[5] - a22 * b[2] + a23 * b[1]) * inv,
                (a10 * b[10] - a11 * b[8] + a13 * b[6]) * inv,
                (a01 * b[8] - a00 * b[10] - a03 * b[6]) * inv,
                (a30 * b[4] - a31 * b[2] + a33 * b[0]) * inv,
                (a21 * b[2] - a20 * b[4] - a23 * b[0]) * inv,
                (a11 * b[7] - a10 * b[9] - a12 * b[6]) * inv,
                (a00 * b[9] - a01 * b[7] + a02 * b[6]) * inv,
                (a31 * b[1] - a30 * b[3] - a32 * b[0]) * inv,
                (a20 * b[3] - a21 * b[1] + a22 * b[0]) * inv,
            ],
        })
    }

    /// Post-multiply by a translation: `self = self · T(v)`.
    ///
    /// Only column 3 changes.
    pub fn translate(&mut self, v: Vec3) {
        let a = &self.m;
        let col = [
            a[0] * v.x + a[4] * v.y + a[8] * v.z + a[12],
            a[1] * v.x + a[5] * v.y + a[9] * v.z + a[13],
            a[2] * v.x + a[6] * v.y + a[10] * v.z + a[14],
            a[3] * v.x + a[7] * v.y + a[11] * v.z + a[15],
        ];
        self.set_col(3, col);
    }

    /// `self · T(v)` as a new matrix.
    #[must_use]
    pub fn translated(&self, v: Vec3) -> Self {
        let mut out = *self;
        out.translate(v);
        out
    }

    /// Post-multiply by a scale: `self = self · S(v)`.
    pub fn scale(&mut self, v: Vec3) {
        for (index, factor) in [v.x, v.y, v.z].into_iter().enumerate() {
            let mut col = self.col_array(index);
            for c in &mut col {
                *c *= factor;
            }
            self.set_col(index, col);
        }
    }

    /// `self · S(v)` as a new matrix.
    #[must_use]
    pub fn scaled(&self, v: Vec3) -> Self {
        let mut out = *self;
        out.scale(v);
        out
    }

    /// Replace columns `i` and `j` with `col_i·c + col_j·s` and
    /// `col_j·c − col_i·s`, reading both columns before writing either.
    fn mix_columns(&mut self, i: usize, j: usize, rad: f32) {
        let (s, c) = rad.sin_cos();
        let ci = self.col_array(i);
        let cj = self.col_array(j);
        let mut new_i = [0.0; 4];
        let mut new_j = [0.0; 4];
        for row in 0..4 {
            new_i[row] = ci[row] * c + cj[row] * s;
            new_j[row] = cj[row] * c - ci[row] * s;
        }
        self.set_col(i, new_i);
        self.set_col(j, new_j);
    }

    /// Post-multiply by a rotation about X. Columns 0 and 3 are untouched.
    pub fn rotate_x(&mut self, rad: f32) {
        self.mix_columns(1, 2, rad);
    }

    /// Post-multiply by a rotation about Y. Columns 1 and 3 are untouched.
    pub fn rotate_y(&mut self, rad: f32) {
        self.mix_columns(2, 0, rad);
    }

    /// Post-multiply by a rotation about Z. Columns 2 and 3 are untouched.
    pub fn rotate_z(&mut self, rad: f32) {
        self.mix_columns(0, 1, rad);
    }

    /// `self · Rx(rad)` as a new matrix.
    #[must_use]
    pub fn rotated_x(&self, rad: f32) -> Self {
        let mut out = *self;
        out.rotate_x(rad);
        out
    }

    /// `self · Ry(rad)` as a new matrix.
    #[must_use]
    pub fn rotated_y(&self, rad: f32) -> Self {
        let mut out = *self;
        out.rotate_y(rad);
        out
    }

    /// `self · Rz(rad)` as a new matrix.
    #[must_use]
    pub fn rotated_z(&self, rad: f32) -> Self {
        let mut out = *self;
        out.rotate_z(rad);
        out
    }

    /// Post-multiply by a rotation of `rad` about an arbitrary axis.
    ///
    /// An axis shorter than [`EPSILON`] leaves the matrix unchanged.
    pub fn rotate(&mut self, axis: Vec3, rad: f32) {
        let len = axis.length();
        if len < EPSILON {
            return;
        }
        let Vec3 { x, y, z } = axis * (1.0 / len);
        let (s, c) = rad.sin_cos();
        let t = 1.0 - c;

        let basis = [
            [x * x * t + c, y * x * t + z * s, z * x * t - y * s],
            [x * y * t - z * s, y * y * t + c, z * y * t + x * s],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c],
        ];
        let src = [self.col_array(0), self.col_array(1), self.col_array(2)];

        for (index, b) in basis.iter().enumerate() {
            let mut col = [0.0; 4];
            for (row, value) in col.iter_mut().enumerate() {
                *value = src[0][row] * b[0] + src[1][row] * b[1] + src[2][row] * b[2];
            }
            self.set_col(index, col);
        }
    }

    /// View matrix looking from `eye` towards `center`.
    ///
    /// When `eye` and `center` coincide (every component within
    /// [`EPSILON`]) there is no viewing direction and the identity matrix is
    /// returned. A zero-length basis vector (up parallel to the view
    /// direction) collapses to zero instead of NaN.
    #[must_use]
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        if (eye.x - center.x).abs() < EPSILON
            && (eye.y - center.y).abs() < EPSILON
            && (eye.z - center.z).abs() < EPSILON
        {
            return Self::IDENTITY;
        }

        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self {
            m: [
                x.x, y.x, z.x, 0.0, //
                x.y, y.y, z.y, 0.0, //
                x.z, y.z, z.z, 0.0, //
                -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
            ],
        }
    }

    /// OpenGL-style perspective projection (clip z in `[-1, 1]`).
    ///
    /// `fovy` is the vertical field of view in radians. A `far` of `None` or
    /// infinity produces an infinite far plane.
    #[must_use]
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: Option<f32>) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let mut out = [0.0; 16];
        out[0] = f / aspect;
        out[5] = f;
        out[11] = -1.0;

        match far.filter(|far| far.is_finite()) {
            Some(far) => {
                let nf = 1.0 / (near - far);
                out[10] = (far + near) * nf;
                out[14] = 2.0 * far * near * nf;
            }
            None => {
                out[10] = -1.0;
                out[14] = -2.0 * near;
            }
        }
        Self { m: out }
    }

    /// OpenGL-style orthographic projection.
    #[must_use]
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        let mut out = Self::IDENTITY;
        out.m[0] = -2.0 * lr;
        out.m[5] = -2.0 * bt;
        out.m[10] = 2.0 * nf;
        out.m[12] = (left + right) * lr;
        out.m[13] = (top + bottom) * bt;
        out.m[14] = (far + near) * nf;
        out
    }

    /// Translation part (column 3).
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, rhs: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(rhs.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat4(&rhs)
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat4(&rhs);
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.transform_mat4(&self)
    }
}
