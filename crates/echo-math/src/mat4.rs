// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::error::{self, MathError, Result};
use crate::mat3::rodrigues;
use crate::scalar::{self, Tolerance, EPSILON};
use crate::{Mat3, Vec3, Vec4};

/// Row-major 4×4 matrix.
///
/// - Element `(row, col)` lives at `row * 4 + col`; translation occupies the
///   last column.
/// - Acts on column vectors: points transform with `w = 1`
///   ([`Mat4::transform_point`]) and directions with `w = 0`
///   ([`Mat4::transform_direction`]).
/// - GL/WGSL expect column-major uniforms; upload [`Mat4::to_cols_array`].
///
/// # Examples
/// ```
/// use echo_math::{Mat4, Vec3};
/// let t = Mat4::translation(&Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, // row 0
        0.0, 1.0, 0.0, 0.0, // row 1
        0.0, 0.0, 1.0, 0.0, // row 2
        0.0, 0.0, 0.0, 1.0, // row 3
    ]);

    /// All entries zero.
    pub const ZERO: Self = Self::new([0.0; 16]);

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns a fresh identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from a row-major slice of exactly sixteen values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(Self::new)
    }

    /// Builds a translation matrix.
    pub fn translation(t: &Vec3) -> Self {
        Self::new([
            1.0, 0.0, 0.0, t.x(), //
            0.0, 1.0, 0.0, t.y(), //
            0.0, 0.0, 1.0, t.z(), //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub fn scaling(s: &Vec3) -> Self {
        Self::new([
            s.x(), 0.0, 0.0, 0.0, //
            0.0, s.y(), 0.0, 0.0, //
            0.0, 0.0, s.z(), 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// Fails with [`MathError::DegenerateAxis`] for a zero-length axis.
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Result<Self> {
        let [r00, r01, r02, r10, r11, r12, r20, r21, r22] = rodrigues(axis, angle)?;
        Ok(Self::new([
            r00, r01, r02, 0.0, //
            r10, r11, r12, 0.0, //
            r20, r21, r22, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ]))
    }

    /// Returns the row-major storage.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Returns the storage in column-major order for GPU uploads.
    pub fn to_cols_array(self) -> [f32; 16] {
        self.transpose().data
    }

    /// Flattened row-major element `index`.
    pub fn at(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the storage with row-major `values`.
    pub fn init(&mut self, values: [f32; 16]) {
        self.data = values;
    }

    /// Row `index` as a vector.
    pub fn row(&self, index: usize) -> Vec4 {
        let b = index * 4;
        Vec4::new(
            self.data[b],
            self.data[b + 1],
            self.data[b + 2],
            self.data[b + 3],
        )
    }

    /// Column `index` as a vector.
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.data[index],
            self.data[index + 4],
            self.data[index + 8],
            self.data[index + 12],
        )
    }

    /// Paired 2×2 sub-determinants of the top two and bottom two rows.
    ///
    /// `lo[k]` pairs columns of rows 0/1, `hi[k]` the same columns of rows
    /// 2/3, in the order (01, 02, 03, 12, 13, 23).
    fn sub_determinants(&self) -> ([f32; 6], [f32; 6]) {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        (
            [
                a00 * a11 - a01 * a10,
                a00 * a12 - a02 * a10,
                a00 * a13 - a03 * a10,
                a01 * a12 - a02 * a11,
                a01 * a13 - a03 * a11,
                a02 * a13 - a03 * a12,
            ],
            [
                a20 * a31 - a21 * a30,
                a20 * a32 - a22 * a30,
                a20 * a33 - a23 * a30,
                a21 * a32 - a22 * a31,
                a21 * a33 - a23 * a31,
                a22 * a33 - a23 * a32,
            ],
        )
    }

    /// Determinant via Laplace expansion over six paired 2×2 minors.
    pub fn determinant(&self) -> f32 {
        let (lo, hi) = self.sub_determinants();
        lo[0] * hi[5] - lo[1] * hi[4] + lo[2] * hi[3] + lo[3] * hi[2] - lo[4] * hi[1]
            + lo[5] * hi[0]
    }

    /// Inverse via the adjugate scaled by `1 / det`.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is
    /// exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        let ([d00, d01, d02, d03, d04, d05], [d06, d07, d08, d09, d10, d11]) =
            self.sub_determinants();

        let det = d00 * d11 - d01 * d10 + d02 * d09 + d03 * d08 - d04 * d07 + d05 * d06;
        if det == 0.0 {
            debug!(matrix = ?self.data, "mat4 inverse: singular matrix");
            return Err(MathError::SingularMatrix);
        }
        let inv = 1.0 / det;

        Ok(Self::new([
            (a11 * d11 - a12 * d10 + a13 * d09) * inv,
            (-a01 * d11 + a02 * d10 - a03 * d09) * inv,
            (a31 * d05 - a32 * d04 + a33 * d03) * inv,
            (-a21 * d05 + a22 * d04 - a23 * d03) * inv,
            (-a10 * d11 + a12 * d08 - a13 * d07) * inv,
            (a00 * d11 - a02 * d08 + a03 * d07) * inv,
            (-a30 * d05 + a32 * d02 - a33 * d01) * inv,
            (a20 * d05 - a22 * d02 + a23 * d01) * inv,
            (a10 * d10 - a11 * d08 + a13 * d06) * inv,
            (-a00 * d10 + a01 * d08 - a03 * d06) * inv,
            (a30 * d04 - a31 * d02 + a33 * d00) * inv,
            (-a20 * d04 + a21 * d02 - a23 * d00) * inv,
            (-a10 * d09 + a11 * d07 - a12 * d06) * inv,
            (a00 * d09 - a01 * d07 + a02 * d06) * inv,
            (-a30 * d03 + a31 * d01 - a32 * d00) * inv,
            (a20 * d03 - a21 * d01 + a22 * d00) * inv,
        ]))
    }

    /// Inverts in place; on error the matrix is left untouched.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    /// Swaps off-diagonal entries in place; the diagonal is unchanged.
    pub fn transpose_in_place(&mut self) {
        self.data.swap(1, 4);
        self.data.swap(2, 8);
        self.data.swap(3, 12);
        self.data.swap(6, 9);
        self.data.swap(7, 13);
        self.data.swap(11, 14);
    }

    /// Matrix product `self · rhs`: rows of `self` against columns of `rhs`.
    ///
    /// Applied to a vector, `rhs` acts first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.data;
        let b = &rhs.data;
        let mut out = [0.0; 16];
        for row in 0..4 {
            let (a0, a1, a2, a3) = (a[row * 4], a[row * 4 + 1], a[row * 4 + 2], a[row * 4 + 3]);
            out[row * 4] = a0 * b[0] + a1 * b[4] + a2 * b[8] + a3 * b[12];
            out[row * 4 + 1] = a0 * b[1] + a1 * b[5] + a2 * b[9] + a3 * b[13];
            out[row * 4 + 2] = a0 * b[2] + a1 * b[6] + a2 * b[10] + a3 * b[14];
            out[row * 4 + 3] = a0 * b[3] + a1 * b[7] + a2 * b[11] + a3 * b[15];
        }
        Self::new(out)
    }

    /// `a · b`.
    pub fn product(a: &Self, b: &Self) -> Self {
        a.multiply(b)
    }

    /// Composes a translation: `self · T(v)`.
    pub fn translate(&self, v: &Vec3) -> Self {
        self.multiply(&Self::translation(v))
    }

    /// Composes a non-uniform scale: `self · S(v)`.
    pub fn scale(&self, v: &Vec3) -> Self {
        self.multiply(&Self::scaling(v))
    }

    /// Composes a rotation about `axis`: `self · R(axis, angle)`.
    ///
    /// Fails with [`MathError::DegenerateAxis`] for a zero-length axis.
    pub fn rotate(&self, angle: f32, axis: &Vec3) -> Result<Self> {
        Ok(self.multiply(&Self::from_axis_angle(axis, angle)?))
    }

    /// In-place form of [`Mat4::rotate`]; on error the matrix is untouched.
    pub fn rotate_in_place(&mut self, angle: f32, axis: &Vec3) -> Result<()> {
        *self = self.rotate(angle, axis)?;
        Ok(())
    }

    /// `M · v`.
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_vec3(*point, 1.0)).xyz()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_vec3(*direction, 0.0)).xyz()
    }

    /// Inverse of the upper-left 3×3 block (the normal matrix before
    /// transposition).
    pub fn to_inverse_mat3(&self) -> Result<Mat3> {
        self.to_mat3().inverse()
    }

    /// `true` when every entry differs by at most `threshold`.
    pub fn equals(&self, other: &Self, threshold: f32) -> bool {
        scalar::all_within(&self.data, &other.data, threshold)
    }

    /// Comparison under an absolute/relative [`Tolerance`].
    pub fn equals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.all_eq(&self.data, &other.data)
    }

    /// [`Mat4::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self {
        self.multiply(rhs)
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}
