// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::error::{self, MathError, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::{Vec2, Vec3};

/// Row-major 3×3 matrix.
///
/// - Element `(row, col)` lives at `row * 3 + col`.
/// - Acts on column vectors (`M · v`); a pure rotation converts to and from
///   [`crate::Quat`] via [`Mat3::to_quat`] / [`crate::Quat::to_mat3`].
/// - Doubles as a 2D affine transform for [`Mat3::transform_vec2`], with the
///   translation in the last column.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
    ]);

    /// All entries zero.
    pub const ZERO: Self = Self::new([0.0; 9]);

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Returns a fresh identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from a row-major slice of exactly nine values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(Self::new)
    }

    /// Builds a matrix from three rows.
    pub fn from_rows(r0: &Vec3, r1: &Vec3, r2: &Vec3) -> Self {
        Self::new([
            r0.x(), r0.y(), r0.z(), //
            r1.x(), r1.y(), r1.z(), //
            r2.x(), r2.y(), r2.z(), //
        ])
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized internally; a zero-length axis is rejected with
    /// [`MathError::DegenerateAxis`].
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Result<Self> {
        rodrigues(axis, angle).map(Self::new)
    }

    /// Returns the row-major storage.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Returns the storage in column-major order for GPU uploads.
    pub fn to_cols_array(self) -> [f32; 9] {
        self.transpose().data
    }

    /// Flattened row-major element `index`.
    pub fn at(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the storage with row-major `values`.
    pub fn init(&mut self, values: [f32; 9]) {
        self.data = values;
    }

    /// Row `index` as a vector.
    pub fn row(&self, index: usize) -> Vec3 {
        let base = index * 3;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    /// Column `index` as a vector.
    pub fn col(&self, index: usize) -> Vec3 {
        Vec3::new(self.data[index], self.data[index + 3], self.data[index + 6])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        a00 * (a11 * a22 - a12 * a21) + a01 * (a12 * a20 - a10 * a22)
            + a02 * (a10 * a21 - a11 * a20)
    }

    /// Inverse via the adjugate scaled by `1 / det`.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is
    /// exactly zero. No epsilon is applied: near-singular matrices invert
    /// with whatever precision `f32` affords.
    pub fn inverse(&self) -> Result<Self> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;

        let c00 = a11 * a22 - a12 * a21;
        let c01 = a12 * a20 - a10 * a22;
        let c02 = a10 * a21 - a11 * a20;

        let det = a00 * c00 + a01 * c01 + a02 * c02;
        if det == 0.0 {
            debug!(matrix = ?self.data, "mat3 inverse: singular matrix");
            return Err(MathError::SingularMatrix);
        }
        let inv = 1.0 / det;

        Ok(Self::new([
            c00 * inv,
            (a02 * a21 - a01 * a22) * inv,
            (a01 * a12 - a02 * a11) * inv,
            c01 * inv,
            (a00 * a22 - a02 * a20) * inv,
            (a02 * a10 - a00 * a12) * inv,
            c02 * inv,
            (a01 * a20 - a00 * a21) * inv,
            (a00 * a11 - a01 * a10) * inv,
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
        self.data.swap(1, 3);
        self.data.swap(2, 6);
        self.data.swap(5, 7);
    }

    /// Matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        let [b00, b01, b02, b10, b11, b12, b20, b21, b22] = rhs.data;
        Self::new([
            a00 * b00 + a01 * b10 + a02 * b20,
            a00 * b01 + a01 * b11 + a02 * b21,
            a00 * b02 + a01 * b12 + a02 * b22,
            a10 * b00 + a11 * b10 + a12 * b20,
            a10 * b01 + a11 * b11 + a12 * b21,
            a10 * b02 + a11 * b12 + a12 * b22,
            a20 * b00 + a21 * b10 + a22 * b20,
            a20 * b01 + a21 * b11 + a22 * b21,
            a20 * b02 + a21 * b12 + a22 * b22,
        ])
    }

    /// `a · b`.
    pub fn product(a: &Self, b: &Self) -> Self {
        a.multiply(b)
    }

    /// Composes a rotation about `axis`: returns `self · R(axis, angle)`.
    ///
    /// Fails with [`MathError::DegenerateAxis`] for a zero-length axis.
    ///
    /// # Examples
    /// ```
    /// use echo_math::{Mat3, Vec3};
    /// let m = Mat3::IDENTITY.rotate(0.7, &Vec3::new(1.0, 1.0, 0.0)).unwrap();
    /// let back = m.rotate(-0.7, &Vec3::new(1.0, 1.0, 0.0)).unwrap();
    /// assert!(back.approx_eq(&Mat3::IDENTITY));
    /// ```
    pub fn rotate(&self, angle: f32, axis: &Vec3) -> Result<Self> {
        Ok(self.multiply(&Self::from_axis_angle(axis, angle)?))
    }

    /// In-place form of [`Mat3::rotate`]; on error the matrix is untouched.
    pub fn rotate_in_place(&mut self, angle: f32, axis: &Vec3) -> Result<()> {
        *self = self.rotate(angle, axis)?;
        Ok(())
    }

    /// `M · v`.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Applies the matrix as a 2D affine transform (`v` extended with `1`).
    pub fn transform_vec2(&self, v: &Vec2) -> Vec2 {
        let [a00, a01, a02, a10, a11, a12, ..] = self.data;
        Vec2::new(
            a00 * v.x() + a01 * v.y() + a02,
            a10 * v.x() + a11 * v.y() + a12,
        )
    }

    /// `true` when every entry differs by at most `threshold`.
    pub fn equals(&self, other: &Self, threshold: f32) -> bool {
        scalar::all_within(&self.data, &other.data, threshold)
    }

    /// Comparison under an absolute/relative [`Tolerance`].
    pub fn equals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.all_eq(&self.data, &other.data)
    }

    /// [`Mat3::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

/// Row-major rotation block for a column-vector rotation of `angle` radians
/// about `axis`.
///
/// `R = c·I + (1 - c)·a aᵀ + s·[a]ₓ`
pub(crate) fn rodrigues(axis: &Vec3, angle: f32) -> Result<[f32; 9]> {
    let len = axis.length();
    if len == 0.0 {
        debug!(axis = ?axis.to_array(), "rotation: zero-length axis");
        return Err(MathError::DegenerateAxis);
    }
    let a = axis.scale(1.0 / len);
    let (x, y, z) = (a.x(), a.y(), a.z());
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    Ok([
        x * x * t + c,
        x * y * t - z * s,
        x * z * t + y * s,
        y * x * t + z * s,
        y * y * t + c,
        y * z * t - x * s,
        z * x * t - y * s,
        z * y * t + x * s,
        z * z * t + c,
    ])
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&[f32]> for Mat3 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(&rhs)
    }
}

impl core::ops::MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn rodrigues_z_quarter_turn_maps_x_to_y() {
        let r = Mat3::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_2).unwrap();
        assert!(r.transform(&Vec3::UNIT_X).approx_eq(&Vec3::UNIT_Y));
        assert!(r.transform(&Vec3::UNIT_Y).approx_eq(&-Vec3::UNIT_X));
    }

    #[test]
    fn zero_axis_is_rejected_and_matrix_untouched() {
        let mut m = Mat3::new([2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]);
        let before = m;
        assert_eq!(
            m.rotate_in_place(1.0, &Vec3::ZERO),
            Err(MathError::DegenerateAxis)
        );
        assert_eq!(m, before);
    }

    #[test]
    fn affine_vec2_applies_translation_column() {
        let m = Mat3::new([1.0, 0.0, 5.0, 0.0, 1.0, -2.0, 0.0, 0.0, 1.0]);
        assert_eq!(m.transform_vec2(&Vec2::new(1.0, 1.0)).to_array(), [6.0, -1.0]);
    }

    #[test]
    fn transpose_and_cols_agree() {
        let m = Mat3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transpose();
        for i in 0..3 {
            assert_eq!(t.row(i), m.col(i));
        }
        assert_eq!(m.to_cols_array(), t.to_array());
    }
}
