// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::error::{self, MathError, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::Vec2;

/// Row-major 2×2 matrix.
///
/// Storage is `[m00, m01, m10, m11]`; acts on column vectors.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    data: [f32; 4],
}

impl Mat2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([1.0, 0.0, 0.0, 1.0]);

    /// All entries zero.
    pub const ZERO: Self = Self::new([0.0; 4]);

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 4]) -> Self {
        Self { data }
    }

    /// Returns a fresh identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from a row-major slice of exactly four values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(Self::new)
    }

    /// Returns the row-major storage.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Flattened row-major element `index`.
    pub fn at(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrites the storage with row-major `values`.
    pub fn init(&mut self, values: [f32; 4]) {
        self.data = values;
    }

    /// Row `index` as a vector.
    pub fn row(&self, index: usize) -> Vec2 {
        Vec2::new(self.data[index * 2], self.data[index * 2 + 1])
    }

    /// Column `index` as a vector.
    pub fn col(&self, index: usize) -> Vec2 {
        Vec2::new(self.data[index], self.data[index + 2])
    }

    /// `ad - bc`.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.data;
        a * d - b * c
    }

    /// Inverse via the adjugate; fails when the determinant is exactly zero.
    ///
    /// # Examples
    /// ```
    /// use echo_math::Mat2;
    /// let inv = Mat2::new([1.0, 2.0, 3.0, 4.0]).inverse().unwrap();
    /// assert!(inv.approx_eq(&Mat2::new([-2.0, 1.0, 1.5, -0.5])));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            debug!(matrix = ?self.data, "mat2 inverse: singular matrix");
            return Err(MathError::SingularMatrix);
        }
        let inv = 1.0 / det;
        let [a, b, c, d] = self.data;
        Ok(Self::new([d * inv, -b * inv, -c * inv, a * inv]))
    }

    /// Inverts in place; on error the matrix is left untouched.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let [a, b, c, d] = self.data;
        Self::new([a, c, b, d])
    }

    /// Swaps the off-diagonal entries in place.
    pub fn transpose_in_place(&mut self) {
        self.data.swap(1, 2);
    }

    /// Matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [a00, a01, a10, a11] = self.data;
        let [b00, b01, b10, b11] = rhs.data;
        Self::new([
            a00 * b00 + a01 * b10,
            a00 * b01 + a01 * b11,
            a10 * b00 + a11 * b10,
            a10 * b01 + a11 * b11,
        ])
    }

    /// `a · b`.
    pub fn product(a: &Self, b: &Self) -> Self {
        a.multiply(b)
    }

    /// Composes a counter-clockwise rotation by `angle` radians: `self · R`.
    pub fn rotate(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        self.multiply(&Self::new([c, -s, s, c]))
    }

    /// In-place form of [`Mat2::rotate`].
    pub fn rotate_in_place(&mut self, angle: f32) {
        *self = self.rotate(angle);
    }

    /// Scales column `j` by `v[j]` (`self · diag(v)`).
    pub fn scale(&self, v: &Vec2) -> Self {
        let [a00, a01, a10, a11] = self.data;
        Self::new([a00 * v.x(), a01 * v.y(), a10 * v.x(), a11 * v.y()])
    }

    /// `M · v`.
    pub fn transform(&self, v: &Vec2) -> Vec2 {
        Vec2::new(self.row(0).dot(v), self.row(1).dot(v))
    }

    /// `true` when every entry differs by at most `threshold`.
    pub fn equals(&self, other: &Self, threshold: f32) -> bool {
        scalar::all_within(&self.data, &other.data, threshold)
    }

    /// Comparison under an absolute/relative [`Tolerance`].
    pub fn equals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.all_eq(&self.data, &other.data)
    }

    /// [`Mat2::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl From<[f32; 4]> for Mat2 {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&[f32]> for Mat2 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(&rhs)
    }
}

impl core::ops::MulAssign for Mat2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
