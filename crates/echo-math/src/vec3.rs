// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{self, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::Vec2;

/// 3D vector `(x, y, z)`.
///
/// * May represent a point, a direction, or a set of Euler angles in radians
///   (see [`Vec3::to_quat`]) depending on the calling context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_direction`] for directions (`w = 0`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Builds a vector from a slice of exactly three values.
    ///
    /// # Examples
    /// ```
    /// use echo_math::{MathError, Vec3};
    /// assert!(Vec3::from_slice(&[1.0, 2.0, 3.0]).is_ok());
    /// assert_eq!(
    ///     Vec3::from_slice(&[1.0, 2.0]),
    ///     Err(MathError::DimensionMismatch { expected: 3, actual: 2 }),
    /// );
    /// ```
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(|data| Self { data })
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: f32) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: f32) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: f32) {
        self.data[2] = value;
    }

    /// Drops the Z component.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
        )
    }

    /// Component-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) / other.component(0),
            self.component(1) / other.component(1),
            self.component(2) / other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// `a + b`.
    pub fn sum(a: &Self, b: &Self) -> Self {
        a.add(b)
    }

    /// `a - b`.
    pub fn difference(a: &Self, b: &Self) -> Self {
        a.sub(b)
    }

    /// Component-wise `a * b`.
    pub fn product(a: &Self, b: &Self) -> Self {
        a.mul(b)
    }

    /// Component-wise `a / b`.
    pub fn quotient(a: &Self, b: &Self) -> Self {
        a.div(b)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (`self × other`).
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.squared_distance(other).sqrt()
    }

    /// Squared distance between two points.
    pub fn squared_distance(&self, other: &Self) -> f32 {
        other.sub(self).squared_length()
    }

    /// Unit vector pointing from `from` towards `to`; zero when they coincide.
    pub fn direction(from: &Self, to: &Self) -> Self {
        to.sub(from).normalize()
    }

    /// Linear interpolation `a + t (b - a)`.
    pub fn mix(a: &Self, b: &Self, t: f32) -> Self {
        a.add(&b.sub(a).scale(t))
    }

    /// Unit-length copy of the vector.
    ///
    /// Exact unit vectors are returned untouched. A zero-length vector
    /// normalizes to zero rather than producing NaNs so downstream callers can
    /// detect it.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 1.0 {
            return *self;
        }
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// In-place form of [`Vec3::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// `true` when every component differs by at most `threshold`.
    pub fn equals(&self, other: &Self, threshold: f32) -> bool {
        scalar::all_within(&self.data, &other.data, threshold)
    }

    /// Comparison under an absolute/relative [`Tolerance`].
    pub fn equals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.all_eq(&self.data, &other.data)
    }

    /// [`Vec3::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(data: [f32; 3]) -> Self {
        Self { data }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = crate::MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl core::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.scale(1.0 / rhs);
    }
}
