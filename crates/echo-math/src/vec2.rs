// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{self, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::Vec3;

/// 2D vector `(x, y)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Builds a vector from a slice of exactly two values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(|data| Self { data })
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: f32) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: f32) {
        self.data[1] = value;
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Component-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y())
    }

    /// Scales every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y())
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

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// 2D cross product embedded in 3D: `(0, 0, ax*by - ay*bx)`.
    pub fn cross(&self, other: &Self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.x() * other.y() - self.y() * other.x())
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Squared Euclidean length.
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
        Self::new(a.x() + t * (b.x() - a.x()), a.y() + t * (b.y() - a.y()))
    }

    /// Unit-length copy of the vector.
    ///
    /// A unit vector is returned untouched and a zero vector stays zero.
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

    /// In-place form of [`Vec2::normalize`].
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

    /// [`Vec2::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(data: [f32; 2]) -> Self {
        Self { data }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = crate::MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl core::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec2::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
