// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{self, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::Vec3;

/// 4D vector `(x, y, z, w)`, doubling as an RGBA colour.
///
/// `r`, `g`, `b`, `a` are aliases for `x`, `y`, `z`, `w` over the same
/// storage.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a 3D vector with the given `w` (1 for points, 0 for directions).
    pub fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Builds a vector from a slice of exactly four values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(|data| Self { data })
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
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

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
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

    /// Sets the W component.
    pub fn set_w(&mut self, value: f32) {
        self.data[3] = value;
    }

    /// Red channel (alias of `x`).
    pub fn r(&self) -> f32 {
        self.x()
    }

    /// Green channel (alias of `y`).
    pub fn g(&self) -> f32 {
        self.y()
    }

    /// Blue channel (alias of `z`).
    pub fn b(&self) -> f32 {
        self.z()
    }

    /// Alpha channel (alias of `w`).
    pub fn a(&self) -> f32 {
        self.w()
    }

    /// Sets the red channel.
    pub fn set_r(&mut self, value: f32) {
        self.set_x(value);
    }

    /// Sets the green channel.
    pub fn set_g(&mut self, value: f32) {
        self.set_y(value);
    }

    /// Sets the blue channel.
    pub fn set_b(&mut self, value: f32) {
        self.set_z(value);
    }

    /// Sets the alpha channel.
    pub fn set_a(&mut self, value: f32) {
        self.set_w(value);
    }

    /// Drops the W component.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    fn zip(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
            f(self.data[3], other.data[3]),
        )
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Component-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a / b)
    }

    /// Scales every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.x() * scalar,
            self.y() * scalar,
            self.z() * scalar,
            self.w() * scalar,
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

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
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

    /// Linear interpolation `a + t (b - a)`; blends colours channel by channel.
    pub fn mix(a: &Self, b: &Self, t: f32) -> Self {
        a.zip(b, |x, y| x + t * (y - x))
    }

    /// Unit-length copy; unit vectors pass through and zero stays zero.
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

    /// In-place form of [`Vec4::normalize`].
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

    /// [`Vec4::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(data: [f32; 4]) -> Self {
        Self { data }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = crate::MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec4::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl core::ops::AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec4::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec4::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
