// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::{debug, trace};

use crate::error::{self, MathError, Result};
use crate::scalar::{self, Tolerance, EPSILON};
use crate::{Mat3, Mat4, Vec3};

/// Below this `sin(θ/2)` [`Quat::mix`] averages instead of dividing.
const MIX_LINEAR_SIN: f32 = 0.001;

/// Above this `cos(θ/2)` [`Quat::short_mix`] blends linearly.
const SHORT_MIX_LINEAR_COS: f32 = 0.9999;

/// Quaternion stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Rotation use requires unit length; nothing normalizes implicitly, call
///   [`Quat::normalize`] after long multiply chains.
/// * `q` and `-q` encode the same rotation (double cover).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// All components zero (not a rotation).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components.
    ///
    /// Use [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a quaternion from an `(x, y, z, w)` slice of exactly four values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        error::exact(values).map(|data| Self { data })
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
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

    /// W (scalar) component.
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

    /// Vector part `(x, y, z)`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized internally. A zero-length axis is rejected with
    /// [`MathError::DegenerateAxis`], matching [`Mat3::rotate`].
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Result<Self> {
        let len = axis.length();
        if len == 0.0 {
            debug!(axis = ?axis.to_array(), "quat from_axis_angle: zero-length axis");
            return Err(MathError::DegenerateAxis);
        }
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let v = axis.scale(sin_half / len);
        Ok(Self::new(v.x(), v.y(), v.z(), cos_half))
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: rotating a vector by the result applies `other`
    /// first, then `self`, which mirrors matrix composition:
    /// `(a * b).to_mat3() == a.to_mat3() · b.to_mat3()`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2).unwrap();
    /// let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2).unwrap();
    /// // Non-commutative: pitch*yaw is different
    /// assert!(!yaw.multiply(&pitch).approx_eq(&pitch.multiply(&yaw)));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// `a * b`.
    pub fn product(a: &Self, b: &Self) -> Self {
        a.multiply(b)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
            self.w() + other.w(),
        )
    }

    /// `a + b`.
    pub fn sum(a: &Self, b: &Self) -> Self {
        a.add(b)
    }

    /// Scales every component.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.x() * s, self.y() * s, self.z() * s, self.w() * s)
    }

    /// `-q`: same rotation, opposite hemisphere.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// 4D dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Squared norm.
    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Unit-length copy; a zero quaternion stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// In-place form of [`Quat::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse `conjugate / dot(q, q)`.
    ///
    /// Valid for non-unit quaternions. Fails with
    /// [`MathError::DegenerateQuaternion`] when `dot(q, q)` is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let dot = self.squared_length();
        if dot == 0.0 {
            debug!("quat inverse: zero quaternion");
            return Err(MathError::DegenerateQuaternion);
        }
        Ok(self.conjugate().scale(1.0 / dot))
    }

    /// Inverts in place; on error the quaternion is left untouched.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Recovers `w` from a unit quaternion's vector part.
    ///
    /// Picks the non-negative root, so the result lies in the `w >= 0`
    /// hemisphere; `|1 - x² - y² - z²|` absorbs rounding past unit length.
    pub fn calculate_w(&self) -> Self {
        let (x, y, z) = (self.x(), self.y(), self.z());
        Self::new(x, y, z, (1.0 - x * x - y * y - z * z).abs().sqrt())
    }

    /// Euler angles `(x, y, z)` in radians; inverse of [`Vec3::to_quat`].
    ///
    /// The Y angle is clamped to `[-π/2, π/2]`; at gimbal lock the split
    /// between X and Z is arbitrary.
    pub fn to_euler(&self) -> Vec3 {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let ex = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let ey = scalar::clamp(2.0 * (w * y - x * z), -1.0, 1.0).asin();
        let ez = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vec3::new(ex, ey, ez)
    }

    /// Rotates `v` by this (unit) quaternion.
    ///
    /// Uses `v + 2w(u × v) + 2u × (u × v)` with `u = (x, y, z)`.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        let u = self.xyz();
        let uv = u.cross(v);
        let uuv = u.cross(&uv);
        v.add(&uv.scale(2.0 * self.w())).add(&uuv.scale(2.0))
    }

    /// Converts to a row-major rotation matrix acting on column vectors.
    ///
    /// Branch-free doubled-cross-term expansion; the input is used as-is, so
    /// non-unit quaternions yield scaled rotations.
    pub fn to_mat3(&self) -> Mat3 {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Mat3::new([
            1.0 - (yy + zz),
            xy - wz,
            xz + wy,
            xy + wz,
            1.0 - (xx + zz),
            yz - wx,
            xz - wy,
            yz + wx,
            1.0 - (xx + yy),
        ])
    }

    /// Converts to a 4×4 rotation matrix (no translation).
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    /// Spherical linear interpolation from `a` (`t = 0`) to `b` (`t = 1`).
    ///
    /// - `|dot(a, b)| >= 1`: the inputs coincide, `a` is returned.
    /// - `sin(θ/2) < 0.001`: returns the plain average `(a + b) / 2`, avoiding
    ///   division by a vanishing sine.
    ///
    /// Does not correct for double cover; see [`Quat::short_mix`].
    pub fn mix(a: &Self, b: &Self, t: f32) -> Self {
        let cos_half = a.dot(b);
        if cos_half.abs() >= 1.0 {
            return *a;
        }

        let half = cos_half.acos();
        let sin_half = (1.0 - cos_half * cos_half).sqrt();
        if sin_half.abs() < MIX_LINEAR_SIN {
            trace!(cos_half, "quat mix: near-parallel, averaging");
            return a.scale(0.5).add(&b.scale(0.5));
        }

        let ratio_a = ((1.0 - t) * half).sin() / sin_half;
        let ratio_b = (t * half).sin() / sin_half;
        a.scale(ratio_a).add(&b.scale(ratio_b))
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// When `dot(a, b) < 0` the target is negated so the path stays within
    /// one hemisphere; when the inputs are nearly parallel
    /// (`cos > 0.9999`) a linear blend replaces the SLERP weights. `t` is
    /// clamped to `[0, 1]`.
    pub fn short_mix(a: &Self, b: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }

        let mut cos = a.dot(b);
        let mut target = *b;
        if cos < 0.0 {
            target = target.negate();
            cos = -cos;
        }

        let (k0, k1) = if cos > SHORT_MIX_LINEAR_COS {
            trace!(cos, "quat short_mix: near-parallel, linear blend");
            (1.0 - t, t)
        } else {
            let sin = (1.0 - cos * cos).sqrt();
            let angle = sin.atan2(cos);
            let inv_sin = 1.0 / sin;
            (((1.0 - t) * angle).sin() * inv_sin, (t * angle).sin() * inv_sin)
        };

        a.scale(k0).add(&target.scale(k1))
    }

    /// `true` when every component differs by at most `threshold`.
    ///
    /// Compares representations, not rotations: `q` and `-q` are unequal.
    pub fn equals(&self, other: &Self, threshold: f32) -> bool {
        scalar::all_within(&self.data, &other.data, threshold)
    }

    /// Comparison under an absolute/relative [`Tolerance`].
    pub fn equals_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.all_eq(&self.data, &other.data)
    }

    /// [`Quat::equals`] with the crate-wide [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Quat {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(&rhs)
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}
