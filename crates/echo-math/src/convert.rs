// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Conversion bridges between the vector, matrix, and quaternion families.

use crate::{Mat3, Mat4, Quat, Vec3};

impl Vec3 {
    /// Interprets the components as Euler angles in radians and builds the
    /// equivalent quaternion.
    ///
    /// Rotation order is fixed: about X first, then Y, then Z
    /// (`q = q_z * q_y * q_x`). Each axis contributes an independent half-angle
    /// sine/cosine pair.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let q = Vec3::new(0.0, 0.0, FRAC_PI_2).to_quat();
    /// let expected = Quat::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_2).unwrap();
    /// assert!(q.approx_eq(&expected));
    /// ```
    pub fn to_quat(&self) -> Quat {
        let (sx, cx) = (self.x() * 0.5).sin_cos();
        let (sy, cy) = (self.y() * 0.5).sin_cos();
        let (sz, cz) = (self.z() * 0.5).sin_cos();

        Quat::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }
}

/// Which quaternion component [`Mat3::to_quat`] extracts by square root.
#[derive(Clone, Copy)]
enum Pivot {
    W,
    X,
    Y,
    Z,
}

impl Mat3 {
    /// Extracts the rotation as a unit quaternion.
    ///
    /// The four trace combinations `4w²-1`, `4x²-1`, `4y²-1`, `4z²-1` are
    /// compared and the largest picks the component taken by square root.
    /// The remaining three come from off-diagonal sums/differences divided
    /// by four times that component, which is then at least `1/2`, so the
    /// division never approaches zero (180° turns included).
    ///
    /// The matrix must be a pure rotation; scale or shear leaks into the
    /// result.
    pub fn to_quat(&self) -> Quat {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.to_array();

        let four_w = m00 + m11 + m22;
        let four_x = m00 - m11 - m22;
        let four_y = m11 - m00 - m22;
        let four_z = m22 - m00 - m11;

        let mut pivot = Pivot::W;
        let mut biggest = four_w;
        for (candidate, p) in [(four_x, Pivot::X), (four_y, Pivot::Y), (four_z, Pivot::Z)] {
            if candidate > biggest {
                biggest = candidate;
                pivot = p;
            }
        }

        let root = (biggest + 1.0).sqrt() * 0.5;
        let mult = 0.25 / root;

        match pivot {
            Pivot::W => Quat::new(
                (m21 - m12) * mult,
                (m02 - m20) * mult,
                (m10 - m01) * mult,
                root,
            ),
            Pivot::X => Quat::new(
                root,
                (m01 + m10) * mult,
                (m02 + m20) * mult,
                (m21 - m12) * mult,
            ),
            Pivot::Y => Quat::new(
                (m01 + m10) * mult,
                root,
                (m12 + m21) * mult,
                (m02 - m20) * mult,
            ),
            Pivot::Z => Quat::new(
                (m02 + m20) * mult,
                (m12 + m21) * mult,
                root,
                (m10 - m01) * mult,
            ),
        }
    }

    /// Embeds into the upper-left block of a 4×4 identity.
    pub fn to_mat4(&self) -> Mat4 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_array();
        Mat4::new([
            a00, a01, a02, 0.0, //
            a10, a11, a12, 0.0, //
            a20, a21, a22, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }
}

impl Mat4 {
    /// Upper-left 3×3 block (rotation/scale part).
    pub fn to_mat3(&self) -> Mat3 {
        let m = self.to_array();
        Mat3::new([
            m[0], m[1], m[2], //
            m[4], m[5], m[6], //
            m[8], m[9], m[10], //
        ])
    }
}

impl From<Quat> for Mat3 {
    fn from(value: Quat) -> Self {
        value.to_mat3()
    }
}

impl From<Quat> for Mat4 {
    fn from(value: Quat) -> Self {
        value.to_mat4()
    }
}

impl From<Mat3> for Quat {
    fn from(value: Mat3) -> Self {
        value.to_quat()
    }
}

impl From<Mat3> for Mat4 {
    fn from(value: Mat3) -> Self {
        value.to_mat4()
    }
}

impl From<Mat4> for Mat3 {
    fn from(value: Mat4) -> Self {
        value.to_mat3()
    }
}
