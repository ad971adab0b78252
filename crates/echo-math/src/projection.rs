// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera and projection matrix factories.
//!
//! All factories follow OpenGL clip conventions: the camera looks down its
//! local −Z axis and clip-space depth spans `[-w, w]`. Matrices are row-major
//! and act on column vectors like every other [`Mat4`].

use core::f32::consts::PI;

use tracing::debug;

use crate::error::{MathError, Result};
use crate::{Mat4, Vec3};

impl Mat4 {
    /// Perspective frustum from the six clip-plane distances.
    ///
    /// `left`/`right`/`bottom`/`top` are measured on the near plane.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let nf = far - near;

        Self::new([
            (near * 2.0) / rl, 0.0, (right + left) / rl, 0.0, //
            0.0, (near * 2.0) / tb, (top + bottom) / tb, 0.0, //
            0.0, 0.0, -(far + near) / nf, -(far * near * 2.0) / nf, //
            0.0, 0.0, -1.0, 0.0, //
        ])
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y_deg` is the full vertical field of view in **degrees**; the
    /// horizontal extent follows from `aspect` (width / height).
    ///
    /// # Examples
    /// ```
    /// use echo_math::Mat4;
    /// let p = Mat4::perspective(45.0, 1.0, 1.0, 100.0);
    /// // cot(22.5°)
    /// assert!((p.at(0) - 2.414_213_5).abs() < 1e-5);
    /// ```
    pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fov_y_deg * PI / 360.0).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Orthographic (parallel) projection of the given box.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let nf = far - near;

        Self::new([
            2.0 / rl, 0.0, 0.0, -(left + right) / rl, //
            0.0, 2.0 / tb, 0.0, -(top + bottom) / tb, //
            0.0, 0.0, -2.0 / nf, -(far + near) / nf, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// View matrix placing the camera at `eye` looking towards `target`.
    ///
    /// The basis is orthogonalized Gram–Schmidt style from the line of sight
    /// and `up`: `back = normalize(eye - target)`,
    /// `right = normalize(up × back)`, `true_up = back × right`. If `up` is
    /// parallel to the line of sight the basis collapses to zero vectors.
    ///
    /// When `eye` and `target` coincide (within [`crate::EPSILON`]) no
    /// orientation exists and the identity matrix is returned instead of an
    /// error. Use [`Mat4::try_look_at`] to observe that case.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::try_look_at(eye, target, up).unwrap_or(Self::IDENTITY)
    }

    /// Strict [`Mat4::look_at`]: coincident `eye`/`target` fail with
    /// [`MathError::CoincidentLookAt`].
    pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        if eye.approx_eq(&target) {
            debug!(eye = ?eye.to_array(), "look_at: eye and target coincide");
            return Err(MathError::CoincidentLookAt);
        }

        let back = eye.sub(&target).normalize();
        let right = up.cross(&back).normalize();
        let true_up = back.cross(&right).normalize();

        Ok(Self::new([
            right.x(), right.y(), right.z(), -right.dot(&eye), //
            true_up.x(), true_up.y(), true_up.z(), -true_up.dot(&eye), //
            back.x(), back.y(), back.z(), -back.dot(&eye), //
            0.0, 0.0, 0.0, 1.0, //
        ]))
    }
}
