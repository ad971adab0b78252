// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar tolerance policy and helpers.
//!
//! [`EPSILON`] is the single threshold behind every `approx_eq` in the crate.
//! Callers needing a different policy (e.g. relative error for large
//! coordinates) construct a [`Tolerance`] and use the `equals_with` methods.

use core::f32::consts::TAU;

/// Global epsilon used by approximate-equality checks.
pub const EPSILON: f32 = 1e-5;

/// Absolute/relative error budget for approximate comparisons.
///
/// With the `serde` feature enabled this deserializes from config files,
/// with either field optional:
///
/// ```json
/// { "absolute": 1e-6, "relative": 1e-5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Error always allowed regardless of magnitude.
    pub absolute: f32,
    /// Error allowed per unit of reference magnitude.
    pub relative: f32,
}

impl Tolerance {
    /// Creates a tolerance from absolute and relative budgets.
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Purely absolute tolerance, matching `equals(.., threshold)`.
    pub const fn absolute(threshold: f32) -> Self {
        Self::new(threshold, 0.0)
    }

    /// Largest error accepted when comparing against `reference`.
    pub fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `a` and `b` agree within this tolerance.
    ///
    /// The larger magnitude of the two is used as the reference so the check
    /// is symmetric.
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        let reference = a.abs().max(b.abs());
        (a - b).abs() <= self.allowed_error(reference)
    }

    /// Applies [`Tolerance::approx_eq`] pairwise across two slices of equal
    /// length.
    pub(crate) fn all_eq(&self, a: &[f32], b: &[f32]) -> bool {
        a.iter().zip(b).all(|(x, y)| self.approx_eq(*x, *y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::absolute(EPSILON)
    }
}

/// `|a - b| <= threshold` for every component pair.
pub(crate) fn all_within(a: &[f32], b: &[f32], threshold: f32) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= threshold)
}

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_budget_scales_with_magnitude() {
        let tol = Tolerance::new(1e-6, 1e-4);
        assert!(tol.approx_eq(10_000.0, 10_000.5));
        assert!(!tol.approx_eq(1.0, 1.001));
    }

    #[test]
    fn default_is_absolute_epsilon() {
        let tol = Tolerance::default();
        assert_eq!(tol.allowed_error(1e9), EPSILON);
    }
}
