// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for degenerate geometric input.

/// Recoverable conditions reported by matrix, quaternion, and constructor
/// operations.
///
/// Every variant is deterministic: retrying with the same input yields the
/// same error. Only different input resolves the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Determinant is exactly zero; the matrix has no inverse.
    #[error("[MATH_SINGULAR_MATRIX] determinant is zero")]
    SingularMatrix,
    /// Rotation axis has zero length.
    #[error("[MATH_DEGENERATE_AXIS] rotation axis has zero length")]
    DegenerateAxis,
    /// Quaternion has zero squared length and cannot be inverted.
    #[error("[MATH_DEGENERATE_QUATERNION] quaternion has zero length")]
    DegenerateQuaternion,
    /// Eye and target coincide, so no view orientation exists.
    ///
    /// Only [`crate::Mat4::try_look_at`] reports this;
    /// [`crate::Mat4::look_at`] falls back to the identity matrix.
    #[error("[MATH_COINCIDENT_LOOK_AT] eye and target coincide")]
    CoincidentLookAt,
    /// Input slice length does not match the fixed size of the target type.
    #[error("[MATH_DIMENSION_MISMATCH] expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Number of components the type stores.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MathError>;

/// Copies `values` into a fixed-size array or reports the length mismatch.
pub(crate) fn exact<const N: usize>(values: &[f32]) -> Result<[f32; N]> {
    <[f32; N]>::try_from(values).map_err(|_| MathError::DimensionMismatch {
        expected: N,
        actual: values.len(),
    })
}
