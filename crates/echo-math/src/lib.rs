// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: fixed-size linear algebra for Echo's transform pipelines.
//!
//! Provides 2/3/4-component vectors, 2×2/3×3/4×4 matrices, and quaternions
//! with the determinant, inverse, rotation, interpolation, and projection
//! routines that cameras, scene graphs, and animation code need.
//!
//! # Conventions
//! - All scalars are `f32`.
//! - Matrices are stored **row-major** (`index = row * N + col`) and act on
//!   **column vectors**: `m.transform(v)` computes `M · v`, and
//!   `a.multiply(&b)` computes `A · B`, so `A · B` applied to `v` runs `B`
//!   first. Use `to_cols_array` when uploading to GPU APIs that expect
//!   column-major data.
//! - Quaternions are `(x, y, z, w)` with `w` as the scalar part.
//! - Degenerate geometry (singular matrices, zero axes, zero quaternions) is
//!   reported through [`MathError`]; nothing in this crate panics on valid
//!   `f32` input.
//!
//! ```
//! use echo_math::{Mat4, Vec3};
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 0.0, 5.0),
//!     Vec3::ZERO,
//!     Vec3::UNIT_Y,
//! );
//! let p = view.transform_point(&Vec3::ZERO);
//! assert!(p.approx_eq(&Vec3::new(0.0, 0.0, -5.0)));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    // Exact zero/one checks are part of the documented degenerate policy.
    clippy::float_cmp
)]

mod convert;
mod error;
mod mat2;
mod mat3;
mod mat4;
mod projection;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub mod scalar;

pub use error::{MathError, Result};
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{clamp, deg_to_rad, rad_to_deg, Tolerance, EPSILON};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
