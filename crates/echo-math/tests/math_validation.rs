// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture-driven validation of the linear-algebra kernel.
//!
//! Expected values in `fixtures/math-fixtures.json` were produced in double
//! precision and rounded to seven significant digits; the harness compares
//! the `f32` results under the tolerance recorded alongside them.

#![allow(missing_docs)]
#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use serde::Deserialize;

use echo_math::{self as math, Mat3, Mat4, Quat, Tolerance, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: FixtureTolerance,
    scalars: ScalarFixtures,
    vec3: Vec3Fixtures,
    mat3: Mat3Fixtures,
    mat4: Mat4Fixtures,
    quat: QuatFixtures,
    projection: ProjectionFixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("scalars.clamp", &self.scalars.clamp);
        ensure("scalars.deg_to_rad", &self.scalars.deg_to_rad);
        ensure("scalars.rad_to_deg", &self.scalars.rad_to_deg);
        ensure("vec3.add", &self.vec3.add);
        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("mat3.determinant", &self.mat3.determinant);
        ensure("mat3.inverse", &self.mat3.inverse);
        ensure("mat4.multiply", &self.mat4.multiply);
        ensure("mat4.inverse", &self.mat4.inverse);
        ensure("mat4.transform_point", &self.mat4.transform_point);
        ensure("quat.from_axis_angle", &self.quat.from_axis_angle);
        ensure("quat.multiply", &self.quat.multiply);
        ensure("quat.to_mat3", &self.quat.to_mat3);
        ensure("quat.short_mix", &self.quat.short_mix);
        ensure("projection.perspective", &self.projection.perspective);
        ensure("projection.look_at", &self.projection.look_at);
    }
}

// Mirrors the JSON shape; converted into the crate's `Tolerance` on use.
#[derive(Debug, Clone, Copy, Deserialize)]
struct FixtureTolerance {
    #[serde(default = "FixtureTolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "FixtureTolerance::default_relative")]
    relative: f32,
}

impl FixtureTolerance {
    const fn default_absolute() -> f32 {
        1e-5
    }

    const fn default_relative() -> f32 {
        1e-5
    }
}

impl Default for FixtureTolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

impl From<FixtureTolerance> for Tolerance {
    fn from(value: FixtureTolerance) -> Self {
        Self::new(value.absolute, value.relative)
    }
}

#[derive(Debug, Deserialize)]
struct ScalarFixtures {
    clamp: Vec<ClampFixture>,
    deg_to_rad: Vec<UnaryFixture>,
    rad_to_deg: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct ClampFixture {
    value: f32,
    min: f32,
    max: f32,
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f32,
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    add: Vec<Vec3BinaryFixture>,
    cross: Vec<Vec3BinaryFixture>,
    normalize: Vec<Vec3UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct Vec3BinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Vec3UnaryFixture {
    value: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat3Fixtures {
    determinant: Vec<Mat3ScalarFixture>,
    inverse: Vec<Mat3UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct Mat3ScalarFixture {
    value: [f32; 9],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Mat3UnaryFixture {
    value: [f32; 9],
    expected: [f32; 9],
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    multiply: Vec<Mat4BinaryFixture>,
    inverse: Vec<Mat4UnaryFixture>,
    transform_point: Vec<Mat4Vec3Fixture>,
}

#[derive(Debug, Deserialize)]
struct Mat4BinaryFixture {
    a: [f32; 16],
    b: [f32; 16],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct Mat4UnaryFixture {
    value: [f32; 16],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct Mat4Vec3Fixture {
    matrix: [f32; 16],
    vector: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct QuatFixtures {
    from_axis_angle: Vec<QuatAxisAngleFixture>,
    multiply: Vec<QuatBinaryFixture>,
    to_mat3: Vec<QuatMat3Fixture>,
    short_mix: Vec<QuatMixFixture>,
}

#[derive(Debug, Deserialize)]
struct QuatAxisAngleFixture {
    axis: [f32; 3],
    angle: f32,
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct QuatBinaryFixture {
    a: [f32; 4],
    b: [f32; 4],
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct QuatMat3Fixture {
    value: [f32; 4],
    expected: [f32; 9],
}

#[derive(Debug, Deserialize)]
struct QuatMixFixture {
    a: [f32; 4],
    b: [f32; 4],
    t: f32,
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct ProjectionFixtures {
    perspective: Vec<PerspectiveFixture>,
    look_at: Vec<LookAtFixture>,
}

#[derive(Debug, Deserialize)]
struct PerspectiveFixture {
    fov_y_deg: f32,
    aspect: f32,
    near: f32,
    far: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct LookAtFixture {
    eye: [f32; 3],
    target: [f32; 3],
    up: [f32; 3],
    expected: [f32; 16],
}

fn tolerance() -> Tolerance {
    FIXTURES.tolerance.into()
}

fn assert_scalar(actual: f32, expected: f32, ctx: &str) {
    let tol = tolerance();
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_slice(actual: &[f32], expected: &[f32], ctx: &str) {
    assert_eq!(actual.len(), expected.len(), "{ctx}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_scalar(*a, *e, &format!("{ctx}[{i}]"));
    }
}

#[test]
fn scalar_fixtures_all_match() {
    for fix in &FIXTURES.scalars.clamp {
        assert_scalar(
            math::clamp(fix.value, fix.min, fix.max),
            fix.expected,
            &format!("scalars.clamp value={} range=[{}, {}]", fix.value, fix.min, fix.max),
        );
    }
    for fix in &FIXTURES.scalars.deg_to_rad {
        assert_scalar(
            math::deg_to_rad(fix.value),
            fix.expected,
            &format!("scalars.deg_to_rad value={}", fix.value),
        );
    }
    for fix in &FIXTURES.scalars.rad_to_deg {
        assert_scalar(
            math::rad_to_deg(fix.value),
            fix.expected,
            &format!("scalars.rad_to_deg value={}", fix.value),
        );
    }
}

#[test]
fn vec3_fixtures_cover_operations() {
    for fix in &FIXTURES.vec3.add {
        let actual = Vec3::from(fix.a).add(&Vec3::from(fix.b));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("vec3.add a={:?} b={:?}", fix.a, fix.b),
        );
    }
    for fix in &FIXTURES.vec3.cross {
        let actual = Vec3::from(fix.a).cross(&Vec3::from(fix.b));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("vec3.cross a={:?} b={:?}", fix.a, fix.b),
        );
    }
    for (idx, fix) in FIXTURES.vec3.normalize.iter().enumerate() {
        let actual = Vec3::from(fix.value).normalize();
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("vec3.normalize#[{idx}] value={:?}", fix.value),
        );
    }
}

#[test]
fn mat3_fixtures_match_reference_algebra() {
    for fix in &FIXTURES.mat3.determinant {
        assert_scalar(
            Mat3::from(fix.value).determinant(),
            fix.expected,
            &format!("mat3.determinant value={:?}", fix.value),
        );
    }
    for (i, fix) in FIXTURES.mat3.inverse.iter().enumerate() {
        let actual = Mat3::from(fix.value)
            .inverse()
            .expect("fixture matrices are invertible");
        assert_slice(&actual.to_array(), &fix.expected, &format!("mat3.inverse[{i}]"));
    }
}

#[test]
fn mat4_fixtures_validate_transformations() {
    for (i, fix) in FIXTURES.mat4.multiply.iter().enumerate() {
        let actual = Mat4::from(fix.a).multiply(&Mat4::from(fix.b));
        assert_slice(&actual.to_array(), &fix.expected, &format!("mat4.multiply[{i}]"));
    }
    for (i, fix) in FIXTURES.mat4.inverse.iter().enumerate() {
        let actual = Mat4::from(fix.value)
            .inverse()
            .expect("fixture matrices are invertible");
        assert_slice(&actual.to_array(), &fix.expected, &format!("mat4.inverse[{i}]"));
    }
    for fix in &FIXTURES.mat4.transform_point {
        // Fixture vectors are points (homogeneous w = 1).
        let actual = Mat4::from(fix.matrix).transform_point(&Vec3::from(fix.vector));
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("mat4.transform_point vector={:?}", fix.vector),
        );
    }
}

#[test]
fn quat_fixtures_validate_rotations() {
    for fix in &FIXTURES.quat.from_axis_angle {
        let actual = Quat::from_axis_angle(&Vec3::from(fix.axis), fix.angle)
            .expect("fixture axes are non-zero");
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("quat.from_axis_angle axis={:?} angle={}", fix.axis, fix.angle),
        );
    }
    for (i, fix) in FIXTURES.quat.multiply.iter().enumerate() {
        let actual = Quat::from(fix.a).multiply(&Quat::from(fix.b));
        assert_slice(&actual.to_array(), &fix.expected, &format!("quat.multiply[{i}]"));
    }
    for (i, fix) in FIXTURES.quat.to_mat3.iter().enumerate() {
        let actual = Quat::from(fix.value).to_mat3();
        assert_slice(&actual.to_array(), &fix.expected, &format!("quat.to_mat3[{i}]"));
    }
    for (i, fix) in FIXTURES.quat.short_mix.iter().enumerate() {
        let actual = Quat::short_mix(&Quat::from(fix.a), &Quat::from(fix.b), fix.t);
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("quat.short_mix[{i}] t={}", fix.t),
        );
    }
}

#[test]
fn projection_fixtures_match_reference_matrices() {
    for fix in &FIXTURES.projection.perspective {
        let actual = Mat4::perspective(fix.fov_y_deg, fix.aspect, fix.near, fix.far);
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("projection.perspective fov={} aspect={}", fix.fov_y_deg, fix.aspect),
        );
    }
    for fix in &FIXTURES.projection.look_at {
        let actual = Mat4::look_at(
            Vec3::from(fix.eye),
            Vec3::from(fix.target),
            Vec3::from(fix.up),
        );
        assert_slice(
            &actual.to_array(),
            &fix.expected,
            &format!("projection.look_at eye={:?} target={:?}", fix.eye, fix.target),
        );
    }
}
