// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_math::{MathError, Tolerance, Vec2, Vec3, Vec4};

#[test]
fn vec3_add_concrete_scenario() {
    let sum = Vec3::from([1.0, 2.0, 3.0]).add(&Vec3::from([4.0, 5.0, 6.0]));
    assert_eq!(sum.to_array(), [5.0, 7.0, 9.0]);
    assert_eq!(
        Vec3::sum(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, 5.0, 6.0)),
        sum
    );
}

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3::new(1.0, -2.0, 0.5);
    let b = Vec3::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
    assert_eq!(Vec3::product(&a, &b).to_array(), [-3.0, -8.0, 0.75]);
    assert_eq!(
        Vec3::quotient(&Vec3::new(6.0, 8.0, 1.0), &Vec3::new(3.0, -2.0, 4.0)).to_array(),
        [2.0, -4.0, 0.25]
    );
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    v /= 0.5;
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
}

#[test]
fn normalize_policy_unit_zero_and_general() {
    // Exact unit vectors are returned bit-for-bit.
    assert_eq!(Vec3::UNIT_Y.normalize(), Vec3::UNIT_Y);
    // Zero stays zero instead of turning into NaN.
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);

    let n = Vec3::new(0.0, 3.0, 4.0).normalize();
    assert!(n.approx_eq(&Vec3::new(0.0, 0.6, 0.8)));
    assert!((n.length() - 1.0).abs() <= 1e-6);
}

#[test]
fn cross_products() {
    assert!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y).approx_eq(&Vec3::UNIT_Z));
    assert!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X).approx_eq(&-Vec3::UNIT_Z));
    let c = Vec2::new(1.0, 0.0).cross(&Vec2::new(0.0, 2.0));
    assert_eq!(c.to_array(), [0.0, 0.0, 2.0]);
}

#[test]
fn distance_direction_and_mix() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    let b = Vec3::new(4.0, 5.0, 1.0);
    assert_eq!(a.squared_distance(&b), 25.0);
    assert_eq!(a.distance(&b), 5.0);
    assert!(Vec3::direction(&a, &b).approx_eq(&Vec3::new(0.6, 0.8, 0.0)));
    assert_eq!(Vec3::direction(&a, &a), Vec3::ZERO);
    assert!(Vec3::mix(&a, &b, 0.5).approx_eq(&Vec3::new(2.5, 3.0, 1.0)));
    assert!(Vec2::mix(&Vec2::ZERO, &Vec2::ONE, 0.25).approx_eq(&Vec2::new(0.25, 0.25)));
}

#[test]
fn equals_uses_threshold_not_bits() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(1.0 + 5e-6, 2.0, 3.0 - 5e-6);
    assert!(a.approx_eq(&b));
    assert!(!a.equals(&b, 1e-7));
    assert!(a.equals(&Vec3::new(1.1, 2.0, 3.0), 0.2));

    let big = Vec3::new(1.0e6, 0.0, 0.0);
    let near_big = Vec3::new(1.0e6 + 0.5, 0.0, 0.0);
    assert!(!big.approx_eq(&near_big));
    assert!(big.equals_with(&near_big, &Tolerance::new(1e-6, 1e-6)));
}

#[test]
fn slice_constructors_check_length() {
    assert_eq!(
        Vec2::from_slice(&[1.0, 2.0, 3.0]),
        Err(MathError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
    assert_eq!(
        Vec4::try_from(&[1.0, 2.0, 3.0][..]),
        Err(MathError::DimensionMismatch {
            expected: 4,
            actual: 3
        })
    );
    let v = Vec4::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn vectors_are_pod_for_gpu_buffers() {
    let verts = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    let flat: &[f32] = bytemuck::cast_slice(&verts);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(bytemuck::bytes_of(&Vec4::ONE).len(), 16);
}
