// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_math::{Mat4, MathError, Vec3, Vec4};

#[test]
fn perspective_concrete_scenario() {
    let p = Mat4::perspective(45.0, 1.0, 1.0, 100.0);
    assert!((p.at(0) - 2.414_213).abs() < 1e-5, "at(0) = {}", p.at(0));
    assert!((p.at(5) - 2.414_213).abs() < 1e-5);
    assert_eq!(p.at(14), -1.0);
}

#[test]
fn perspective_delegates_to_frustum() {
    let near = 0.5;
    let top = near * (60.0_f32.to_radians() * 0.5).tan();
    let right = top * 1.5;
    let expected = Mat4::frustum(-right, right, -top, top, near, 200.0);
    assert!(Mat4::perspective(60.0, 1.5, near, 200.0).approx_eq(&expected));
}

#[test]
fn perspective_maps_near_and_far_planes() {
    let p = Mat4::perspective(90.0, 2.0, 1.0, 10.0);
    let project = |z: f32| {
        let clip = p.transform(&Vec4::new(0.0, 0.0, z, 1.0));
        clip.z() / clip.w()
    };
    assert!((project(-1.0) + 1.0).abs() < 1e-5);
    assert!((project(-10.0) - 1.0).abs() < 1e-5);
}

#[test]
fn orthographic_maps_box_to_unit_cube() {
    let o = Mat4::orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);
    assert!(o
        .transform_point(&Vec3::new(0.0, 600.0, 0.0))
        .approx_eq(&Vec3::new(-1.0, -1.0, 0.0)));
    assert!(o
        .transform_point(&Vec3::new(800.0, 0.0, 0.0))
        .approx_eq(&Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn look_at_coincident_points_is_identity() {
    for v in [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-50.0, 0.0, 7.5)] {
        assert_eq!(Mat4::look_at(v, v, Vec3::UNIT_Y), Mat4::IDENTITY);
        assert_eq!(
            Mat4::try_look_at(v, v, Vec3::UNIT_Y),
            Err(MathError::CoincidentLookAt)
        );
    }
}

#[test]
fn look_at_moves_target_onto_negative_z() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let target = Vec3::new(-1.0, 0.5, 2.0);
    let view = Mat4::look_at(eye, target, Vec3::UNIT_Y);

    assert!(view.transform_point(&eye).approx_eq(&Vec3::ZERO));
    let t = view.transform_point(&target);
    let dist = eye.distance(&target);
    assert!(t.approx_eq(&Vec3::new(0.0, 0.0, -dist)), "{t:?}");
}

#[test]
fn look_at_basis_is_orthonormal() {
    let view = Mat4::look_at(
        Vec3::new(0.0, 10.0, 10.0),
        Vec3::ZERO,
        Vec3::UNIT_Y,
    );
    let rot = view.to_mat3();
    let product = rot.multiply(&rot.transpose());
    assert!(product.approx_eq(&echo_math::Mat3::IDENTITY));
    // Camera up stays in the plane spanned by world up and the line of sight.
    assert!(rot.row(1).y() > 0.0);
}
