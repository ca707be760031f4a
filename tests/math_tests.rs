//! Math/transform utility tests
//!
//! Tests for:
//! - Axis rotations (degrees in, radians internally)
//! - compose_model T·Rx·Ry·Rz·S ordering
//! - safe_normalize zero-vector guard
//! - look_at construction and degenerate eye == target case
//! - Perspective projection depth range
//! - OrbitCamera eye placement

use glam::{Mat4, Vec3, Vec4};
use keystage::camera::OrbitCamera;
use keystage::math;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    m.transform_point3(p)
}

// ============================================================================
// Axis Rotations
// ============================================================================

#[test]
fn rotation_z_quarter_turn_maps_x_to_y() {
    let m = math::rotation_z(90.0);
    let p = transform_point(m, Vec3::X);
    assert!(vec3_approx(p, Vec3::Y), "got {p:?}");
}

#[test]
fn rotation_x_quarter_turn_maps_y_to_z() {
    let m = math::rotation_x(90.0);
    let p = transform_point(m, Vec3::Y);
    assert!(vec3_approx(p, Vec3::Z), "got {p:?}");
}

#[test]
fn rotation_y_quarter_turn_maps_z_to_x() {
    let m = math::rotation_y(90.0);
    let p = transform_point(m, Vec3::Z);
    assert!(vec3_approx(p, Vec3::X), "got {p:?}");
}

#[test]
fn rotation_zero_degrees_is_identity() {
    for m in [
        math::rotation_x(0.0),
        math::rotation_y(0.0),
        math::rotation_z(0.0),
    ] {
        let p = transform_point(m, Vec3::new(1.0, 2.0, 3.0));
        assert!(vec3_approx(p, Vec3::new(1.0, 2.0, 3.0)));
    }
}

// ============================================================================
// compose_model
// ============================================================================

#[test]
fn compose_translation_only_translates_exactly() {
    // For all T: compose_model(T, 0, 1) moves a point by exactly T.
    let cases = [
        Vec3::ZERO,
        Vec3::new(5.0, -3.0, 2.5),
        Vec3::new(-100.0, 0.25, 99.0),
    ];
    for t in cases {
        let m = math::compose_model(t, Vec3::ZERO, Vec3::ONE);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(
            vec3_approx(transform_point(m, p), p + t),
            "T={t:?} distorted the point"
        );
    }
}

#[test]
fn compose_equals_product_of_parts() {
    let t = Vec3::new(1.0, 2.0, 3.0);
    let r = Vec3::new(30.0, 45.0, 60.0);
    let s = Vec3::new(2.0, 0.5, 1.5);

    let composed = math::compose_model(t, r, s);
    let manual = math::translation(t)
        * math::rotation_x(r.x)
        * math::rotation_y(r.y)
        * math::rotation_z(r.z)
        * math::scaling(s);

    let p = Vec3::new(0.7, -1.3, 2.2);
    assert!(vec3_approx(
        transform_point(composed, p),
        transform_point(manual, p)
    ));
}

#[test]
fn compose_scale_applies_before_rotation() {
    // Scale innermost: (1,0,0) scaled by 2 → (2,0,0), then Rz 90° → (0,2,0).
    let m = math::compose_model(Vec3::ZERO, Vec3::new(0.0, 0.0, 90.0), Vec3::splat(2.0));
    let p = transform_point(m, Vec3::X);
    assert!(vec3_approx(p, Vec3::new(0.0, 2.0, 0.0)), "got {p:?}");
}

#[test]
fn compose_rotation_order_is_x_then_y_then_z() {
    let r = Vec3::new(90.0, 90.0, 0.0);
    let m = math::compose_model(Vec3::ZERO, r, Vec3::ONE);

    // Rx(90) then Ry(90) applied to +Y: world transform is Rx · Ry, so the
    // point passes through Ry first (+Y fixed), then Rx maps +Y to +Z.
    let p = transform_point(m, Vec3::Y);
    assert!(vec3_approx(p, Vec3::Z), "got {p:?}");
}

#[test]
fn compose_zero_scale_is_total() {
    // Degenerate but defined: everything collapses onto the translation.
    let t = Vec3::new(4.0, 5.0, 6.0);
    let m = math::compose_model(t, Vec3::ZERO, Vec3::ZERO);
    let p = transform_point(m, Vec3::new(9.0, 9.0, 9.0));
    assert!(vec3_approx(p, t));
}

// ============================================================================
// safe_normalize
// ============================================================================

#[test]
fn safe_normalize_unit_result_for_nonzero() {
    let v = math::safe_normalize(Vec3::new(3.0, 0.0, 4.0));
    assert!(approx(v.length(), 1.0));
    assert!(vec3_approx(v, Vec3::new(0.6, 0.0, 0.8)));
}

#[test]
fn safe_normalize_zero_vector_unchanged() {
    let v = math::safe_normalize(Vec3::ZERO);
    assert_eq!(v, Vec3::ZERO);
    assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn look_at_moves_eye_to_origin() {
    let eye = Vec3::new(0.0, -10.0, 10.0);
    let view = math::look_at(eye, Vec3::ZERO, Vec3::Y);
    let p = view.transform_point3(eye);
    assert!(vec3_approx(p, Vec3::ZERO), "eye should map to origin, got {p:?}");
}

#[test]
fn look_at_target_on_negative_view_z() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = math::look_at(eye, Vec3::ZERO, Vec3::Y);
    let p = view.transform_point3(Vec3::ZERO);
    // Right-handed: the target sits straight ahead, down -Z in view space.
    assert!(vec3_approx(p, Vec3::new(0.0, 0.0, -10.0)), "got {p:?}");
}

#[test]
fn look_at_matches_glam_reference() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let target = Vec3::new(-1.0, 0.5, 2.0);
    let ours = math::look_at(eye, target, Vec3::Y);
    let reference = Mat4::look_at_rh(eye, target, Vec3::Y);
    for col in 0..4 {
        let a = ours.col(col);
        let b = reference.col(col);
        assert!(
            (a - b).abs().max_element() < 1e-4,
            "column {col}: {a:?} vs {b:?}"
        );
    }
}

#[test]
fn look_at_degenerate_eye_equals_target() {
    // Must not divide by zero; rotation block degenerates to identity.
    let eye = Vec3::new(2.0, 3.0, 4.0);
    let view = math::look_at(eye, eye, Vec3::Y);
    let p = view.transform_point3(eye);
    assert!(vec3_approx(p, Vec3::ZERO));
    assert!(view.is_finite());
}

#[test]
fn look_at_collinear_up_stays_finite() {
    // Up parallel to the view direction: degenerate basis, but still finite.
    let view = math::look_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
    assert!(view.is_finite());
}

// ============================================================================
// perspective
// ============================================================================

#[test]
fn perspective_depth_range_zero_to_one() {
    let proj = math::perspective(45.0, 1.0, 0.1, 100.0);

    let near_clip = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
    assert!(approx(near_clip.z / near_clip.w, 0.0), "near plane should map to 0");

    let far_clip = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!(approx(far_clip.z / far_clip.w, 1.0), "far plane should map to 1");
}

#[test]
fn perspective_aspect_scales_x() {
    let square = math::perspective(45.0, 1.0, 0.1, 100.0);
    let wide = math::perspective(45.0, 2.0, 0.1, 100.0);
    let p = Vec4::new(1.0, 0.0, -10.0, 1.0);

    let sx = (square * p).x / (square * p).w;
    let wx = (wide * p).x / (wide * p).w;
    assert!(approx(wx * 2.0, sx), "double aspect should halve NDC x");
}

// ============================================================================
// OrbitCamera
// ============================================================================

#[test]
fn orbit_eye_at_zero_angles_sits_on_z() {
    let cam = OrbitCamera {
        target: Vec3::ZERO,
        distance: 10.0,
        azimuth_degrees: 0.0,
        elevation_degrees: 0.0,
        ..OrbitCamera::default()
    };
    assert!(vec3_approx(cam.eye(), Vec3::new(0.0, 0.0, 10.0)));
}

#[test]
fn orbit_eye_elevation_ninety_sits_above_target() {
    let target = Vec3::new(1.0, 2.0, 3.0);
    let cam = OrbitCamera {
        target,
        distance: 5.0,
        azimuth_degrees: 0.0,
        elevation_degrees: 90.0,
        ..OrbitCamera::default()
    };
    assert!(vec3_approx(cam.eye(), target + Vec3::new(0.0, 5.0, 0.0)));
}

#[test]
fn orbit_azimuth_sweeps_around_y() {
    let cam = OrbitCamera {
        target: Vec3::ZERO,
        distance: 10.0,
        azimuth_degrees: 90.0,
        elevation_degrees: 0.0,
        ..OrbitCamera::default()
    };
    assert!(vec3_approx(cam.eye(), Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn orbit_view_matrix_centers_target() {
    let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 12.0);
    let view = cam.view_matrix();
    let p = view.transform_point3(cam.target);
    // Target straight ahead at orbit distance.
    assert!(approx(p.x, 0.0) && approx(p.y, 0.0));
    assert!(approx(p.z, -12.0), "got {}", p.z);
}

#[test]
fn orbit_zero_distance_is_total() {
    let cam = OrbitCamera::new(Vec3::ZERO, 0.0);
    assert!(cam.view_matrix().is_finite());
}
