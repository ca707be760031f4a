//! Pure transform builders.
//!
//! Every function here is total over its numeric domain and carries no shared
//! state. World poses are composed as `T · Rx · Ry · Rz · S`: translation
//! outermost, Euler rotations in fixed X, Y, Z order, scale innermost. That
//! order is load-bearing, changing it changes every model's orientation.

use glam::{Mat4, Vec3, Vec4};

/// Rotation about the X axis. The angle is given in degrees.
#[must_use]
pub fn rotation_x(angle_degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(angle_degrees.to_radians())
}

/// Rotation about the Y axis. The angle is given in degrees.
#[must_use]
pub fn rotation_y(angle_degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(angle_degrees.to_radians())
}

/// Rotation about the Z axis. The angle is given in degrees.
#[must_use]
pub fn rotation_z(angle_degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(angle_degrees.to_radians())
}

#[must_use]
pub fn translation(t: Vec3) -> Mat4 {
    Mat4::from_translation(t)
}

/// Non-uniform scale. Built from a diagonal so a zero component stays a
/// well-defined (singular) matrix rather than an assertion.
#[must_use]
pub fn scaling(s: Vec3) -> Mat4 {
    Mat4::from_diagonal(Vec4::new(s.x, s.y, s.z, 1.0))
}

/// Composes a model (world) matrix as `T · Rx · Ry · Rz · S`.
///
/// `rotation_degrees` holds Euler angles in degrees, applied X then Y then Z.
#[must_use]
pub fn compose_model(translation: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Mat4 {
    self::translation(translation)
        * rotation_x(rotation_degrees.x)
        * rotation_y(rotation_degrees.y)
        * rotation_z(rotation_degrees.z)
        * scaling(scale)
}

/// Normalizes `v`, returning the input unchanged when its length is zero.
///
/// Keeps the pipeline running through degenerate states (camera target equal
/// to eye mid-drag, zero-area triangle normals) instead of producing NaNs.
#[must_use]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > 0.0 { v / len_sq.sqrt() } else { v }
}

/// Right-handed look-at view matrix.
///
/// When `target == eye` the rotation block degenerates to identity and the
/// result is a pure translation by `-eye`.
#[must_use]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let forward = safe_normalize(target - eye);
    if forward.length_squared() == 0.0 {
        return Mat4::from_translation(-eye);
    }

    let right = safe_normalize(forward.cross(up));
    let new_up = right.cross(forward);

    Mat4::from_cols(
        Vec4::new(right.x, new_up.x, -forward.x, 0.0),
        Vec4::new(right.y, new_up.y, -forward.y, 0.0),
        Vec4::new(right.z, new_up.z, -forward.z, 0.0),
        Vec4::new(-right.dot(eye), -new_up.dot(eye), forward.dot(eye), 1.0),
    )
}

/// Right-handed perspective projection with `[0, 1]` depth range.
///
/// `fov_y_degrees` is the vertical field of view in degrees.
#[must_use]
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far)
}
