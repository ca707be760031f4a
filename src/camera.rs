//! Orbit camera parameters and the view/projection they produce.
//!
//! Input handling is out of scope; the host's orbit controls produce a
//! distance, an azimuth and an elevation, and this type turns them into the
//! matrices the transform pipeline consumes.

use glam::{Mat4, Vec3};

use crate::math;

/// Camera orbiting a target point on a spherical shell.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Distance from the target, in world units.
    pub distance: f32,
    /// Rotation around the world Y axis, in degrees.
    pub azimuth_degrees: f32,
    /// Angle above the horizon, in degrees.
    pub elevation_degrees: f32,
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 14.14,
            azimuth_degrees: 0.0,
            elevation_degrees: 45.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl OrbitCamera {
    #[must_use]
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance,
            ..Self::default()
        }
    }

    /// Eye position on the orbit shell.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let azimuth = self.azimuth_degrees.to_radians();
        let elevation = self.elevation_degrees.to_radians();
        let offset = Vec3::new(
            elevation.cos() * azimuth.sin(),
            elevation.sin(),
            elevation.cos() * azimuth.cos(),
        );
        self.target + offset * self.distance
    }

    /// View matrix for the current orbit parameters. Total even when the
    /// distance is zero (eye on target degenerates gracefully).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        math::look_at(self.eye(), self.target, Vec3::Y)
    }

    /// Perspective projection for the given viewport aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        math::perspective(self.fov_y_degrees, aspect, self.near, self.far)
    }
}
