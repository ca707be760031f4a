//! Model entity: geometry handle, live transform parameters, color,
//! visibility and the embedded keyframe track.

use glam::{Mat4, Vec3};

use crate::animation::TranslationTrack;
use crate::errors::{KeystageError, Result};
use crate::geometry::GeometryHandle;
use crate::math;

/// RGBA color, each channel clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }
}

impl Default for Rgba {
    /// Neutral opaque gray, the color a freshly loaded model starts with.
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.6, a: 1.0 }
    }
}

/// A staged mesh instance.
///
/// Holds a non-owning reference to geometry in the [`GeometryStore`]
/// (geometry outlives every model; there is no unload path), the live
/// transform parameters edited in positioning mode, and the keyframe track
/// sampled in rendering mode.
///
/// `rotation` is Euler angles in degrees, applied in fixed X, Y, Z order.
///
/// [`GeometryStore`]: crate::geometry::GeometryStore
#[derive(Debug, Clone)]
pub struct Model {
    geometry: GeometryHandle,
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    color: Rgba,
    visible: bool,
    track: TranslationTrack,
}

impl Model {
    #[must_use]
    pub fn new(geometry: GeometryHandle) -> Self {
        Self {
            geometry,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: Rgba::default(),
            visible: true,
            track: TranslationTrack::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> GeometryHandle {
        self.geometry
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Invisible models are skipped from rendering and frame capture.
    #[inline]
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    #[must_use]
    pub fn track(&self) -> &TranslationTrack {
        &self.track
    }

    /// Rewinds the keyframe cursor; called on every positioning-mode entry.
    pub fn reset_cursor(&mut self) {
        self.track.reset_cursor();
    }

    /// Sets the live translation from raw UI text fields.
    ///
    /// All three components are parsed before any is committed: a single
    /// malformed or non-finite field rejects the whole vector and the
    /// previous valid translation is retained.
    pub fn set_live_translation_fields(&mut self, x: &str, y: &str, z: &str) -> Result<()> {
        let parsed = Vec3::new(
            parse_field("translation.x", x)?,
            parse_field("translation.y", y)?,
            parse_field("translation.z", z)?,
        );
        self.translation = parsed;
        Ok(())
    }

    /// Sets the live Euler rotation (degrees) from raw UI text fields, with
    /// the same all-or-nothing commit as the translation fields.
    pub fn set_live_rotation_fields(&mut self, x: &str, y: &str, z: &str) -> Result<()> {
        let parsed = Vec3::new(
            parse_field("rotation.x", x)?,
            parse_field("rotation.y", y)?,
            parse_field("rotation.z", z)?,
        );
        self.rotation = parsed;
        Ok(())
    }

    /// Appends `(frame, current live translation)` to the keyframe track.
    /// Out-of-order captures are rejected, see [`TranslationTrack::capture`].
    pub fn capture_keyframe(&mut self, frame: u32) -> Result<()> {
        self.track.capture(frame, self.translation)
    }

    /// Interpolated translation at `query_frame` (rendering mode source).
    pub fn interpolated_translation(&mut self, query_frame: u32) -> Vec3 {
        self.track.sample(query_frame)
    }

    /// World pose from the live transform parameters (positioning mode).
    #[must_use]
    pub fn live_pose(&self) -> Mat4 {
        math::compose_model(self.translation, self.rotation, self.scale)
    }

    /// World pose at a timeline frame: interpolated translation, live
    /// rotation and scale (rendering mode).
    pub fn pose_at(&mut self, query_frame: u32) -> Mat4 {
        let translation = self.track.sample(query_frame);
        math::compose_model(translation, self.rotation, self.scale)
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f32> {
    let value: f32 = text
        .trim()
        .parse()
        .map_err(|_| KeystageError::InvalidTransformInput {
            field,
            value: text.to_string(),
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KeystageError::InvalidTransformInput {
            field,
            value: text.to_string(),
        })
    }
}
