//! Triangle-soup geometry and its process-lifetime store.
//!
//! Mesh file parsing is an external collaborator; callers hand in
//! already-decoded position and per-triangle normal buffers. The store owns
//! every geometry until process exit; models hold non-owning handles and
//! there is no unload path.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};

use crate::errors::{KeystageError, Result};
use crate::math;

new_key_type! {
    /// Non-owning reference into the [`GeometryStore`].
    pub struct GeometryHandle;
}

/// One triangle of a soup: three vertex positions and a unit face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
}

/// A triangle soup: three positions per triangle, one normal per triangle.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl Geometry {
    /// Validates and wraps raw triangle-soup buffers.
    ///
    /// Fails with [`KeystageError::GeometryLoadFailed`] when the position
    /// count is not a multiple of 3 or the normal count does not match the
    /// triangle count. A failed load leaves no trace in the store.
    pub fn from_triangle_soup(positions: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(KeystageError::GeometryLoadFailed(format!(
                "vertex count {} is not a multiple of 3",
                positions.len()
            )));
        }
        let triangle_count = positions.len() / 3;
        if normals.len() != triangle_count {
            return Err(KeystageError::GeometryLoadFailed(format!(
                "{} normals for {} triangles",
                normals.len(),
                triangle_count
            )));
        }
        Ok(Self { positions, normals })
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.normals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    /// Iterates the soup, normalizing each face normal on the fly.
    /// Zero-length normals pass through unchanged rather than becoming NaN.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(&self.normals)
            .map(|(v, &n)| Triangle {
                vertices: [v[0], v[1], v[2]],
                normal: math::safe_normalize(n),
            })
    }
}

/// Owns all loaded geometry for the lifetime of the process.
#[derive(Debug, Default)]
pub struct GeometryStore {
    geometries: SlotMap<GeometryHandle, Geometry>,
}

impl GeometryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, geometry: Geometry) -> GeometryHandle {
        self.geometries.insert(geometry)
    }

    #[must_use]
    pub fn get(&self, handle: GeometryHandle) -> Option<&Geometry> {
        self.geometries.get(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}
