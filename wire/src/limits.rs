//! Configurable limits for bounded decoding.

use crate::error::{CountKind, DecodeError, WireResult};

/// List-length limits for level decoding.
///
/// These limits are enforced before any list is allocated, so a small
/// malformed file cannot request an arbitrarily large allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of polygons.
    pub max_polygons: usize,

    /// Maximum number of vertices in a single polygon.
    pub max_vertices_per_polygon: usize,

    /// Maximum number of objects.
    pub max_objects: usize,

    /// Maximum number of pictures.
    pub max_pictures: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Far above anything the game editor produces
            max_polygons: 64 * 1024,
            max_vertices_per_polygon: 1024 * 1024,
            max_objects: 64 * 1024,
            max_pictures: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_polygons: 64,
            max_vertices_per_polygon: 256,
            max_objects: 64,
            max_pictures: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_polygons: usize::MAX,
            max_vertices_per_polygon: usize::MAX,
            max_objects: usize::MAX,
            max_pictures: usize::MAX,
        }
    }

    /// Returns the limit for `kind`.
    #[must_use]
    pub const fn max_for(&self, kind: CountKind) -> usize {
        match kind {
            CountKind::Polygons => self.max_polygons,
            CountKind::Vertices => self.max_vertices_per_polygon,
            CountKind::Objects => self.max_objects,
            CountKind::Pictures => self.max_pictures,
        }
    }

    /// Fails if `count` exceeds the limit for `kind`.
    pub fn check(&self, kind: CountKind, count: usize) -> WireResult<()> {
        let limit = self.max_for(kind);
        if count > limit {
            return Err(DecodeError::LimitsExceeded {
                kind,
                limit,
                actual: count,
            });
        }
        Ok(())
    }
}
