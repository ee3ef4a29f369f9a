//! Face records.
//!
//! A face stores one of its bounding half-edges; the other two are reached
//! by following `next`. Exactly one face per mesh is the *outside* face
//! representing the unbounded exterior of the bounding triangle; it is also
//! a 3-cycle of half-edges (the hull edges seen from outside) but is never a
//! candidate for insertion, and its circumcircle test is always false.

use crate::core::mesh::EdgeKey;

/// Distinguishes ordinary triangles from the unbounded exterior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceKind {
    /// A triangle of the subdivision.
    Interior,
    /// The unbounded region outside the bounding triangle.
    Outside,
}

/// A face of the subdivision.
#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub(crate) edge: EdgeKey,
    pub(crate) kind: FaceKind,
}

impl Face {
    #[must_use]
    pub(crate) const fn interior(edge: EdgeKey) -> Self {
        Self {
            edge,
            kind: FaceKind::Interior,
        }
    }

    #[must_use]
    pub(crate) const fn outside(edge: EdgeKey) -> Self {
        Self {
            edge,
            kind: FaceKind::Outside,
        }
    }

    /// One bounding half-edge of this face.
    #[inline]
    #[must_use]
    pub const fn edge(&self) -> EdgeKey {
        self.edge
    }

    /// Whether this is the unbounded exterior face.
    #[inline]
    #[must_use]
    pub const fn is_outside(&self) -> bool {
        matches!(self.kind, FaceKind::Outside)
    }
}
