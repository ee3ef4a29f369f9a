//! Vertex records.
//!
//! A vertex carries its plane position, one outgoing half-edge (from which
//! its whole ring is reachable), and an optional client payload. The three
//! synthetic corner vertices that bound the plane are the only vertices with
//! no payload; that absence is what marks them as corners.

use crate::core::mesh::EdgeKey;
use crate::geometry::point::Point;

/// A mesh vertex with an opaque client payload of type `U`.
///
/// The payload is never inspected or mutated by the mesh; it exists so the
/// [`Placer`](crate::core::placer::Placer) can map query results back to
/// client objects.
#[derive(Clone, Debug)]
pub struct Vertex<U> {
    point: Point,
    edge: Option<EdgeKey>,
    data: Option<U>,
}

impl<U> Vertex<U> {
    /// Creates a vertex at `point`. Corner vertices pass `None` for `data`.
    #[must_use]
    pub(crate) const fn new(point: Point, data: Option<U>) -> Self {
        Self {
            point,
            edge: None,
            data,
        }
    }

    /// The vertex position.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// One outgoing half-edge, or `None` while the vertex is detached
    /// (mid-move) or not yet wired.
    #[inline]
    #[must_use]
    pub const fn edge(&self) -> Option<EdgeKey> {
        self.edge
    }

    /// The client payload; `None` exactly for corner vertices.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> Option<&U> {
        self.data.as_ref()
    }

    /// True for the synthetic corner vertices that bound the plane.
    #[inline]
    #[must_use]
    pub const fn is_corner(&self) -> bool {
        self.data.is_none()
    }

    #[inline]
    pub(crate) const fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    #[inline]
    pub(crate) const fn set_edge(&mut self, edge: Option<EdgeKey>) {
        self.edge = edge;
    }
}
