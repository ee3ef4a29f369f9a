//! Half-edge records.
//!
//! Every undirected edge of the subdivision is stored as two oppositely
//! directed half-edges. A half-edge knows its origin vertex, its twin, the
//! next half-edge counter-clockwise around its left face, and that face.
//! Everything else is derived:
//!
//! - `target(e) = origin(twin(e))`
//! - `prev(e) = next(next(e))` — every face, including the outside face, is
//!   a 3-cycle
//! - `rot_left(e) = twin(prev(e))` — next outgoing half-edge
//!   counter-clockwise around the origin
//!
//! Half-edges are created and retired in twin pairs by the mesh mutation
//! algorithms; no other component writes to them.

use crate::core::mesh::{EdgeKey, FaceKey, VertexKey};

/// A directed half-edge.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdge {
    pub(crate) origin: VertexKey,
    pub(crate) twin: EdgeKey,
    pub(crate) next: EdgeKey,
    pub(crate) face: FaceKey,
}

impl HalfEdge {
    /// The vertex this half-edge leaves from.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> VertexKey {
        self.origin
    }

    /// The oppositely directed half-edge of the same undirected edge.
    #[inline]
    #[must_use]
    pub const fn twin(&self) -> EdgeKey {
        self.twin
    }

    /// The next half-edge counter-clockwise around the left face.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> EdgeKey {
        self.next
    }

    /// The face on the left of this half-edge.
    #[inline]
    #[must_use]
    pub const fn face(&self) -> FaceKey {
        self.face
    }
}
