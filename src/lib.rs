//! # planemesh
//!
//! A dynamic planar-subdivision mesh used as a 2D spatial index: points are
//! connected into a triangulated planar graph maintained incrementally as an
//! incremental Delaunay triangulation, and "nearest" / "within-distance"
//! relationships are answered by graph walks instead of brute-force distance
//! scans.
//!
//! # Structure
//!
//! - [`geometry::predicates`] — orientation and in-circumcircle tests.
//! - [`core::mesh`] — the half-edge topology, owned in slotmap arenas, with
//!   incremental insertion, flip-based legalization, and vertex moves.
//! - [`core::navigation`] — read-only `nearest` / `neighbors_within` walks.
//! - [`core::placer`] — the client façade mapping opaque objects to mesh
//!   vertices and hiding the synthetic corner vertices that bound the plane.
//!
//! # Basic usage
//!
//! ```rust
//! use planemesh::prelude::*;
//!
//! let mut placer = Placer::new(100.0, 100.0).unwrap();
//! placer.add("a", 10.0, 10.0).unwrap();
//! placer.add("b", 90.0, 90.0).unwrap();
//! placer.add("c", 10.0, 90.0).unwrap();
//!
//! // Topologically nearest objects, closest first.
//! let near = placer.nearest(&"a").unwrap();
//! assert_eq!(near.first(), Some(&&"c"));
//!
//! // All objects within distance 200, at least distance 0 away.
//! let within = placer.neighbors(&"a", 200.0, 0.0).unwrap();
//! assert_eq!(within.len(), 2);
//! ```
//!
//! # Invariants
//!
//! After every successful mutation the mesh satisfies, and its validation
//! helpers check:
//!
//! - **Delaunay legality** — no live vertex lies strictly inside the
//!   circumcircle of any interior face
//!   ([`Mesh::validate_delaunay`](core::mesh::Mesh::validate_delaunay)).
//! - **Edge consistency** — twins are involutions, every face closes a
//!   3-cycle of `next` links, every vertex ring closes under `rot_left`
//!   ([`Mesh::validate_topology`](core::mesh::Mesh::validate_topology)).
//!
//! Mutations that fail (boundary violations, duplicate positions) leave the
//! mesh unchanged. Invariant violations discovered mid-walk panic: they are
//! defects of the mutation logic, never expected runtime conditions.
//!
//! # Concurrency
//!
//! Single-writer by construction: mutation takes `&mut self`, so the borrow
//! checker enforces that queries (which take `&self`) never run concurrently
//! with a mutation. There is no internal locking and no I/O.

#![forbid(unsafe_code)]

/// Primary data structures and algorithms: the mesh, its mutation
/// algorithms, navigation queries, and the client façade.
pub mod core {
    /// Mutation algorithms: point location, flips, insertion and moves.
    pub mod algorithms {
        pub mod flips;
        pub mod insertion;
        pub mod locate;
    }
    pub mod collections;
    pub mod edge;
    pub mod face;
    pub mod mesh;
    pub mod navigation;
    pub mod placer;
    pub mod vertex;

    pub use edge::*;
    pub use face::*;
    pub use mesh::*;
    pub use placer::*;
    pub use vertex::*;
}

/// Geometric types and predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;

    pub use point::*;
    pub use predicates::*;
}

/// Re-exports of the commonly used types.
pub mod prelude {
    pub use crate::core::algorithms::locate::LocateResult;
    pub use crate::core::collections::{FastHashMap, FastHashSet, SmallBuffer};
    pub use crate::core::edge::HalfEdge;
    pub use crate::core::face::{Face, FaceKind};
    pub use crate::core::mesh::{
        EdgeKey, FaceKey, Mesh, MeshError, MeshValidationError, VertexKey,
    };
    pub use crate::core::navigation::{nearest, neighbors_within};
    pub use crate::core::placer::{Placer, PlacerError};
    pub use crate::core::vertex::Vertex;
    pub use crate::geometry::point::Point;
    pub use crate::geometry::predicates::{InCircle, Orientation, in_circle, orient_2d};
}
