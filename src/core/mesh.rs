//! The mesh: arena-owned half-edge topology over a bounded plane.
//!
//! [`Mesh`] exclusively owns every vertex, half-edge, and face record in
//! slotmap arenas; all topological "pointers" are arena keys, so the cyclic
//! vertex/edge/face references never form ownership cycles and retired
//! records invalidate their keys explicitly.
//!
//! A mesh is constructed over a plane of `(width, height)` and seeded with
//! three permanent synthetic *corner* vertices forming a bounding triangle
//! large enough that every client position in `[0, width) x [0, height)` is
//! strictly inside it. Mutation (insertion, move) lives in
//! [`crate::core::algorithms`]; this module provides the data structure,
//! navigation primitives, and validation helpers.
//!
//! # Invariants
//!
//! After every successful mutation:
//!
//! - **Twin involution** — `twin(twin(e)) == e` for every half-edge.
//! - **3-cycle faces** — `next` closes after exactly three steps around
//!   every face, the outside face included.
//! - **Ring closure** — `rot_left` enumerates exactly the outgoing edges of
//!   a vertex and returns to the start.
//! - **Delaunay legality** — no live vertex lies strictly inside the
//!   circumcircle of any interior face.
//!
//! Walks that discover a violated invariant panic: that is a defect in the
//! mutation logic, not a recoverable runtime condition. The
//! [`Mesh::validate_topology`] / [`Mesh::validate_delaunay`] helpers perform
//! the same checks non-fatally for tests and diagnostics.

use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::core::edge::HalfEdge;
use crate::core::face::Face;
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::predicates::{InCircle, Orientation, in_circle, orient_2d};

new_key_type! {
    /// Stable handle to a vertex record.
    pub struct VertexKey;
    /// Stable handle to a half-edge record.
    pub struct EdgeKey;
    /// Stable handle to a face record.
    pub struct FaceKey;
}

/// Two positions closer than this are considered the same point; insertion
/// at an occupied position is rejected rather than allowed to create a
/// degenerate sliver.
pub(crate) const DUPLICATE_EPS: f64 = 1e-10;

/// Recoverable errors reported by mesh mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Plane bounds must be positive finite numbers.
    #[error("plane bounds must be positive and finite, got {width} x {height}")]
    InvalidBounds {
        /// Requested plane width.
        width: f64,
        /// Requested plane height.
        height: f64,
    },

    /// Target position lies outside the declared plane.
    #[error("position ({x}, {y}) is outside the plane bounds [0, {width}) x [0, {height})")]
    OutOfBounds {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
        /// Plane width.
        width: f64,
        /// Plane height.
        height: f64,
    },

    /// A vertex already occupies the target position (within `1e-10`).
    #[error("a vertex already exists at ({x}, {y})")]
    DuplicatePoint {
        /// Requested x coordinate.
        x: f64,
        /// Requested y coordinate.
        y: f64,
    },
}

/// Structured findings from the validation helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshValidationError {
    /// `twin(twin(e)) != e` or `twin(e) == e`.
    #[error("edge {edge:?} twin link is not an involution")]
    TwinMismatch {
        /// Offending edge.
        edge: EdgeKey,
    },

    /// Following `next` three times does not return to the edge.
    #[error("edge {edge:?} does not close a 3-cycle around its face")]
    FaceCycleBroken {
        /// Offending edge.
        edge: EdgeKey,
    },

    /// An edge and its `next` disagree about their face.
    #[error("edge {edge:?} disagrees with its successor about their face")]
    FaceMismatch {
        /// Offending edge.
        edge: EdgeKey,
    },

    /// A face's bounding edge does not point back to it.
    #[error("face {face:?} bounding edge does not point back to it")]
    FaceEdgeMismatch {
        /// Offending face.
        face: FaceKey,
    },

    /// An interior face is clockwise or collapsed.
    #[error("interior face {face:?} is clockwise or has repeated vertices")]
    InvertedFace {
        /// Offending face.
        face: FaceKey,
    },

    /// A vertex's outgoing edge does not originate at it.
    #[error("vertex {vertex:?} outgoing edge does not originate at it")]
    OriginMismatch {
        /// Offending vertex.
        vertex: VertexKey,
    },

    /// A vertex ring walk failed to return to its starting edge.
    #[error("vertex {vertex:?} ring walk does not close")]
    RingBroken {
        /// Offending vertex.
        vertex: VertexKey,
    },

    /// A vertex has no outgoing edge at all.
    #[error("vertex {vertex:?} has no outgoing edge")]
    DanglingVertex {
        /// Offending vertex.
        vertex: VertexKey,
    },

    /// A live vertex lies strictly inside an interior face's circumcircle.
    #[error("vertex {vertex:?} lies inside the circumcircle of face {face:?}")]
    DelaunayViolation {
        /// Face whose circumcircle is non-empty.
        face: FaceKey,
        /// Vertex found inside it.
        vertex: VertexKey,
    },
}

/// A dynamic planar subdivision over a bounded plane.
///
/// Generic over the client payload `U` attached to each non-corner vertex.
/// Mutation requires `&mut self`, so Rust's borrow rules enforce the
/// single-writer model: queries may run concurrently with each other but
/// never with a mutation.
pub struct Mesh<U> {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) vertices: SlotMap<VertexKey, Vertex<U>>,
    pub(crate) edges: SlotMap<EdgeKey, HalfEdge>,
    pub(crate) faces: SlotMap<FaceKey, Face>,
    pub(crate) corners: [VertexKey; 3],
    pub(crate) outside: FaceKey,
    /// Locate hint: the face touched by the most recent mutation.
    pub(crate) hint: FaceKey,
}

impl<U> Mesh<U> {
    /// Creates an empty mesh over the plane `[0, width) x [0, height)`.
    ///
    /// Three permanent corner vertices are created around the plane; they
    /// never appear in client-facing iteration or query results.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidBounds`] when either bound is non-positive or
    /// non-finite.
    pub fn new(width: f64, height: f64) -> Result<Self, MeshError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(MeshError::InvalidBounds { width, height });
        }

        let mut mesh = Self {
            width,
            height,
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            corners: [VertexKey::default(); 3],
            outside: FaceKey::default(),
            hint: FaceKey::default(),
        };

        // The margin keeps the client rectangle (and every circumcircle test
        // involving only client points) strictly inside the corner triangle.
        let margin = width + height;
        let c0 = mesh
            .vertices
            .insert(Vertex::new(Point::new(-margin, -margin), None));
        let c1 = mesh.vertices.insert(Vertex::new(
            Point::new(2.0 * width + 2.0 * margin, -margin),
            None,
        ));
        let c2 = mesh.vertices.insert(Vertex::new(
            Point::new(-margin, 2.0 * height + 2.0 * margin),
            None,
        ));

        let (e01, e10) = mesh.new_edge_pair(c0, c1);
        let (e12, e21) = mesh.new_edge_pair(c1, c2);
        let (e20, e02) = mesh.new_edge_pair(c2, c0);

        let inner = mesh.faces.insert(Face::interior(e01));
        let outside = mesh.faces.insert(Face::outside(e10));

        // Interior 3-cycle c0 -> c1 -> c2.
        mesh.edges[e01].next = e12;
        mesh.edges[e12].next = e20;
        mesh.edges[e20].next = e01;
        for e in [e01, e12, e20] {
            mesh.edges[e].face = inner;
        }

        // Exterior 3-cycle seen from outside: c1 -> c0 -> c2 -> c1.
        mesh.edges[e10].next = e02;
        mesh.edges[e02].next = e21;
        mesh.edges[e21].next = e10;
        for e in [e10, e02, e21] {
            mesh.edges[e].face = outside;
        }

        mesh.vertices[c0].set_edge(Some(e01));
        mesh.vertices[c1].set_edge(Some(e12));
        mesh.vertices[c2].set_edge(Some(e20));

        mesh.corners = [c0, c1, c2];
        mesh.outside = outside;
        mesh.hint = inner;
        Ok(mesh)
    }

    /// Plane width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Plane height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The three permanent corner vertices.
    #[inline]
    #[must_use]
    pub const fn corners(&self) -> [VertexKey; 3] {
        self.corners
    }

    /// Rejects positions outside `[0, width) x [0, height)`.
    pub(crate) fn check_bounds(&self, x: f64, y: f64) -> Result<(), MeshError> {
        if x.is_finite() && y.is_finite() && x >= 0.0 && x < self.width && y >= 0.0 && y < self.height
        {
            Ok(())
        } else {
            Err(MeshError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    // -------------------------------------------------------------------
    // Record access
    // -------------------------------------------------------------------

    /// True while `v` refers to a live vertex.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, v: VertexKey) -> bool {
        self.vertices.contains_key(v)
    }

    /// The position of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics when `v` has been retired; use [`Mesh::contains_vertex`] to
    /// screen keys of unknown provenance.
    #[inline]
    #[must_use]
    pub fn point(&self, v: VertexKey) -> Point {
        self.vertices[v].point()
    }

    /// The payload of vertex `v`; `None` for corners.
    ///
    /// # Panics
    ///
    /// Panics when `v` has been retired; use [`Mesh::contains_vertex`] to
    /// screen keys of unknown provenance.
    #[inline]
    #[must_use]
    pub fn payload(&self, v: VertexKey) -> Option<&U> {
        self.vertices[v].data()
    }

    /// True for the synthetic corner vertices.
    ///
    /// # Panics
    ///
    /// Panics when `v` has been retired; use [`Mesh::contains_vertex`] to
    /// screen keys of unknown provenance.
    #[inline]
    #[must_use]
    pub fn is_corner(&self, v: VertexKey) -> bool {
        self.vertices[v].is_corner()
    }

    // -------------------------------------------------------------------
    // Half-edge navigation
    // -------------------------------------------------------------------

    /// Origin vertex of `e`.
    #[inline]
    #[must_use]
    pub fn origin(&self, e: EdgeKey) -> VertexKey {
        self.edges[e].origin
    }

    /// Target vertex of `e` (the origin of its twin).
    #[inline]
    #[must_use]
    pub fn target(&self, e: EdgeKey) -> VertexKey {
        self.edges[self.edges[e].twin].origin
    }

    /// The oppositely directed half-edge.
    #[inline]
    #[must_use]
    pub fn twin(&self, e: EdgeKey) -> EdgeKey {
        self.edges[e].twin
    }

    /// Next half-edge counter-clockwise around the left face.
    #[inline]
    #[must_use]
    pub fn next(&self, e: EdgeKey) -> EdgeKey {
        self.edges[e].next
    }

    /// Previous half-edge around the left face. All faces are 3-cycles, so
    /// this is `next(next(e))`.
    #[inline]
    #[must_use]
    pub fn prev(&self, e: EdgeKey) -> EdgeKey {
        self.next(self.next(e))
    }

    /// Next outgoing half-edge counter-clockwise around the origin of `e`.
    #[inline]
    #[must_use]
    pub fn rot_left(&self, e: EdgeKey) -> EdgeKey {
        self.twin(self.prev(e))
    }

    /// The face on the left of `e`.
    #[inline]
    #[must_use]
    pub fn left_face(&self, e: EdgeKey) -> FaceKey {
        self.edges[e].face
    }

    /// Whether `f` is the unbounded exterior face.
    #[inline]
    #[must_use]
    pub fn is_outside_face(&self, f: FaceKey) -> bool {
        self.faces[f].is_outside()
    }

    /// The outgoing edge of `v`, which every live vertex has.
    ///
    /// # Panics
    ///
    /// Panics when `v` is detached; that only happens mid-mutation and
    /// signals a defect if observed from outside.
    #[inline]
    pub(crate) fn out_edge(&self, v: VertexKey) -> EdgeKey {
        self.vertices[v].edge().unwrap_or_else(|| {
            panic!("topology invariant violated: vertex {v:?} has no outgoing edge")
        })
    }

    // -------------------------------------------------------------------
    // Walks
    // -------------------------------------------------------------------

    /// The three half-edges bounding `f`, in `next` order.
    ///
    /// # Panics
    ///
    /// Panics when the walk does not close after exactly three steps or an
    /// edge disagrees about its face: both indicate mesh corruption.
    #[must_use]
    pub fn face_edges(&self, f: FaceKey) -> [EdgeKey; 3] {
        let e0 = self.faces[f].edge;
        let e1 = self.next(e0);
        let e2 = self.next(e1);
        assert_eq!(
            self.next(e2),
            e0,
            "topology invariant violated: face {f:?} is not a 3-cycle"
        );
        for e in [e0, e1, e2] {
            assert_eq!(
                self.edges[e].face, f,
                "topology invariant violated: edge {e:?} does not point back to face {f:?}"
            );
        }
        [e0, e1, e2]
    }

    /// The three vertices of `f`, counter-clockwise for interior faces.
    #[must_use]
    pub fn face_vertices(&self, f: FaceKey) -> [VertexKey; 3] {
        self.face_edges(f).map(|e| self.origin(e))
    }

    /// Lazy, restartable walk over the outgoing half-edges of `v`,
    /// counter-clockwise. Panics if the ring fails to close within the
    /// total number of half-edges (mesh corruption).
    #[must_use]
    pub fn outgoing_edges(&self, v: VertexKey) -> OutgoingEdges<'_, U> {
        let start = self.out_edge(v);
        OutgoingEdges {
            mesh: self,
            start,
            next: Some(start),
            steps: 0,
        }
    }

    /// The vertices directly connected to `v` by an edge.
    pub fn direct_neighbors(&self, v: VertexKey) -> impl Iterator<Item = VertexKey> + '_ {
        self.outgoing_edges(v).map(|e| self.target(e))
    }

    /// The faces incident to `v`, counter-clockwise.
    pub fn surrounding_faces(&self, v: VertexKey) -> impl Iterator<Item = FaceKey> + '_ {
        self.outgoing_edges(v).map(|e| self.left_face(e))
    }

    /// The far edges of the faces around `v` (the link of the vertex).
    pub fn surrounding_edges(&self, v: VertexKey) -> impl Iterator<Item = EdgeKey> + '_ {
        self.outgoing_edges(v).map(|e| self.next(e))
    }

    /// Degree of `v` (number of incident undirected edges).
    #[must_use]
    pub fn degree(&self, v: VertexKey) -> usize {
        self.outgoing_edges(v).count()
    }

    /// Whether `p` lies strictly inside the circumcircle of `f`.
    ///
    /// The outside face contains nothing: an unbounded region has no
    /// circumcircle, so insertion never conflicts with it.
    #[must_use]
    pub fn circumcircle_contains(&self, f: FaceKey, p: Point) -> bool {
        if self.faces[f].is_outside() {
            return false;
        }
        let [a, b, c] = self.face_vertices(f).map(|v| self.point(v));
        in_circle(a, b, c, p) == InCircle::INSIDE
    }

    // -------------------------------------------------------------------
    // Iteration and counts
    // -------------------------------------------------------------------

    /// Iterates over live non-corner vertices.
    pub fn client_vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex<U>)> {
        self.vertices.iter().filter(|(_, v)| !v.is_corner())
    }

    /// Iterates over interior faces.
    pub fn interior_faces(&self) -> impl Iterator<Item = FaceKey> + '_ {
        self.faces
            .iter()
            .filter(|(_, f)| !f.is_outside())
            .map(|(k, _)| k)
    }

    /// Total vertices, corners included.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Live client (non-corner) vertices.
    #[must_use]
    pub fn number_of_client_vertices(&self) -> usize {
        self.client_vertices().count()
    }

    /// Interior (triangle) faces.
    #[must_use]
    pub fn number_of_interior_faces(&self) -> usize {
        self.faces.len() - 1
    }

    /// Half-edge records (twice the undirected edge count).
    #[must_use]
    pub fn number_of_half_edges(&self) -> usize {
        self.edges.len()
    }

    // -------------------------------------------------------------------
    // Internal construction helpers
    // -------------------------------------------------------------------

    /// Creates the half-edge pair `a -> b` / `b -> a` with unwired `next`
    /// and `face` links; callers wire them before returning.
    pub(crate) fn new_edge_pair(&mut self, a: VertexKey, b: VertexKey) -> (EdgeKey, EdgeKey) {
        let ab = self.edges.insert(HalfEdge {
            origin: a,
            twin: EdgeKey::default(),
            next: EdgeKey::default(),
            face: FaceKey::default(),
        });
        let ba = self.edges.insert(HalfEdge {
            origin: b,
            twin: ab,
            next: EdgeKey::default(),
            face: FaceKey::default(),
        });
        self.edges[ab].twin = ba;
        (ab, ba)
    }

    /// Any interior face, used when the locate hint has been invalidated.
    pub(crate) fn first_interior_face(&self) -> FaceKey {
        self.interior_faces()
            .next()
            .unwrap_or_else(|| panic!("topology invariant violated: mesh has no interior face"))
    }

    // -------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------

    /// Checks the structural invariants (twin involution, 3-cycle faces,
    /// face back-pointers, ring closure, orientation) without panicking.
    ///
    /// # Errors
    ///
    /// The first violation found, as a [`MeshValidationError`].
    pub fn validate_topology(&self) -> Result<(), MeshValidationError> {
        for (e, rec) in &self.edges {
            let t = rec.twin;
            if t == e || self.edges[t].twin != e {
                return Err(MeshValidationError::TwinMismatch { edge: e });
            }
            let cycle = self.edges[self.edges[rec.next].next].next;
            if cycle != e {
                return Err(MeshValidationError::FaceCycleBroken { edge: e });
            }
            if self.edges[rec.next].face != rec.face {
                return Err(MeshValidationError::FaceMismatch { edge: e });
            }
        }

        for (f, rec) in &self.faces {
            if self.edges[rec.edge].face != f {
                return Err(MeshValidationError::FaceEdgeMismatch { face: f });
            }
            if !rec.is_outside() {
                let e0 = rec.edge;
                let e1 = self.edges[e0].next;
                let e2 = self.edges[e1].next;
                let [a, b, c] =
                    [e0, e1, e2].map(|e| self.vertices[self.edges[e].origin].point());
                if orient_2d(a, b, c) == Orientation::NEGATIVE {
                    return Err(MeshValidationError::InvertedFace { face: f });
                }
            }
        }

        for (v, rec) in &self.vertices {
            let Some(start) = rec.edge() else {
                return Err(MeshValidationError::DanglingVertex { vertex: v });
            };
            let mut e = start;
            let mut steps = 0usize;
            loop {
                if self.edges[e].origin != v {
                    return Err(MeshValidationError::OriginMismatch { vertex: v });
                }
                e = self.rot_left(e);
                steps += 1;
                if e == start {
                    break;
                }
                if steps > self.edges.len() {
                    return Err(MeshValidationError::RingBroken { vertex: v });
                }
            }
        }

        Ok(())
    }

    /// Global Delaunay check: no live vertex strictly inside the
    /// circumcircle of any interior face. `O(faces x vertices)`; intended
    /// for tests and diagnostics, not the hot path.
    ///
    /// # Errors
    ///
    /// The first [`MeshValidationError::DelaunayViolation`] found.
    pub fn validate_delaunay(&self) -> Result<(), MeshValidationError> {
        for f in self.interior_faces() {
            let members = self.face_vertices(f);
            for (v, rec) in &self.vertices {
                if members.contains(&v) || rec.edge().is_none() {
                    continue;
                }
                if self.circumcircle_contains(f, rec.point()) {
                    return Err(MeshValidationError::DelaunayViolation { face: f, vertex: v });
                }
            }
        }
        Ok(())
    }
}

/// Iterator over the outgoing half-edges of a vertex; see
/// [`Mesh::outgoing_edges`].
pub struct OutgoingEdges<'a, U> {
    mesh: &'a Mesh<U>,
    start: EdgeKey,
    next: Option<EdgeKey>,
    steps: usize,
}

impl<U> Iterator for OutgoingEdges<'_, U> {
    type Item = EdgeKey;

    fn next(&mut self) -> Option<EdgeKey> {
        let current = self.next?;
        self.steps += 1;
        assert!(
            self.steps <= self.mesh.edges.len(),
            "topology invariant violated: ring walk around {:?} did not close",
            self.mesh.origin(self.start)
        );
        let following = self.mesh.rot_left(current);
        self.next = (following != self.start).then_some(following);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Mesh<&'static str> {
        Mesh::new(100.0, 100.0).expect("valid bounds")
    }

    #[test]
    fn rejects_bad_bounds() {
        for (w, h) in [(0.0, 10.0), (-5.0, 10.0), (10.0, f64::NAN), (10.0, 0.0)] {
            assert!(matches!(
                Mesh::<()>::new(w, h),
                Err(MeshError::InvalidBounds { .. })
            ));
        }
    }

    #[test]
    fn fresh_mesh_shape() {
        let mesh = fresh();
        assert_eq!(mesh.number_of_vertices(), 3);
        assert_eq!(mesh.number_of_client_vertices(), 0);
        assert_eq!(mesh.number_of_interior_faces(), 1);
        assert_eq!(mesh.number_of_half_edges(), 6);
        assert!(mesh.client_vertices().next().is_none());
        mesh.validate_topology().expect("fresh mesh is consistent");
        mesh.validate_delaunay().expect("fresh mesh is Delaunay");
    }

    #[test]
    fn corner_triangle_contains_plane() {
        let mesh = fresh();
        let inner = mesh.first_interior_face();
        let [a, b, c] = mesh.face_vertices(inner).map(|v| mesh.point(v));
        // Every corner of the client rectangle is strictly inside.
        for p in [
            Point::new(0.0, 0.0),
            Point::new(99.999, 0.0),
            Point::new(0.0, 99.999),
            Point::new(99.999, 99.999),
        ] {
            assert_eq!(orient_2d(a, b, p), Orientation::POSITIVE);
            assert_eq!(orient_2d(b, c, p), Orientation::POSITIVE);
            assert_eq!(orient_2d(c, a, p), Orientation::POSITIVE);
        }
    }

    #[test]
    fn corner_rings_close() {
        let mesh = fresh();
        for corner in mesh.corners() {
            assert!(mesh.is_corner(corner));
            // Each corner of the initial triangle touches two edges.
            assert_eq!(mesh.degree(corner), 2);
            let neighbors: Vec<_> = mesh.direct_neighbors(corner).collect();
            assert_eq!(neighbors.len(), 2);
            assert!(!neighbors.contains(&corner));
        }
    }

    #[test]
    fn face_walks_are_consistent() {
        let mesh = fresh();
        let inner = mesh.first_interior_face();
        let edges = mesh.face_edges(inner);
        for e in edges {
            assert_eq!(mesh.left_face(e), inner);
            // twin's face is the outside face for the initial triangle
            assert!(mesh.is_outside_face(mesh.left_face(mesh.twin(e))));
            assert_eq!(mesh.origin(mesh.twin(e)), mesh.target(e));
        }
        let verts = mesh.face_vertices(inner);
        assert_eq!(verts.len(), 3);
    }

    #[test]
    fn outside_face_contains_nothing() {
        let mesh = fresh();
        assert!(!mesh.circumcircle_contains(mesh.outside, Point::new(50.0, 50.0)));
        // The interior face's circumcircle does contain plane points.
        let inner = mesh.first_interior_face();
        assert!(mesh.circumcircle_contains(inner, Point::new(50.0, 50.0)));
    }

    #[test]
    fn bounds_check() {
        let mesh = fresh();
        assert!(mesh.check_bounds(0.0, 0.0).is_ok());
        assert!(mesh.check_bounds(99.999, 99.999).is_ok());
        for (x, y) in [(-0.1, 5.0), (5.0, -0.1), (100.0, 5.0), (5.0, 100.0), (f64::NAN, 5.0)] {
            assert!(matches!(
                mesh.check_bounds(x, y),
                Err(MeshError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn surrounding_walks_agree() {
        let mesh = fresh();
        let [c0, _, _] = mesh.corners();
        let faces: Vec<_> = mesh.surrounding_faces(c0).collect();
        let fars: Vec<_> = mesh.surrounding_edges(c0).collect();
        assert_eq!(faces.len(), 2);
        assert_eq!(fars.len(), 2);
        for (f, far) in faces.iter().zip(&fars) {
            assert_eq!(mesh.left_face(*far), *f);
        }
    }
}
