//! Point location by triangle walking.
//!
//! Starting from a hint face (the face touched by the most recent mutation),
//! the walk repeatedly tests the query point against the three edges of the
//! current triangle and crosses the first edge the point lies strictly to
//! the right of. When no edge rejects the point, the triangle contains it
//! and the result is refined into face / edge / vertex cases.
//!
//! Client positions are bounds-checked before location, so the walk can
//! never legitimately cross a hull edge into the outside face; if it tries,
//! or fails to terminate within `3 * face_count` steps, the mesh is corrupt
//! and the walk aborts loudly.
//!
//! # References
//!
//! - O. Devillers, S. Pion, and M. Teillaud, "Walking in a Triangulation",
//!   International Journal of Foundations of Computer Science, 2001.

use crate::core::mesh::{DUPLICATE_EPS, EdgeKey, FaceKey, Mesh, VertexKey};
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, orient_2d};

/// Where a query point landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateResult {
    /// Strictly inside an interior face.
    InFace(FaceKey),
    /// On an existing edge, strictly between its endpoints.
    OnEdge(EdgeKey),
    /// Coincident (within tolerance) with an existing vertex.
    OnVertex(VertexKey),
}

impl<U> Mesh<U> {
    /// Locates the face, edge, or vertex containing `p`.
    ///
    /// `p` must be within the plane bounds; mutation entry points check
    /// this before locating. The returned handles are only valid until the
    /// next mutation, which may retire them during legalization.
    ///
    /// # Panics
    ///
    /// Panics when the walk steps into the outside face or exceeds the step
    /// cap, both of which signal corrupted topology.
    #[must_use]
    pub fn locate(&self, p: Point) -> LocateResult {
        let mut face = if self.faces.contains_key(self.hint) && !self.is_outside_face(self.hint) {
            self.hint
        } else {
            self.first_interior_face()
        };

        // Never re-test the edge we just crossed; without this the walk can
        // bounce between two triangles when p sits on their shared edge.
        let mut entered_through: Option<EdgeKey> = None;
        let cap = 3 * self.faces.len() + 3;
        let mut steps = 0usize;

        'walk: loop {
            steps += 1;
            assert!(
                steps <= cap,
                "topology invariant violated: point location for {p} did not terminate after {cap} steps"
            );

            for e in self.face_edges(face) {
                if Some(e) == entered_through {
                    continue;
                }
                let a = self.point(self.origin(e));
                let b = self.point(self.target(e));
                if orient_2d(a, b, p) == Orientation::NEGATIVE {
                    let across = self.left_face(self.twin(e));
                    assert!(
                        !self.is_outside_face(across),
                        "topology invariant violated: in-bounds point {p} walked onto the hull"
                    );
                    entered_through = Some(self.twin(e));
                    face = across;
                    continue 'walk;
                }
            }

            tracing::trace!(steps, ?face, "point located");
            return self.classify_in_face(face, p);
        }
    }

    /// Refines "inside or on the boundary of `face`" into the three cases.
    fn classify_in_face(&self, face: FaceKey, p: Point) -> LocateResult {
        let edges = self.face_edges(face);

        for e in edges {
            let v = self.origin(e);
            if self.point(v).distance_to(p) <= DUPLICATE_EPS {
                return LocateResult::OnVertex(v);
            }
        }

        for e in edges {
            let a = self.point(self.origin(e));
            let b = self.point(self.target(e));
            if orient_2d(a, b, p) == Orientation::DEGENERATE {
                // Collinear with the edge; between the endpoints?
                let along = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
                if along > 0.0 && along < a.distance_squared_to(b) {
                    return LocateResult::OnEdge(e);
                }
            }
        }

        LocateResult::InFace(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh::Mesh;

    #[test]
    fn locates_in_initial_face() {
        let mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
        let inner = mesh.first_interior_face();
        assert_eq!(
            mesh.locate(Point::new(50.0, 50.0)),
            LocateResult::InFace(inner)
        );
        assert_eq!(
            mesh.locate(Point::new(0.0, 0.0)),
            LocateResult::InFace(inner)
        );
    }

    #[test]
    fn locates_existing_vertex() {
        let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
        let v = mesh.insert(1, 40.0, 40.0).unwrap();
        assert_eq!(mesh.locate(Point::new(40.0, 40.0)), LocateResult::OnVertex(v));
        // Within duplicate tolerance counts as the same vertex.
        assert_eq!(
            mesh.locate(Point::new(40.0 + 1e-12, 40.0)),
            LocateResult::OnVertex(v)
        );
    }

    #[test]
    fn locates_point_on_edge() {
        let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
        let a = mesh.insert(1, 20.0, 20.0).unwrap();
        let b = mesh.insert(2, 80.0, 80.0).unwrap();
        // With only two client vertices the segment between them is a
        // Delaunay edge, so its midpoint lies on an edge.
        match mesh.locate(Point::new(50.0, 50.0)) {
            LocateResult::OnEdge(e) => {
                let ends = [mesh.origin(e), mesh.target(e)];
                assert!(ends.contains(&a) && ends.contains(&b));
            }
            other => panic!("expected OnEdge, got {other:?}"),
        }
    }

    #[test]
    fn walks_from_stale_hint() {
        let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
        for (i, (x, y)) in [(10.0, 10.0), (90.0, 10.0), (50.0, 90.0), (50.0, 40.0)]
            .into_iter()
            .enumerate()
        {
            mesh.insert(i as u32, x, y).unwrap();
        }
        // Query far from the last insertion; the walk must still land in a
        // face containing the point.
        match mesh.locate(Point::new(12.0, 11.0)) {
            LocateResult::InFace(f) => {
                let [a, b, c] = mesh.face_vertices(f).map(|v| mesh.point(v));
                let p = Point::new(12.0, 11.0);
                assert_ne!(orient_2d(a, b, p), Orientation::NEGATIVE);
                assert_ne!(orient_2d(b, c, p), Orientation::NEGATIVE);
                assert_ne!(orient_2d(c, a, p), Orientation::NEGATIVE);
            }
            other => panic!("expected InFace, got {other:?}"),
        }
    }
}
