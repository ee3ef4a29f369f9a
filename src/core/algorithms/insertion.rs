//! Incremental insertion, removal, and vertex moves.
//!
//! Insertion is the classic locate / split / legalize pipeline:
//!
//! 1. locate the triangle (or edge) containing the new position;
//! 2. split it — a 1→3 face split, or a 2→4 edge split when the point lands
//!    on an existing edge, so no zero-area triangle is ever created;
//! 3. legalize the boundary of the modified region by recursive edge flips.
//!
//! A move is remove + reinsert: the vertex is reduced to degree 3 by flips,
//! its star is excised and the hole re-legalized, then the same vertex
//! record is reinserted at the new position. The vertex key and payload are
//! never touched, so client handles stay valid across moves.

use crate::core::algorithms::locate::LocateResult;
use crate::core::collections::SmallBuffer;
use crate::core::mesh::{EdgeKey, FaceKey, Mesh, MeshError, VertexKey};
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, orient_2d};

impl<U> Mesh<U> {
    /// Inserts a new vertex carrying `data` at `(x, y)`.
    ///
    /// On success the mesh satisfies the Delaunay condition again before
    /// this returns. On error the mesh is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MeshError::OutOfBounds`] when `(x, y)` is outside
    ///   `[0, width) x [0, height)`; positions are never clamped.
    /// - [`MeshError::DuplicatePoint`] when a vertex already occupies the
    ///   position (within `1e-10`).
    pub fn insert(&mut self, data: U, x: f64, y: f64) -> Result<VertexKey, MeshError> {
        self.check_bounds(x, y)?;
        let p = Point::new(x, y);

        match self.locate(p) {
            LocateResult::OnVertex(_) => Err(MeshError::DuplicatePoint { x, y }),
            LocateResult::InFace(f) => {
                let v = self.vertices.insert(Vertex::new(p, Some(data)));
                let seeds = self.split_face(f, v);
                self.legalize(seeds);
                tracing::debug!(vertex = ?v, x, y, "inserted vertex");
                Ok(v)
            }
            LocateResult::OnEdge(e) => {
                let v = self.vertices.insert(Vertex::new(p, Some(data)));
                let seeds = self.split_edge(e, v);
                self.legalize(seeds);
                tracing::debug!(vertex = ?v, x, y, "inserted vertex on existing edge");
                Ok(v)
            }
        }
    }

    /// Translates vertex `v` by `(dx, dy)`.
    ///
    /// A zero delta is a structural no-op. Otherwise the vertex is removed
    /// and reinserted at the new position under the same key; its payload
    /// and identity are untouched, and the Delaunay condition holds again
    /// before this returns. On error the mesh is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MeshError::OutOfBounds`] when the target position leaves the
    ///   plane.
    /// - [`MeshError::DuplicatePoint`] when another vertex already occupies
    ///   the target position.
    ///
    /// # Panics
    ///
    /// Panics when `v` is a corner vertex; corners are permanent.
    pub fn move_by(&mut self, v: VertexKey, dx: f64, dy: f64) -> Result<(), MeshError> {
        assert!(
            !self.is_corner(v),
            "corner vertices are permanent and cannot be moved"
        );

        if dx == 0.0 && dy == 0.0 {
            return Ok(());
        }

        let from = self.point(v);
        let to = Point::new(from.x + dx, from.y + dy);
        self.check_bounds(to.x, to.y)?;

        // Reject a collision with any *other* vertex before touching the
        // mesh, so failed moves leave it intact.
        if let LocateResult::OnVertex(u) = self.locate(to)
            && u != v
        {
            return Err(MeshError::DuplicatePoint { x: to.x, y: to.y });
        }

        self.detach(v);
        self.vertices[v].set_point(to);

        match self.locate(to) {
            LocateResult::InFace(f) => {
                let seeds = self.split_face(f, v);
                self.legalize(seeds);
            }
            LocateResult::OnEdge(e) => {
                let seeds = self.split_edge(e, v);
                self.legalize(seeds);
            }
            LocateResult::OnVertex(u) => {
                // Collisions were rejected above and v itself is detached.
                panic!("topology invariant violated: detached move landed on vertex {u:?}")
            }
        }

        tracing::debug!(vertex = ?v, ?from, ?to, "moved vertex");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Splits
    // -------------------------------------------------------------------

    /// 1→3 split: subdivides face `f` by connecting `v` (strictly inside
    /// it) to its three vertices. Returns the original triangle edges, the
    /// seeds for legalization.
    pub(crate) fn split_face(&mut self, f: FaceKey, v: VertexKey) -> SmallBuffer<EdgeKey, 4> {
        let [e0, e1, e2] = self.face_edges(f);
        let a = self.origin(e0);
        let b = self.origin(e1);
        let c = self.origin(e2);

        let (va, av) = self.new_edge_pair(v, a);
        let (vb, bv) = self.new_edge_pair(v, b);
        let (vc, cv) = self.new_edge_pair(v, c);

        let f1 = self.faces.insert(crate::core::face::Face::interior(e1));
        let f2 = self.faces.insert(crate::core::face::Face::interior(e2));

        // (a, b, v)
        self.wire_triangle(f, e0, bv, va);
        // (b, c, v)
        self.wire_triangle(f1, e1, cv, vb);
        // (c, a, v)
        self.wire_triangle(f2, e2, av, vc);

        self.vertices[v].set_edge(Some(va));
        self.hint = f;

        SmallBuffer::from_slice(&[e0, e1, e2])
    }

    /// 2→4 split: subdivides the two triangles flanking edge `e` around a
    /// vertex `v` lying on `e` strictly between its endpoints. Returns the
    /// four quad boundary edges, the seeds for legalization.
    pub(crate) fn split_edge(&mut self, e: EdgeKey, v: VertexKey) -> SmallBuffer<EdgeKey, 4> {
        let t = self.twin(e);
        let f = self.left_face(e);
        let g = self.left_face(t);
        // Client positions are strictly inside the corner triangle, so they
        // can never land on a hull edge.
        assert!(
            !self.is_outside_face(f) && !self.is_outside_face(g),
            "topology invariant violated: in-bounds point split hull edge {e:?}"
        );

        let e_n = self.next(e); // b -> c
        let e_p = self.next(e_n); // c -> a
        let t_n = self.next(t); // a -> d
        let t_p = self.next(t_n); // d -> b

        let a = self.origin(e);
        let b = self.origin(t);
        let c = self.origin(e_p);
        let d = self.origin(t_p);

        // e shortens to a -> v; its twin becomes v -> a.
        self.edges[t].origin = v;

        let (vb, bv) = self.new_edge_pair(v, b);
        let (vc, cv) = self.new_edge_pair(v, c);
        let (vd, dv) = self.new_edge_pair(v, d);

        let f2 = self.faces.insert(crate::core::face::Face::interior(e_p));
        let g2 = self.faces.insert(crate::core::face::Face::interior(t_p));

        // (v, b, c)
        self.wire_triangle(f, vb, e_n, cv);
        // (v, c, a)
        self.wire_triangle(f2, vc, e_p, e);
        // (v, a, d)
        self.wire_triangle(g, t, t_n, dv);
        // (v, d, b)
        self.wire_triangle(g2, vd, t_p, bv);

        // b may have pointed at the re-originated twin.
        if self.vertices[b].edge() == Some(t) {
            self.vertices[b].set_edge(Some(e_n));
        }
        self.vertices[v].set_edge(Some(vb));
        self.hint = f;

        SmallBuffer::from_slice(&[e_n, e_p, t_n, t_p])
    }

    /// Wires `first -> second -> third -> first` as the boundary of `face`.
    fn wire_triangle(&mut self, face: FaceKey, first: EdgeKey, second: EdgeKey, third: EdgeKey) {
        self.edges[first].next = second;
        self.edges[second].next = third;
        self.edges[third].next = first;
        for k in [first, second, third] {
            self.edges[k].face = face;
        }
        self.faces[face].edge = first;
    }

    // -------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------

    /// Detaches `v` from the subdivision while keeping its record alive.
    ///
    /// Incident edges are flipped away while a strictly convex flip exists
    /// (usually down to degree 3), then the remaining star is excised and
    /// the hole polygon retriangulated and re-legalized. Afterwards `v` has
    /// no outgoing edge.
    pub(crate) fn detach(&mut self, v: VertexKey) {
        // Flip-based degree reduction (Devillers-style deletion). Flipping
        // an incident edge v->a removes a from the ring; the flip is valid
        // when both replacement triangles keep positive orientation.
        loop {
            let ring: SmallBuffer<EdgeKey, 8> = self.outgoing_edges(v).collect();
            if ring.len() == 3 {
                break;
            }

            let p_v = self.point(v);
            let mut flipped = false;
            for e in ring.iter().copied() {
                let a = self.point(self.target(e));
                let c = self.point(self.origin(self.prev(e)));
                let d = self.point(self.origin(self.prev(self.twin(e))));
                if orient_2d(p_v, d, c) == Orientation::POSITIVE
                    && orient_2d(d, a, c) == Orientation::POSITIVE
                {
                    self.flip(e);
                    flipped = true;
                    break;
                }
            }
            if !flipped {
                // Exactly symmetric rings admit no strictly convex flip: a
                // vertex centered in a cocircular quad sits on both of its
                // diagonals, so every candidate flip is degenerate. The
                // excision below handles any remaining degree.
                break;
            }
        }

        self.excise_star(v);
    }

    /// Removes the spoke edges and star faces of `v` and retriangulates the
    /// hole polygon (its link) by ear clipping, reusing the freed face
    /// records. The hole boundary and the new diagonals are re-legalized.
    fn excise_star(&mut self, v: VertexKey) {
        let ring: SmallBuffer<EdgeKey, 8> = self.outgoing_edges(v).collect();
        let mut spare_faces: SmallBuffer<FaceKey, 8> =
            ring.iter().map(|&e| self.left_face(e)).collect();
        // The link of v: one surviving boundary edge per star face, tracing
        // the hole polygon counter-clockwise.
        let mut hole: SmallBuffer<EdgeKey, 8> = ring.iter().map(|&e| self.next(e)).collect();

        // Hole vertices whose outgoing edge was a dying spoke.
        for (i, &e) in ring.iter().enumerate() {
            let u = self.target(e);
            if self.vertices[u].edge() == Some(self.twin(e)) {
                self.vertices[u].set_edge(Some(hole[i]));
            }
        }

        for e in ring {
            let t = self.twin(e);
            self.edges.remove(e);
            self.edges.remove(t);
        }
        self.vertices[v].set_edge(None);

        let mut seeds: SmallBuffer<EdgeKey, 16> = hole.iter().copied().collect();

        // Ear clipping: cut a strictly convex corner whose closed triangle
        // holds no other hole vertex, until one triangle remains. The hole
        // is a simple polygon of positive area (it wound around v), so an
        // ear always exists.
        while hole.len() > 3 {
            let m = hole.len();
            let mut clipped = false;
            'ears: for i in 0..m {
                let first = hole[i];
                let second = hole[(i + 1) % m];
                let (a, b, c) = (self.origin(first), self.origin(second), self.target(second));
                let (pa, pb, pc) = (self.point(a), self.point(b), self.point(c));
                if orient_2d(pa, pb, pc) != Orientation::POSITIVE {
                    continue;
                }
                for &other in &hole {
                    let w = self.origin(other);
                    if w == a || w == b || w == c {
                        continue;
                    }
                    let pw = self.point(w);
                    if orient_2d(pa, pb, pw) != Orientation::NEGATIVE
                        && orient_2d(pb, pc, pw) != Orientation::NEGATIVE
                        && orient_2d(pc, pa, pw) != Orientation::NEGATIVE
                    {
                        continue 'ears;
                    }
                }

                let (ca, ac) = self.new_edge_pair(c, a);
                let face = Self::take_spare_face(&mut spare_faces, v);
                self.wire_triangle(face, first, second, ca);
                seeds.push(ca);

                // The diagonal a -> c replaces the clipped pair in the cycle.
                hole[i] = ac;
                hole.remove((i + 1) % m);
                clipped = true;
                break;
            }
            assert!(
                clipped,
                "topology invariant violated: hole around {v:?} has no ear"
            );
        }

        let face = Self::take_spare_face(&mut spare_faces, v);
        self.wire_triangle(face, hole[0], hole[1], hole[2]);
        for f in spare_faces {
            self.faces.remove(f);
        }
        self.hint = face;

        self.legalize(seeds);
    }

    /// A star of degree k is replaced by k - 2 hole triangles, so the pool
    /// can never run dry; an empty pool means the star walk was corrupt.
    fn take_spare_face(pool: &mut SmallBuffer<FaceKey, 8>, v: VertexKey) -> FaceKey {
        pool.pop().unwrap_or_else(|| {
            panic!("topology invariant violated: star of {v:?} freed too few faces")
        })
    }
}
