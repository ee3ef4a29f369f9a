//! Edge flips and Delaunay legalization.
//!
//! A flip replaces the shared diagonal of two adjacent interior triangles
//! with the other diagonal of their quadrilateral, reusing both face records
//! and the flipped half-edge pair (keys stay live; their contents change).
//!
//! Legalization drains a stack of suspect edges: an edge is illegal when the
//! apex of the face across it lies strictly inside its own face's
//! circumcircle. Each illegal edge is flipped and the four boundary edges of
//! the affected quadrilateral are re-pushed. Every flip strictly increases
//! the minimum angle of the two triangles involved (the classic lexicographic
//! angle-vector potential), so the loop terminates.

use crate::core::collections::SmallBuffer;
use crate::core::mesh::{EdgeKey, Mesh};
use crate::geometry::predicates::{InCircle, in_circle};

impl<U> Mesh<U> {
    /// Flips `e`, the shared diagonal of two interior triangles.
    ///
    /// With `e = a -> b`, left face `(a, b, c)` and right face `(b, a, d)`,
    /// the flip rewires `e` to `d -> c`, producing faces `(a, d, c)` and
    /// `(d, b, c)`. Both face records and the `e`/`twin(e)` pair survive
    /// under their old keys.
    ///
    /// # Panics
    ///
    /// Panics if either adjacent face is the outside face; hull edges are
    /// never flipped and asking for it signals a logic error.
    pub(crate) fn flip(&mut self, e: EdgeKey) {
        let t = self.twin(e);
        let f = self.left_face(e);
        let g = self.left_face(t);
        assert!(
            !self.is_outside_face(f) && !self.is_outside_face(g),
            "topology invariant violated: attempted to flip hull edge {e:?}"
        );

        let e_n = self.next(e);
        let e_p = self.next(e_n);
        let t_n = self.next(t);
        let t_p = self.next(t_n);

        let a = self.origin(e);
        let b = self.origin(t);
        let c = self.origin(e_p);
        let d = self.origin(t_p);

        // The flipped pair now runs d -> c / c -> d.
        self.edges[e].origin = d;
        self.edges[t].origin = c;

        // New triangle (a, d, c): a->d, d->c, c->a.
        self.edges[t_n].next = e;
        self.edges[e].next = e_p;
        self.edges[e_p].next = t_n;
        for k in [t_n, e, e_p] {
            self.edges[k].face = f;
        }
        self.faces[f].edge = e;

        // New triangle (d, b, c): c->d, d->b, b->c.
        self.edges[t].next = t_p;
        self.edges[t_p].next = e_n;
        self.edges[e_n].next = t;
        for k in [t, t_p, e_n] {
            self.edges[k].face = g;
        }
        self.faces[g].edge = t;

        // a and b may have pointed at the re-targeted pair.
        if self.vertices[a].edge() == Some(e) {
            self.vertices[a].set_edge(Some(t_n));
        }
        if self.vertices[b].edge() == Some(t) {
            self.vertices[b].set_edge(Some(e_n));
        }
    }

    /// Restores the Delaunay condition around the given suspect edges.
    ///
    /// Used after every local mutation: face/edge splits seed it with the
    /// boundary of the modified region, vertex removal with the hole edges.
    pub(crate) fn legalize(&mut self, seeds: impl IntoIterator<Item = EdgeKey>) {
        let mut stack: SmallBuffer<EdgeKey, 16> = seeds.into_iter().collect();
        let mut flips = 0usize;

        while let Some(e) = stack.pop() {
            let t = self.twin(e);
            let f = self.left_face(e);
            let g = self.left_face(t);
            if self.is_outside_face(f) || self.is_outside_face(g) {
                continue;
            }

            let [p0, p1, p2] = self.face_vertices(f).map(|v| self.point(v));
            let apex = self.point(self.origin(self.prev(t)));
            if in_circle(p0, p1, p2, apex) != InCircle::INSIDE {
                continue;
            }

            // Quad boundary before the flip rewires everything.
            let e_n = self.next(e);
            let e_p = self.next(e_n);
            let t_n = self.next(t);
            let t_p = self.next(t_n);

            self.flip(e);
            flips += 1;
            stack.extend([e_n, e_p, t_n, t_p]);
        }

        if flips > 0 {
            tracing::trace!(flips, "legalization flipped edges");
        }
    }
}
