//! Read-only graph-walk queries over the mesh.
//!
//! Both queries are expressed purely in terms of the topology primitives:
//! they walk edges, never scan all vertices, and never mutate the mesh.
//! Corner vertices participate in the walks (they are part of the graph)
//! and appear in the raw results; the [`Placer`](crate::core::placer::Placer)
//! filters them out before anything reaches a client.

use std::collections::VecDeque;

use crate::core::collections::FastHashSet;
use crate::core::mesh::{Mesh, VertexKey};

/// The vertices directly connected to `v`, ordered by increasing Euclidean
/// distance from it.
///
/// These are the topologically nearest vertices: in a Delaunay
/// triangulation the closest vertex to `v` is always one of its direct
/// neighbors. The distance ordering makes the result deterministic.
#[must_use]
pub fn nearest<U>(mesh: &Mesh<U>, v: VertexKey) -> Vec<VertexKey> {
    let origin = mesh.point(v);
    let mut ring: Vec<VertexKey> = mesh.direct_neighbors(v).collect();
    ring.sort_by(|&x, &y| {
        mesh.point(x)
            .distance_squared_to(origin)
            .total_cmp(&mesh.point(y).distance_squared_to(origin))
    });
    ring
}

/// Breadth-first expansion outward from `v` along mesh edges.
///
/// Returns every vertex (excluding `v` itself) whose Euclidean distance `d`
/// from `v` satisfies `min_dist <= d < max_dist`, ordered by increasing
/// distance. The expansion never revisits a vertex and only crosses
/// vertices strictly closer than `max_dist`, so it stays local for bounded
/// queries; with `max_dist = f64::INFINITY` it visits the entire (finite)
/// mesh and still terminates.
#[must_use]
pub fn neighbors_within<U>(
    mesh: &Mesh<U>,
    v: VertexKey,
    max_dist: f64,
    min_dist: f64,
) -> Vec<VertexKey> {
    let origin = mesh.point(v);
    let mut visited: FastHashSet<VertexKey> = FastHashSet::default();
    let mut queue: VecDeque<VertexKey> = VecDeque::new();
    let mut admitted: Vec<(f64, VertexKey)> = Vec::new();

    visited.insert(v);
    queue.push_back(v);

    while let Some(u) = queue.pop_front() {
        for w in mesh.direct_neighbors(u) {
            if !visited.insert(w) {
                continue;
            }
            let d = mesh.point(w).distance_to(origin);
            if d >= min_dist && d < max_dist {
                admitted.push((d, w));
            }
            if d < max_dist {
                queue.push_back(w);
            }
        }
    }

    admitted.sort_by(|(da, _), (db, _)| da.total_cmp(db));
    admitted.into_iter().map(|(_, w)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_square() -> (Mesh<u32>, Vec<VertexKey>) {
        let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
        let keys = [
            (0, 50.0, 50.0),
            (1, 60.0, 50.0), // distance 10 from center
            (2, 50.0, 75.0), // distance 25
            (3, 10.0, 50.0), // distance 40
            (4, 50.0, 5.0),  // distance 45
        ]
        .into_iter()
        .map(|(i, x, y)| mesh.insert(i, x, y).unwrap())
        .collect();
        (mesh, keys)
    }

    #[test]
    fn nearest_is_distance_ordered() {
        let (mesh, keys) = mesh_with_square();
        let center = keys[0];
        let ring = nearest(&mesh, center);
        assert!(!ring.is_empty());

        let origin = mesh.point(center);
        for pair in ring.windows(2) {
            assert!(
                mesh.point(pair[0]).distance_to(origin)
                    <= mesh.point(pair[1]).distance_to(origin)
            );
        }
        // The closest client vertex is a direct neighbor and comes first
        // among client results.
        assert_eq!(ring[0], keys[1]);
    }

    #[test]
    fn nearest_does_not_mutate() {
        let (mesh, keys) = mesh_with_square();
        let faces = mesh.number_of_interior_faces();
        let _ = nearest(&mesh, keys[0]);
        assert_eq!(mesh.number_of_interior_faces(), faces);
        mesh.validate_topology().unwrap();
    }

    #[test]
    fn neighbors_within_respects_both_bounds() {
        let (mesh, keys) = mesh_with_square();
        let center = keys[0];

        let close = neighbors_within(&mesh, center, 30.0, 0.0);
        assert_eq!(close, vec![keys[1], keys[2]]);

        // Half-open interval: a vertex at exactly max_dist is excluded.
        let exact = neighbors_within(&mesh, center, 25.0, 0.0);
        assert_eq!(exact, vec![keys[1]]);

        let annulus = neighbors_within(&mesh, center, 42.0, 20.0);
        assert_eq!(annulus, vec![keys[2], keys[3]]);
    }

    #[test]
    fn unbounded_query_reaches_everything() {
        let (mesh, keys) = mesh_with_square();
        let all = neighbors_within(&mesh, keys[0], f64::INFINITY, 0.0);
        // Every other vertex of the mesh, corners included.
        assert_eq!(all.len(), mesh.number_of_vertices() - 1);
        for k in &keys[1..] {
            assert!(all.contains(k));
        }
    }

    #[test]
    fn excludes_the_start_vertex() {
        let (mesh, keys) = mesh_with_square();
        let all = neighbors_within(&mesh, keys[0], f64::INFINITY, 0.0);
        assert!(!all.contains(&keys[0]));
    }
}
