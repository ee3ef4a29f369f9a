//! Property-based tests for the triangulation invariants.
//!
//! - Empty circumcircle condition (no vertex strictly inside any interior
//!   face's circumcircle)
//! - Half-edge topology consistency after arbitrary insertion sequences
//! - Invariant preservation across random move sequences

use planemesh::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: f64 = 100.0;
const HEIGHT: f64 = 100.0;

fn in_bounds_point() -> impl Strategy<Value = (f64, f64)> {
    (0.0..WIDTH, 0.0..HEIGHT)
}

/// Inserts a batch of points, tolerating near-duplicate rejections, and
/// returns the keys of the points that made it in.
fn insert_all(mesh: &mut Mesh<usize>, points: &[(f64, f64)]) -> Vec<VertexKey> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, &(x, y))| match mesh.insert(i, x, y) {
            Ok(v) => Some(v),
            Err(MeshError::DuplicatePoint { .. }) => None,
            Err(other) => panic!("in-bounds insert failed: {other}"),
        })
        .collect()
}

proptest! {
    #[test]
    fn random_insertions_stay_delaunay(points in prop::collection::vec(in_bounds_point(), 1..40)) {
        let mut mesh: Mesh<usize> = Mesh::new(WIDTH, HEIGHT).unwrap();
        let inserted = insert_all(&mut mesh, &points);

        prop_assert_eq!(mesh.number_of_client_vertices(), inserted.len());
        mesh.validate_topology().unwrap();
        mesh.validate_delaunay().unwrap();
    }

    #[test]
    fn euler_formula_holds(points in prop::collection::vec(in_bounds_point(), 1..40)) {
        let mut mesh: Mesh<usize> = Mesh::new(WIDTH, HEIGHT).unwrap();
        insert_all(&mut mesh, &points);

        // V - E + F = 2 counting the outside face.
        let v = mesh.number_of_vertices() as isize;
        let e = (mesh.number_of_half_edges() / 2) as isize;
        let f = (mesh.number_of_interior_faces() + 1) as isize;
        prop_assert_eq!(v - e + f, 2);
    }

    #[test]
    fn every_client_vertex_is_reachable(points in prop::collection::vec(in_bounds_point(), 2..30)) {
        let mut mesh: Mesh<usize> = Mesh::new(WIDTH, HEIGHT).unwrap();
        let inserted = insert_all(&mut mesh, &points);
        prop_assume!(inserted.len() >= 2);

        let reached = neighbors_within(&mesh, inserted[0], f64::INFINITY, 0.0);
        // The graph is connected: an unbounded walk from any vertex reaches
        // every other vertex, corners included.
        prop_assert_eq!(reached.len(), mesh.number_of_vertices() - 1);
        for v in &inserted[1..] {
            prop_assert!(reached.contains(v));
        }
    }

    #[test]
    fn random_moves_preserve_invariants(
        points in prop::collection::vec(in_bounds_point(), 3..20),
        moves in prop::collection::vec((0usize..20, -15.0..15.0f64, -15.0..15.0f64), 1..30),
    ) {
        let mut mesh: Mesh<usize> = Mesh::new(WIDTH, HEIGHT).unwrap();
        let inserted = insert_all(&mut mesh, &points);
        prop_assume!(!inserted.is_empty());

        for (pick, dx, dy) in moves {
            let v = inserted[pick % inserted.len()];
            match mesh.move_by(v, dx, dy) {
                Ok(())
                | Err(MeshError::OutOfBounds { .. })
                | Err(MeshError::DuplicatePoint { .. }) => {}
                Err(other) => panic!("unexpected move failure: {other}"),
            }
        }

        mesh.validate_topology().unwrap();
        mesh.validate_delaunay().unwrap();
    }

    #[test]
    fn locate_finds_every_inserted_point(points in prop::collection::vec(in_bounds_point(), 1..30)) {
        let mut mesh: Mesh<usize> = Mesh::new(WIDTH, HEIGHT).unwrap();
        let inserted = insert_all(&mut mesh, &points);

        for &v in &inserted {
            prop_assert_eq!(mesh.locate(mesh.point(v)), LocateResult::OnVertex(v));
        }
    }
}

#[test]
fn two_hundred_random_points() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut mesh: Mesh<u32> = Mesh::new(WIDTH, HEIGHT).unwrap();
    let mut count = 0;

    for i in 0..200u32 {
        let x = rng.random_range(0.0..WIDTH);
        let y = rng.random_range(0.0..HEIGHT);
        match mesh.insert(i, x, y) {
            Ok(_) => count += 1,
            Err(MeshError::DuplicatePoint { .. }) => {}
            Err(other) => panic!("insert failed: {other}"),
        }
    }

    assert_eq!(mesh.number_of_client_vertices(), count);
    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();
}

#[test]
fn collinear_points_triangulate() {
    let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
    for i in 0..10u32 {
        let t = f64::from(i);
        mesh.insert(i, 5.0 + 9.0 * t, 5.0 + 9.0 * t).unwrap();
    }
    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();
}

#[test]
fn grid_points_with_cocircular_quads() {
    // A regular grid is the classic degenerate input: every unit square's
    // four corners are cocircular, so either diagonal is legal.
    let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
    let mut id = 0;
    for i in 0..6 {
        for j in 0..6 {
            mesh.insert(id, 10.0 + 12.0 * f64::from(i), 10.0 + 12.0 * f64::from(j))
                .unwrap();
            id += 1;
        }
    }
    assert_eq!(mesh.number_of_client_vertices(), 36);
    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();
}

#[test]
fn grid_vertices_move_through_degenerate_spots() {
    // Lattice points keep the mesh full of cocircular quads; moving through
    // and out of cell centers exercises the degenerate star excisions that
    // general-position inputs never reach.
    let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
    let mut keys = Vec::new();
    let mut id = 0;
    for i in 0..5 {
        for j in 0..5 {
            keys.push(
                mesh.insert(id, 20.0 + 12.0 * f64::from(i), 20.0 + 12.0 * f64::from(j))
                    .unwrap(),
            );
            id += 1;
        }
    }

    // A vertex at a cell center is cocircular with the four cell corners
    // and lands on the cell diagonal at degree 4.
    let center = mesh.insert(id, 26.0, 26.0).unwrap();
    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();

    // Walk it across several cell centers, exact lattice midpoints included.
    for (dx, dy) in [(12.0, 0.0), (0.0, 12.0), (-6.0, 0.0), (24.0, 24.0)] {
        mesh.move_by(center, dx, dy).unwrap();
        mesh.validate_topology().unwrap();
        mesh.validate_delaunay().unwrap();
    }

    // Shift a whole lattice row onto cell centers and back.
    for &v in &keys[5..10] {
        mesh.move_by(v, 6.0, 6.0).unwrap();
        mesh.validate_topology().unwrap();
        mesh.validate_delaunay().unwrap();
    }
    for &v in &keys[5..10] {
        mesh.move_by(v, -6.0, -6.0).unwrap();
    }
    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();
    assert_eq!(mesh.number_of_client_vertices(), 26);
}

#[test]
fn near_duplicate_is_rejected_exact_duplicate_too() {
    let mut mesh: Mesh<u32> = Mesh::new(100.0, 100.0).unwrap();
    mesh.insert(0, 50.0, 50.0).unwrap();

    assert!(matches!(
        mesh.insert(1, 50.0, 50.0),
        Err(MeshError::DuplicatePoint { .. })
    ));
    assert!(matches!(
        mesh.insert(2, 50.0 + 1e-12, 50.0),
        Err(MeshError::DuplicatePoint { .. })
    ));
    assert_eq!(mesh.number_of_client_vertices(), 1);
    mesh.validate_topology().unwrap();
}

#[test]
fn moves_across_the_whole_plane() {
    let mut rng = StdRng::seed_from_u64(9001);
    let mut mesh: Mesh<u32> = Mesh::new(WIDTH, HEIGHT).unwrap();

    let mut keys = Vec::new();
    for i in 0..25u32 {
        let x = rng.random_range(0.0..WIDTH);
        let y = rng.random_range(0.0..HEIGHT);
        if let Ok(v) = mesh.insert(i, x, y) {
            keys.push(v);
        }
    }

    // Long-distance moves: teleport each vertex to a fresh random spot.
    for _ in 0..100 {
        let v = keys[rng.random_range(0..keys.len())];
        let from = mesh.point(v);
        let to_x = rng.random_range(0.0..WIDTH);
        let to_y = rng.random_range(0.0..HEIGHT);
        match mesh.move_by(v, to_x - from.x, to_y - from.y) {
            Ok(()) | Err(MeshError::DuplicatePoint { .. }) => {}
            Err(other) => panic!("unexpected move failure: {other}"),
        }
    }

    mesh.validate_topology().unwrap();
    mesh.validate_delaunay().unwrap();
}
