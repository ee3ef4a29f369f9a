//! Client-facing façade over the mesh.
//!
//! A [`Placer`] maps opaque client objects to mesh vertices and re-exposes
//! the navigation queries in terms of those objects. Clients never see
//! vertex, edge, or face handles — legalization may retire and replace them
//! at any time — and never see the synthetic corner vertices, which have no
//! corresponding client object.

use std::hash::Hash;

use thiserror::Error;

use crate::core::collections::FastHashMap;
use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::navigation;
use crate::geometry::point::Point;

/// Errors reported by the [`Placer`] façade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacerError {
    /// The object has never been placed (or query before any `add`).
    #[error("object is not placed")]
    UnknownObject,

    /// The underlying mesh rejected the operation.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Maps client objects to mesh vertices over a bounded plane.
///
/// `T` is the client payload: it must be usable as a map key (`Eq + Hash`)
/// and cloneable, since one copy lives in the lookup map and one on the
/// vertex. The mesh never inspects or mutates it.
///
/// # Example
///
/// ```
/// use planemesh::prelude::*;
///
/// let mut placer = Placer::new(100.0, 100.0).unwrap();
/// placer.add("a", 10.0, 10.0).unwrap();
/// placer.add("b", 90.0, 90.0).unwrap();
/// placer.add("c", 10.0, 90.0).unwrap();
///
/// let near = placer.nearest(&"a").unwrap();
/// assert!(!near.is_empty());
/// assert_eq!(placer.len(), 3);
/// ```
pub struct Placer<T>
where
    T: Eq + Hash + Clone,
{
    mesh: Mesh<T>,
    handles: FastHashMap<T, VertexKey>,
}

impl<T> Placer<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a placer over the plane `[0, width) x [0, height)`.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidBounds`] for non-positive or non-finite bounds.
    pub fn new(width: f64, height: f64) -> Result<Self, MeshError> {
        Ok(Self {
            mesh: Mesh::new(width, height)?,
            handles: FastHashMap::default(),
        })
    }

    /// Places `obj` at `(x, y)`.
    ///
    /// Re-adding an already-placed object is not an error: it is logged and
    /// redirected to [`Placer::move_by`] with the delta to the requested
    /// position, so the object count never grows from a repeated `add`.
    ///
    /// # Errors
    ///
    /// [`MeshError::OutOfBounds`] / [`MeshError::DuplicatePoint`] from the
    /// mesh, forwarded unchanged.
    pub fn add(&mut self, obj: T, x: f64, y: f64) -> Result<(), PlacerError> {
        if let Some(&v) = self.handles.get(&obj) {
            let current = self.mesh.point(v);
            tracing::warn!(x, y, "object already placed; moving it instead");
            self.mesh.move_by(v, x - current.x, y - current.y)?;
            return Ok(());
        }

        let v = self.mesh.insert(obj.clone(), x, y)?;
        self.handles.insert(obj, v);
        Ok(())
    }

    /// Translates a placed object by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// [`PlacerError::UnknownObject`] when `obj` was never placed, or the
    /// mesh's boundary/duplicate errors.
    pub fn move_by(&mut self, obj: &T, dx: f64, dy: f64) -> Result<(), PlacerError> {
        let v = self.lookup(obj)?;
        self.mesh.move_by(v, dx, dy)?;
        Ok(())
    }

    /// Current position of a placed object.
    ///
    /// # Errors
    ///
    /// [`PlacerError::UnknownObject`] when `obj` was never placed.
    pub fn position(&self, obj: &T) -> Result<Point, PlacerError> {
        Ok(self.mesh.point(self.lookup(obj)?))
    }

    /// The objects directly connected to `obj` in the mesh, closest first.
    ///
    /// Corner vertices are filtered out: they have no client object.
    ///
    /// # Errors
    ///
    /// [`PlacerError::UnknownObject`] when `obj` was never placed.
    pub fn nearest(&self, obj: &T) -> Result<Vec<&T>, PlacerError> {
        let v = self.lookup(obj)?;
        Ok(navigation::nearest(&self.mesh, v)
            .into_iter()
            .filter_map(|k| self.mesh.payload(k))
            .collect())
    }

    /// The objects whose distance `d` from `obj` satisfies
    /// `min_dist <= d < max_dist`, closest first. Pass `f64::INFINITY` for
    /// an unbounded query. Corner vertices are filtered out.
    ///
    /// # Errors
    ///
    /// [`PlacerError::UnknownObject`] when `obj` was never placed.
    pub fn neighbors(&self, obj: &T, max_dist: f64, min_dist: f64) -> Result<Vec<&T>, PlacerError> {
        let v = self.lookup(obj)?;
        Ok(navigation::neighbors_within(&self.mesh, v, max_dist, min_dist)
            .into_iter()
            .filter_map(|k| self.mesh.payload(k))
            .collect())
    }

    /// Whether `obj` is currently placed.
    #[must_use]
    pub fn contains(&self, obj: &T) -> bool {
        self.handles.contains_key(obj)
    }

    /// Number of placed objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True when nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterates over the placed objects, corners never included.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.handles.keys()
    }

    /// Read access to the underlying mesh, for diagnostics and validation.
    #[must_use]
    pub const fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    fn lookup(&self, obj: &T) -> Result<VertexKey, PlacerError> {
        self.handles
            .get(obj)
            .copied()
            .ok_or(PlacerError::UnknownObject)
    }
}

impl<'a, T> IntoIterator for &'a Placer<T>
where
    T: Eq + Hash + Clone,
{
    type Item = &'a T;
    type IntoIter = std::collections::hash_map::Keys<'a, T, VertexKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.keys()
    }
}
