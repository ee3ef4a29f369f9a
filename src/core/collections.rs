//! Collection aliases used throughout the crate.
//!
//! Internal bookkeeping maps are keyed by slotmap keys or client payloads,
//! never by attacker-controlled data, so a fast non-cryptographic hasher is
//! the right trade-off.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// `HashMap` with the fast `FxHasher`.
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// `HashSet` with the fast `FxHasher`.
pub type FastHashSet<V> = FxHashSet<V>;

/// Small stack-allocated buffer for short-lived key collections.
///
/// Topology walks produce at most a handful of keys (3 edges per face, the
/// degree of a vertex), so buffers of this shape rarely touch the heap.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;
