//! Vertex identifier bound.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a vertex identifier.
///
/// Ordering drives every iteration in the crate, so two runs over the same
/// graph always visit vertices in the same (ascending) order.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Vertex for T {}
