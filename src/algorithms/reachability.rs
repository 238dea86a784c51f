//! Directed path-existence queries.

use std::collections::HashSet;

use crate::graph::{depth_first, Graph};
use crate::types::{GraphError, GraphResult, Vertex};

/// Whether a directed path of length zero or more leads from `start` to `end`.
///
/// Stops exploring as soon as `end` is discovered. Both endpoints must be
/// declared; an undeclared one is `UnknownVertex`.
pub fn path_exists<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> GraphResult<bool> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::unknown(start));
    }
    if !graph.contains_vertex(end) {
        return Err(GraphError::unknown(end));
    }
    if start == end {
        return Ok(true);
    }

    let mut visited = HashSet::new();
    let found = depth_first(graph, start, &mut visited)?.any(|v| v == end);
    log::trace!(
        "path {:?} -> {:?}: {} ({} vertices explored)",
        start,
        end,
        found,
        visited.len()
    );
    Ok(found)
}
