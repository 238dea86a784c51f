//! Graph traversal engine (iterative depth-first search).

use std::collections::HashSet;

use crate::types::{GraphError, GraphResult, Vertex};

use super::Graph;

/// Depth-first walk that yields vertices in discovery order.
///
/// The visited set is borrowed from the caller so several walks can share it,
/// which is how component discovery seeds one walk per unvisited vertex.
/// Uses an explicit stack; memory stays bounded by the edge count.
pub struct DepthFirst<'g, 's, V: Vertex> {
    graph: &'g Graph<V>,
    stack: Vec<&'g V>,
    visited: &'s mut HashSet<&'g V>,
}

impl<'g, 's, V: Vertex> Iterator for DepthFirst<'g, 's, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            // Every vertex on the stack came from the graph itself.
            if let Ok(neighbors) = self.graph.neighbors(current) {
                // Reverse so the smallest neighbor is popped first.
                for (neighbor, _) in neighbors.rev() {
                    if !self.visited.contains(neighbor) {
                        self.stack.push(neighbor);
                    }
                }
            }
            return Some(current);
        }
        None
    }
}

/// Start a depth-first walk from `start`.
///
/// Vertices already in `visited` are never yielded. Fails with `UnknownVertex`
/// if `start` is not in the graph.
pub fn depth_first<'g, 's, V: Vertex>(
    graph: &'g Graph<V>,
    start: &V,
    visited: &'s mut HashSet<&'g V>,
) -> GraphResult<DepthFirst<'g, 's, V>> {
    let start = graph
        .stored(start)
        .ok_or_else(|| GraphError::unknown(start))?;
    Ok(DepthFirst {
        graph,
        stack: vec![start],
        visited,
    })
}

/// All vertices reachable from `start` (including itself), in discovery order.
pub fn reachable_from<'g, V: Vertex>(graph: &'g Graph<V>, start: &V) -> GraphResult<Vec<&'g V>> {
    let mut visited = HashSet::new();
    let order = depth_first(graph, start, &mut visited)?.collect();
    Ok(order)
}
