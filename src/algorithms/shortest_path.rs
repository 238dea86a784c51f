//! Single-source shortest paths (Dijkstra) over an adjacency matrix.
//!
//! Weights are non-negative by construction: both graph stores reject negative
//! weights on insertion. Selection is a linear scan, O(V²) overall.

use serde::Serialize;

use crate::graph::AdjacencyMatrix;
use crate::types::{GraphResult, Vertex};

/// One shortest path and its length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from source to destination, inclusive. Empty when unreachable.
    pub path: Vec<V>,
    /// Total distance; `None` when the destination is unreachable.
    pub distance: Option<f64>,
}

impl<V> ShortestPath<V> {
    /// Whether the destination was reached.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: None,
        }
    }
}

/// Distances and predecessors from one source to every vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'m, V: Vertex> {
    matrix: &'m AdjacencyMatrix<V>,
    source: usize,
    distances: Vec<Option<f64>>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<usize>,
}

impl<'m, V: Vertex> ShortestPathTree<'m, V> {
    /// The source vertex.
    pub fn source(&self) -> &V {
        &self.matrix.vertices()[self.source]
    }

    /// Shortest distance to `destination`, `None` if unreachable.
    pub fn distance_to(&self, destination: &V) -> GraphResult<Option<f64>> {
        let index = self.matrix.require_index(destination)?;
        Ok(self.distances[index])
    }

    /// Shortest path to `destination`, rebuilt from predecessor links.
    pub fn path_to(&self, destination: &V) -> GraphResult<ShortestPath<V>> {
        let target = self.matrix.require_index(destination)?;
        let Some(distance) = self.distances[target] else {
            return Ok(ShortestPath::unreachable());
        };

        let vertices = self.matrix.vertices();
        let mut path = vec![vertices[target].clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(vertices[previous].clone());
            current = previous;
        }
        path.reverse();

        Ok(ShortestPath {
            path,
            distance: Some(distance),
        })
    }

    /// Vertices in the order they were settled, with their final distances.
    ///
    /// Distances along this sequence never decrease.
    pub fn settle_order(&self) -> Vec<(&V, f64)> {
        let vertices = self.matrix.vertices();
        self.settled
            .iter()
            .filter_map(|&i| self.distances[i].map(|d| (&vertices[i], d)))
            .collect()
    }
}

/// Run Dijkstra from `source` over the whole matrix.
pub fn shortest_path_tree<'m, V: Vertex>(
    matrix: &'m AdjacencyMatrix<V>,
    source: &V,
) -> GraphResult<ShortestPathTree<'m, V>> {
    let source = matrix.require_index(source)?;
    let size = matrix.size();

    let mut distances: Vec<Option<f64>> = vec![None; size];
    let mut predecessors: Vec<Option<usize>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut settled = Vec::with_capacity(size);
    distances[source] = Some(0.0);

    loop {
        // Unvisited vertex with the smallest finite distance; lowest index wins ties.
        let mut current: Option<(usize, f64)> = None;
        for (v, distance) in distances.iter().enumerate() {
            if let (false, Some(d)) = (visited[v], *distance) {
                if current.map_or(true, |(_, best)| d < best) {
                    current = Some((v, d));
                }
            }
        }
        let Some((current, base)) = current else {
            break;
        };

        visited[current] = true;
        settled.push(current);
        log::trace!("dijkstra: settle {:?} at {}", matrix.vertices()[current], base);

        for (neighbor, weight) in matrix.edges_from(current) {
            if visited[neighbor] {
                continue;
            }
            let candidate = base + weight;
            // A sum past f64::MAX is not a usable distance.
            if !candidate.is_finite() {
                continue;
            }
            if distances[neighbor].map_or(true, |d| candidate < d) {
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(current);
            }
        }
    }

    log::debug!(
        "dijkstra from {:?}: {} of {} vertices reachable",
        matrix.vertices()[source],
        settled.len(),
        size
    );
    Ok(ShortestPathTree {
        matrix,
        source,
        distances,
        predecessors,
        settled,
    })
}

/// Shortest path from `source` to `destination`.
///
/// An unreachable destination yields an empty path and no distance.
pub fn dijkstra<V: Vertex>(
    matrix: &AdjacencyMatrix<V>,
    source: &V,
    destination: &V,
) -> GraphResult<ShortestPath<V>> {
    matrix.require_index(destination)?;
    shortest_path_tree(matrix, source)?.path_to(destination)
}
