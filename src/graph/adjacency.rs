//! Sparse graph store: vertex to neighbor mapping.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::types::{validate_weight, Edge, GraphError, GraphMode, GraphResult, Vertex, UNIT_WEIGHT};

use super::AdjacencyMatrix;

/// Adjacency-mapping graph used by traversal and component discovery.
///
/// Vertices and neighbor lists are kept in ascending order. An edge, once
/// inserted, is never overwritten.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    mode: GraphMode,
    /// vertex -> (neighbor -> weight)
    adjacency: BTreeMap<V, BTreeMap<V, f64>>,
    /// Number of stored directed pairs.
    arcs: usize,
    /// Number of stored self-loops.
    loops: usize,
}

/// Ascending `(neighbor, weight)` pairs of one vertex.
pub struct Neighbors<'g, V> {
    inner: btree_map::Iter<'g, V, f64>,
}

impl<'g, V> Iterator for Neighbors<'g, V> {
    type Item = (&'g V, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, w)| (v, *w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'g, V> DoubleEndedIterator for Neighbors<'g, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(v, w)| (v, *w))
    }
}

impl<'g, V> ExactSizeIterator for Neighbors<'g, V> {}

impl<V: Vertex> Graph<V> {
    /// Create a new empty graph.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            adjacency: BTreeMap::new(),
            arcs: 0,
            loops: 0,
        }
    }

    /// Build a graph from an edge list, rejecting it as a whole on the first bad edge.
    pub fn from_edges<I, E>(mode: GraphMode, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut graph = Self::new(mode);
        for edge in edges {
            let edge = edge.into();
            if !graph.add_edge(edge.source.clone(), edge.target.clone(), edge.weight)? {
                log::warn!(
                    "Ignoring duplicate edge {:?} -> {:?}",
                    edge.source,
                    edge.target
                );
            }
        }
        Ok(graph)
    }

    /// The storage mode of this graph.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Undirected edges are counted once.
    pub fn edge_count(&self) -> usize {
        if self.mode.is_directed() {
            self.arcs
        } else {
            (self.arcs - self.loops) / 2 + self.loops
        }
    }

    /// Whether the vertex has been declared.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// The graph's own copy of a vertex, borrowed for the graph's lifetime.
    pub(crate) fn stored(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(v, _)| v)
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.adjacency.keys()
    }

    /// Declare a vertex. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(BTreeMap::new());
                true
            }
        }
    }

    /// Add an edge, declaring both endpoints.
    ///
    /// Returns false (and changes nothing) if the directed pair already exists.
    pub fn add_edge(&mut self, source: V, target: V, weight: Option<f64>) -> GraphResult<bool> {
        let weight = self.resolve_weight(weight)?;
        Ok(self.link(source, target, weight))
    }

    /// Store an already-resolved edge. Returns false if the pair exists.
    fn link(&mut self, source: V, target: V, weight: f64) -> bool {
        if self
            .adjacency
            .get(&source)
            .is_some_and(|n| n.contains_key(&target))
        {
            return false;
        }

        self.add_vertex(target.clone());
        if source == target {
            self.loops += 1;
        } else if !self.mode.is_directed() {
            self.arcs += 1;
            self.adjacency
                .entry(target.clone())
                .or_default()
                .insert(source.clone(), weight);
        }
        self.arcs += 1;
        self.adjacency
            .entry(source)
            .or_default()
            .insert(target, weight);
        true
    }

    /// Neighbors of a vertex with the weights of the connecting edges.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<Neighbors<'_, V>> {
        self.adjacency
            .get(vertex)
            .map(|inner| Neighbors {
                inner: inner.iter(),
            })
            .ok_or_else(|| GraphError::unknown(vertex))
    }

    /// Weight of the edge `source -> target`, or `None` if there is no such edge.
    pub fn weight(&self, source: &V, target: &V) -> GraphResult<Option<f64>> {
        if !self.contains_vertex(target) {
            return Err(GraphError::unknown(target));
        }
        let neighbors = self
            .adjacency
            .get(source)
            .ok_or_else(|| GraphError::unknown(source))?;
        Ok(neighbors.get(target).copied())
    }

    /// Every stored edge once, in ascending `(source, target)` order.
    ///
    /// Undirected edges are reported with `source <= target`.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let weighted = self.mode.is_weighted();
        let directed = self.mode.is_directed();
        self.adjacency
            .iter()
            .flat_map(|(source, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(target, _)| directed || source <= *target)
                    .map(move |(target, weight)| Edge {
                        source: source.clone(),
                        target: target.clone(),
                        weight: weighted.then_some(*weight),
                    })
            })
            .collect()
    }

    /// Undirected copy of this graph: every `u -> v` also yields `v -> u`.
    ///
    /// When both directions exist with different weights, the one met first in
    /// ascending `(source, target)` order is kept.
    pub fn undirected_closure(&self) -> Graph<V> {
        let mut closure = Graph::new(self.mode.undirected());
        for (source, neighbors) in &self.adjacency {
            closure.add_vertex(source.clone());
            for (target, weight) in neighbors {
                closure.link(source.clone(), target.clone(), *weight);
            }
        }
        closure
    }

    /// Dense copy of this graph over the same vertices in ascending order.
    pub fn to_matrix(&self) -> AdjacencyMatrix<V> {
        let vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        let mut matrix = AdjacencyMatrix::from_sorted(vertices, self.mode.is_directed());
        for (i, neighbors) in self.adjacency.values().enumerate() {
            for (target, weight) in neighbors {
                if let Some(j) = matrix.index_of(target) {
                    matrix.store(i, j, *weight);
                }
            }
        }
        matrix
    }

    fn resolve_weight(&self, weight: Option<f64>) -> GraphResult<f64> {
        match (self.mode.is_weighted(), weight) {
            (true, Some(w)) => validate_weight(w),
            (true, None) => Err(GraphError::InvalidInput(format!(
                "{} graph requires a weight on every edge",
                self.mode
            ))),
            (false, None) => Ok(UNIT_WEIGHT),
            (false, Some(w)) => Err(GraphError::InvalidInput(format!(
                "{} graph does not accept edge weight {}",
                self.mode, w
            ))),
        }
    }
}
