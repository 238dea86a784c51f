//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphMode, GraphResult, Vertex};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nothing is validated until [`GraphBuilder::build`], which rejects the whole
/// edge list on the first malformed edge.
pub struct GraphBuilder<V: Vertex> {
    mode: GraphMode,
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new builder for the given mode.
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Shorthand for a directed, unweighted builder.
    pub fn directed() -> Self {
        Self::new(GraphMode::DirectedUnweighted)
    }

    /// Shorthand for an undirected, weighted builder.
    pub fn undirected_weighted() -> Self {
        Self::new(GraphMode::UndirectedWeighted)
    }

    /// Declare a vertex, possibly isolated.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add an unweighted edge.
    pub fn edge(&mut self, source: V, target: V) -> &mut Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(&mut self, source: V, target: V, weight: f64) -> &mut Self {
        self.edges.push(Edge::weighted(source, target, weight));
        self
    }

    /// Add any edge record.
    pub fn push(&mut self, edge: Edge<V>) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::from_edges(self.mode, self.edges.iter().cloned())?;
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        log::debug!(
            "Built {} graph with {} vertices and {} edges",
            self.mode,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
