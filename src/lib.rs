//! Graph algorithms: a small engine of classical graph algorithms.
//!
//! One graph abstraction (directed or undirected, weighted or unweighted) in a
//! sparse form for traversal and component discovery, and a dense matrix form
//! for spanning trees and shortest paths.

pub mod algorithms;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algorithms::{
    dijkstra, find_components, kruskal, path_exists, prim, shortest_path_tree,
    strong_components, weak_components, BinaryTree, Component, ComponentStrategy, ShortestPath,
    ShortestPathTree, SpanningEdge, SpanningForest, UnionFind,
};
pub use graph::{depth_first, reachable_from, AdjacencyMatrix, DepthFirst, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphMode, GraphResult, Vertex, UNIT_WEIGHT};
