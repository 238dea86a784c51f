//! Algorithms over the graph stores.

pub mod binary_tree;
pub mod components;
pub mod mst;
pub mod reachability;
pub mod shortest_path;
pub mod union_find;

pub use binary_tree::BinaryTree;
pub use components::{
    find_components, strong_components, weak_components, Component, ComponentStrategy,
};
pub use mst::{kruskal, prim, SpanningEdge, SpanningForest};
pub use reachability::path_exists;
pub use shortest_path::{dijkstra, shortest_path_tree, ShortestPath, ShortestPathTree};
pub use union_find::UnionFind;
