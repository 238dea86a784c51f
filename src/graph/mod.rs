//! Graph stores and the traversal engine.

pub mod adjacency;
pub mod builder;
pub mod matrix;
pub mod traversal;

pub use adjacency::{Graph, Neighbors};
pub use builder::GraphBuilder;
pub use matrix::AdjacencyMatrix;
pub use traversal::{depth_first, reachable_from, DepthFirst};
