//! Error types for the graph algorithms library.

use thiserror::Error;

/// All errors that can occur in the graph algorithms library.
///
/// An unreachable destination is not an error: path queries report it through
/// their result types.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex was never declared to the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Matrix index outside the fixed vertex range.
    #[error("Index {index} out of bounds for {size} vertices")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Malformed edge list, weight, or matrix.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build an `UnknownVertex` error from any vertex identifier.
    pub fn unknown<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
