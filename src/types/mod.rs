//! All data types for the graph algorithms library.

pub mod edge;
pub mod error;
pub mod mode;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use mode::GraphMode;
pub use vertex::Vertex;

/// Implicit weight carried by every edge of an unweighted graph.
pub const UNIT_WEIGHT: f64 = 1.0;

/// Check that an edge weight is usable by every algorithm in the crate.
pub fn validate_weight(weight: f64) -> GraphResult<f64> {
    if !weight.is_finite() {
        return Err(GraphError::InvalidInput(format!(
            "edge weight must be finite, got {}",
            weight
        )));
    }
    if weight < 0.0 {
        return Err(GraphError::InvalidInput(format!(
            "negative edge weight {} is not supported",
            weight
        )));
    }
    Ok(weight)
}
