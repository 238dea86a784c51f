//! The edge record used to feed graphs.

use serde::{Deserialize, Serialize};

/// One entry of an edge list: a source, a target and an optional weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Source vertex.
    pub source: V,
    /// Target vertex.
    pub target: V,
    /// Weight; required in weighted modes and rejected in unweighted ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl<V> Edge<V> {
    /// Create an unweighted edge.
    pub fn new(source: V, target: V) -> Self {
        Self {
            source,
            target,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source: V, target: V, weight: f64) -> Self {
        Self {
            source,
            target,
            weight: Some(weight),
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}

impl<V> From<(V, V, f64)> for Edge<V> {
    fn from((source, target, weight): (V, V, f64)) -> Self {
        Self::weighted(source, target, weight)
    }
}
