//! The four storage modes of a graph.

use serde::{Deserialize, Serialize};

/// Edge direction and weighting of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphMode {
    /// Only the inserted direction is stored; edges carry the unit weight.
    DirectedUnweighted,
    /// Only the inserted direction is stored; every edge needs a weight.
    DirectedWeighted,
    /// Edges are mirrored; edges carry the unit weight.
    UndirectedUnweighted,
    /// Edges are mirrored; every edge needs a weight.
    UndirectedWeighted,
}

impl GraphMode {
    /// Build a mode from its two flags.
    pub fn new(directed: bool, weighted: bool) -> Self {
        match (directed, weighted) {
            (true, false) => Self::DirectedUnweighted,
            (true, true) => Self::DirectedWeighted,
            (false, false) => Self::UndirectedUnweighted,
            (false, true) => Self::UndirectedWeighted,
        }
    }

    /// Whether only the inserted direction of an edge is discoverable.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::DirectedUnweighted | Self::DirectedWeighted)
    }

    /// Whether edges carry caller-supplied weights.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::DirectedWeighted | Self::UndirectedWeighted)
    }

    /// The same weighting with direction dropped.
    pub fn undirected(&self) -> Self {
        Self::new(false, self.is_weighted())
    }

    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DirectedUnweighted => "directed-unweighted",
            Self::DirectedWeighted => "directed-weighted",
            Self::UndirectedUnweighted => "undirected-unweighted",
            Self::UndirectedWeighted => "undirected-weighted",
        }
    }

    /// Parse a mode from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "directed-unweighted" | "directed" => Some(Self::DirectedUnweighted),
            "directed-weighted" => Some(Self::DirectedWeighted),
            "undirected-unweighted" | "undirected" => Some(Self::UndirectedUnweighted),
            "undirected-weighted" => Some(Self::UndirectedWeighted),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
