//! JSON graph documents and command-line vertex labels.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, GraphMode, GraphResult};

/// A vertex label as typed by a user: an integer or a name.
///
/// Integers sort before names, and numerically among themselves.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Id(i64),
    Name(String),
}

impl FromStr for Label {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>()
            .map(Label::Id)
            .unwrap_or_else(|_| Label::Name(s.to_string())))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Id(id) => write!(f, "{}", id),
            Label::Name(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Id(id) => write!(f, "{}", id),
            Label::Name(name) => write!(f, "{:?}", name),
        }
    }
}

impl From<i64> for Label {
    fn from(id: i64) -> Self {
        Label::Id(id)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

/// A graph as stored on disk.
///
/// ```json
/// {"mode": "undirected-weighted", "vertices": [10],
///  "edges": [{"source": 1, "target": 2, "weight": 4.0}]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Storage mode.
    pub mode: GraphMode,
    /// Extra vertices, typically isolated ones.
    #[serde(default)]
    pub vertices: Vec<Label>,
    /// Edge list.
    #[serde(default)]
    pub edges: Vec<Edge<Label>>,
}

impl GraphDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a document from a JSON file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the sparse graph described by this document.
    pub fn to_graph(&self) -> GraphResult<Graph<Label>> {
        let mut builder = GraphBuilder::new(self.mode);
        builder.vertices(self.vertices.iter().cloned());
        for edge in &self.edges {
            builder.push(edge.clone());
        }
        builder.build()
    }
}

/// Read a JSON graph document and build its graph.
pub fn load_graph(path: &Path) -> GraphResult<Graph<Label>> {
    let graph = GraphDocument::read_from_file(path)?.to_graph()?;
    log::info!(
        "Loaded {} with {} vertices and {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
