//! Minimum spanning trees: Prim's and Kruskal's algorithms.
//!
//! Both run over an undirected adjacency matrix and produce a spanning forest
//! with its total weight. Kruskal spans every connected component; Prim spans
//! only the component of its root.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::AdjacencyMatrix;
use crate::types::{GraphError, GraphResult, Vertex};

use super::union_find::UnionFind;

/// An edge accepted into a spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningEdge<V> {
    /// Endpoint already in the tree when the edge was accepted (Prim), or the
    /// lower-index endpoint (Kruskal).
    pub source: V,
    /// The other endpoint.
    pub target: V,
    /// Edge weight.
    pub weight: f64,
}

/// Selected edges, in acceptance order, and their summed weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<V> {
    pub edges: Vec<SpanningEdge<V>>,
    pub total_weight: f64,
}

impl<V> SpanningForest<V> {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn accept(&mut self, source: V, target: V, weight: f64) {
        self.total_weight += weight;
        self.edges.push(SpanningEdge {
            source,
            target,
            weight,
        });
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A candidate edge on Prim's frontier.
#[derive(Debug)]
struct FrontierEdge {
    weight: f64,
    /// Push order; breaks weight ties so earlier discoveries win.
    seq: u64,
    parent: Option<usize>,
    target: usize,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    // Reversed: BinaryHeap is a max-heap and the lightest edge must come out first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn require_undirected<V: Vertex>(matrix: &AdjacencyMatrix<V>) -> GraphResult<()> {
    if matrix.is_directed() {
        return Err(GraphError::InvalidInput(
            "minimum spanning trees need an undirected graph".to_string(),
        ));
    }
    Ok(())
}

/// Prim's algorithm from `root`.
///
/// Only the root's connected component is spanned. The root itself has no
/// parent edge.
pub fn prim<V: Vertex>(matrix: &AdjacencyMatrix<V>, root: &V) -> GraphResult<SpanningForest<V>> {
    require_undirected(matrix)?;
    let root = matrix.require_index(root)?;
    let vertices = matrix.vertices();

    let mut visited = vec![false; matrix.size()];
    let mut forest = SpanningForest::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    frontier.push(FrontierEdge {
        weight: 0.0,
        seq,
        parent: None,
        target: root,
    });

    while let Some(FrontierEdge {
        weight,
        parent,
        target,
        ..
    }) = frontier.pop()
    {
        if visited[target] {
            continue;
        }
        visited[target] = true;
        if let Some(parent) = parent {
            log::trace!(
                "prim: accept {:?} - {:?} ({})",
                vertices[parent],
                vertices[target],
                weight
            );
            forest.accept(vertices[parent].clone(), vertices[target].clone(), weight);
        }

        for (neighbor, w) in matrix.edges_from(target) {
            if !visited[neighbor] {
                seq += 1;
                frontier.push(FrontierEdge {
                    weight: w,
                    seq,
                    parent: Some(target),
                    target: neighbor,
                });
            }
        }
    }

    log::debug!(
        "prim from {:?}: {} edges, total weight {}",
        vertices[root],
        forest.edge_count(),
        forest.total_weight
    );
    Ok(forest)
}

/// Kruskal's algorithm over every edge of the matrix.
///
/// Each undirected edge is considered once, lightest first; ties go to the
/// lower `(i, j)` index pair. Produces one tree per connected component.
pub fn kruskal<V: Vertex>(matrix: &AdjacencyMatrix<V>) -> GraphResult<SpanningForest<V>> {
    require_undirected(matrix)?;
    let size = matrix.size();
    let vertices = matrix.vertices();

    // Upper triangle only: (i, j) and (j, i) are the same edge; self-loops never join sets.
    let mut edges: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..size {
        for (j, w) in matrix.edges_from(i) {
            if j > i {
                edges.push((w, i, j));
            }
        }
    }
    edges.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    let mut sets = UnionFind::new(size);
    let mut forest = SpanningForest::new();
    for (weight, i, j) in edges {
        if sets.union(i, j) {
            log::trace!(
                "kruskal: accept {:?} - {:?} ({})",
                vertices[i],
                vertices[j],
                weight
            );
            forest.accept(vertices[i].clone(), vertices[j].clone(), weight);
        }
    }

    log::debug!(
        "kruskal: {} edges, {} trees, total weight {}",
        forest.edge_count(),
        sets.component_count(),
        forest.total_weight
    );
    Ok(forest)
}
