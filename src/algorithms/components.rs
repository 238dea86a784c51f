//! Weak and strong component discovery.
//!
//! Both strategies share the depth-first traversal engine. Strong components
//! are found by pairwise mutual reachability, which is O(V²) reachability
//! queries: fine for the small graphs this crate targets, slow on large ones.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{depth_first, Graph};
use crate::types::{GraphResult, Vertex};

use super::reachability::path_exists;

/// How components are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStrategy {
    /// Connected once edge direction is ignored.
    Weak,
    /// Every pair mutually reachable along directed edges.
    Strong,
}

/// One component: its vertices in reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Component<V> {
    vertices: Vec<V>,
}

impl<V: Vertex> Component<V> {
    /// Vertices in the order they were grouped.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the component has no vertices (never true for discovered ones).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the vertex belongs to this component.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Vertices in ascending order.
    pub fn sorted(&self) -> Vec<V> {
        let mut sorted = self.vertices.clone();
        sorted.sort();
        sorted
    }

    /// Consume into the vertex list.
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// Partition every vertex of the graph into components.
pub fn find_components<V: Vertex>(
    graph: &Graph<V>,
    strategy: ComponentStrategy,
) -> GraphResult<Vec<Component<V>>> {
    let components = match strategy {
        ComponentStrategy::Weak => weak_components(graph)?,
        ComponentStrategy::Strong => strong_components(graph)?,
    };
    log::debug!(
        "Found {} {:?} components over {} vertices",
        components.len(),
        strategy,
        graph.vertex_count()
    );
    Ok(components)
}

/// Weak components, seeded in ascending vertex order.
///
/// Each component lists its vertices in discovery order; components appear in
/// the order their seed was reached.
pub fn weak_components<V: Vertex>(graph: &Graph<V>) -> GraphResult<Vec<Component<V>>> {
    let closure = graph.undirected_closure();
    let mut visited = HashSet::new();
    let mut components = Vec::new();

    for seed in closure.vertices() {
        if visited.contains(seed) {
            continue;
        }
        let vertices = depth_first(&closure, seed, &mut visited)?
            .cloned()
            .collect();
        components.push(Component { vertices });
    }
    Ok(components)
}

/// Strong components by pairwise mutual reachability.
///
/// Each unprocessed vertex (ascending) opens a component and absorbs every
/// later unprocessed vertex it can reach and be reached from.
pub fn strong_components<V: Vertex>(graph: &Graph<V>) -> GraphResult<Vec<Component<V>>> {
    let vertices: Vec<&V> = graph.vertices().collect();
    let mut processed = vec![false; vertices.len()];
    let mut components = Vec::new();

    for (i, &seed) in vertices.iter().enumerate() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let mut members = vec![seed.clone()];
        for (j, &other) in vertices.iter().enumerate().skip(i + 1) {
            if processed[j] {
                continue;
            }
            if path_exists(graph, seed, other)? && path_exists(graph, other, seed)? {
                processed[j] = true;
                members.push(other.clone());
            }
        }
        components.push(Component { vertices: members });
    }
    Ok(components)
}
