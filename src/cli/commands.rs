//! CLI command implementations.

use std::path::Path;

use crate::algorithms::{
    dijkstra, find_components, kruskal, path_exists, prim, BinaryTree, ComponentStrategy,
    SpanningForest,
};
use crate::types::{GraphError, GraphResult};

use super::input::{load_graph, GraphDocument, Label};

/// Which spanning-tree algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl MstAlgorithm {
    /// Parse an algorithm from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "prim" => Some(Self::Prim),
            "kruskal" => Some(Self::Kruskal),
            _ => None,
        }
    }

    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn join(labels: &[Label], separator: &str) -> String {
    labels
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "mode": graph.mode().name(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Mode: {}", graph.mode());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Check whether a directed path exists between two vertices.
pub fn cmd_reach(path: &Path, start: &Label, end: &Label, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let exists = path_exists(&graph, start, end)?;

    if json {
        print_json(&serde_json::json!({"start": start, "end": end, "path_exists": exists}));
    } else if exists {
        println!("True: a path exists from {} to {}.", start, end);
    } else {
        println!("False: no path exists from {} to {}.", start, end);
    }
    Ok(())
}

/// List weak or strong components.
pub fn cmd_components(path: &Path, strategy: ComponentStrategy, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let components = find_components(&graph, strategy)?;

    if json {
        print_json(&serde_json::json!({
            "strategy": format!("{:?}", strategy).to_lowercase(),
            "components": components,
        }));
    } else {
        let title = match strategy {
            ComponentStrategy::Weak => "Weakly connected components:",
            ComponentStrategy::Strong => "Strongly connected components:",
        };
        println!("{}", title);
        for (i, component) in components.iter().enumerate() {
            println!("Component {}: {}", i + 1, join(&component.sorted(), " "));
        }
    }
    Ok(())
}

/// Build a minimum spanning tree (or forest).
pub fn cmd_mst(
    path: &Path,
    algorithm: MstAlgorithm,
    root: Option<Label>,
    json: bool,
) -> GraphResult<()> {
    let matrix = load_graph(path)?.to_matrix();

    let forest: SpanningForest<Label> = match algorithm {
        MstAlgorithm::Prim => {
            let root = match root {
                Some(root) => root,
                None => matrix
                    .vertices()
                    .first()
                    .cloned()
                    .ok_or_else(|| GraphError::InvalidInput("graph has no vertices".into()))?,
            };
            prim(&matrix, &root)?
        }
        MstAlgorithm::Kruskal => kruskal(&matrix)?,
    };

    if json {
        print_json(&serde_json::json!({
            "algorithm": algorithm.name(),
            "edges": forest.edges,
            "total_weight": forest.total_weight,
        }));
    } else {
        println!("Edges in MST ({}):", algorithm.name());
        for edge in &forest.edges {
            println!("  {} - {} ({})", edge.source, edge.target, edge.weight);
        }
        println!("Total weight: {}", forest.total_weight);
    }
    Ok(())
}

/// Find a shortest path between two vertices.
pub fn cmd_path(path: &Path, source: &Label, destination: &Label, json: bool) -> GraphResult<()> {
    let matrix = load_graph(path)?.to_matrix();
    let result = dijkstra(&matrix, source, destination)?;

    if json {
        print_json(&serde_json::json!({
            "source": source,
            "destination": destination,
            "reachable": result.is_reachable(),
            "path": result.path,
            "distance": result.distance,
        }));
    } else {
        match result.distance {
            Some(distance) => {
                println!("Shortest path from {} to {}:", source, destination);
                println!("{}", join(&result.path, " -> "));
                println!("Total weight: {}", distance);
            }
            None => println!("No path from {} to {}.", source, destination),
        }
    }
    Ok(())
}

/// In-order traversal of the binary tree described by a document's edges.
pub fn cmd_inorder(path: &Path, root: &Label, json: bool) -> GraphResult<()> {
    let document = GraphDocument::read_from_file(path)?;
    let tree = BinaryTree::from_edges(document.edges)?;
    let order = tree.inorder(root)?;

    if json {
        print_json(&serde_json::json!({"root": root, "inorder": order}));
    } else {
        println!("Inorder traversal from {}:", root);
        println!("{}", join(&order, " "));
    }
    Ok(())
}
