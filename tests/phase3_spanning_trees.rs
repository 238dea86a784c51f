//! Phase 3 tests: Prim, Kruskal, and the union-find they rely on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_algorithms::algorithms::{kruskal, prim, weak_components, SpanningForest, UnionFind};
use graph_algorithms::graph::{AdjacencyMatrix, Graph};
use graph_algorithms::types::{GraphError, GraphMode};

// ==================== Helpers ====================

/// The 9-vertex weighted scenario. `9-8:7` repeats `8-9:1` and is ignored.
fn nine_vertex_graph() -> Graph<u32> {
    Graph::from_edges(
        GraphMode::UndirectedWeighted,
        [
            (1, 2, 4.0),
            (1, 5, 1.0),
            (1, 7, 2.0),
            (2, 3, 7.0),
            (2, 6, 5.0),
            (3, 4, 1.0),
            (3, 6, 8.0),
            (4, 6, 6.0),
            (4, 7, 4.0),
            (4, 8, 3.0),
            (5, 6, 9.0),
            (5, 7, 10.0),
            (6, 9, 2.0),
            (7, 9, 8.0),
            (8, 9, 1.0),
            (9, 8, 7.0),
        ],
    )
    .unwrap()
}

/// Connected random graph: a random spanning path plus extra random edges.
fn random_connected_graph(rng: &mut StdRng, vertices: u32, extra: usize) -> Graph<u32> {
    let mut graph = Graph::new(GraphMode::UndirectedWeighted);
    for v in 1..vertices {
        let parent = rng.gen_range(0..v);
        graph
            .add_edge(parent, v, Some(rng.gen_range(1..50) as f64))
            .unwrap();
    }
    for _ in 0..extra {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        graph
            .add_edge(u, v, Some(rng.gen_range(1..50) as f64))
            .unwrap();
    }
    graph
}

fn edge_weight_sum<V>(forest: &SpanningForest<V>) -> f64 {
    forest.edges.iter().map(|e| e.weight).sum()
}

fn assert_acyclic(forest: &SpanningForest<u32>, matrix: &AdjacencyMatrix<u32>) {
    let mut sets = UnionFind::new(matrix.size());
    for edge in &forest.edges {
        let i = matrix.index_of(&edge.source).unwrap();
        let j = matrix.index_of(&edge.target).unwrap();
        assert!(sets.union(i, j), "edge {:?} closes a cycle", edge);
    }
}

// ==================== Union-Find Tests ====================

#[test]
fn test_union_find_basics() {
    let mut sets = UnionFind::new(5);
    assert_eq!(sets.len(), 5);
    assert_eq!(sets.component_count(), 5);

    assert!(sets.union(0, 1));
    assert!(sets.union(3, 4));
    assert!(!sets.union(1, 0));
    assert_eq!(sets.component_count(), 3);

    assert!(sets.connected(0, 1));
    assert!(!sets.connected(1, 3));
    assert!(sets.union(1, 4));
    assert!(sets.connected(0, 3));
    assert_eq!(sets.find(0), sets.find(4));
    assert_eq!(sets.component_count(), 2);
}

#[test]
fn test_union_find_empty() {
    let sets = UnionFind::new(0);
    assert!(sets.is_empty());
    assert_eq!(sets.component_count(), 0);
}

// ==================== Scenario Tests ====================

#[test]
fn test_nine_vertex_mst_weight() {
    let matrix = nine_vertex_graph().to_matrix();

    let by_prim = prim(&matrix, &1).unwrap();
    let by_kruskal = kruskal(&matrix).unwrap();

    assert_eq!(by_prim.total_weight, 18.0);
    assert_eq!(by_kruskal.total_weight, 18.0);
    assert_eq!(by_prim.edge_count(), 8);
    assert_eq!(by_kruskal.edge_count(), 8);
}

#[test]
fn test_nine_vertex_kruskal_edges() {
    let matrix = nine_vertex_graph().to_matrix();
    let forest = kruskal(&matrix).unwrap();

    let edges: Vec<(u32, u32, f64)> = forest
        .edges
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    assert_eq!(
        edges,
        vec![
            (1, 5, 1.0),
            (3, 4, 1.0),
            (8, 9, 1.0),
            (1, 7, 2.0),
            (6, 9, 2.0),
            (4, 8, 3.0),
            (1, 2, 4.0),
            (4, 7, 4.0),
        ]
    );
}

#[test]
fn test_nine_vertex_prim_edges() {
    let matrix = nine_vertex_graph().to_matrix();
    let forest = prim(&matrix, &1).unwrap();

    let edges: Vec<(u32, u32, f64)> = forest
        .edges
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    assert_eq!(
        edges,
        vec![
            (1, 5, 1.0),
            (1, 7, 2.0),
            (1, 2, 4.0),
            (7, 4, 4.0),
            (4, 3, 1.0),
            (4, 8, 3.0),
            (8, 9, 1.0),
            (9, 6, 2.0),
        ]
    );
    // Root has no parent edge.
    assert!(forest.edges.iter().all(|e| e.target != 1));
}

#[test]
fn test_total_weight_matches_edges() {
    let matrix = nine_vertex_graph().to_matrix();
    for root in 1..=9 {
        let forest = prim(&matrix, &root).unwrap();
        assert_eq!(forest.total_weight, edge_weight_sum(&forest));
        assert_eq!(forest.total_weight, 18.0);
    }
}

// ==================== Edge Case Tests ====================

#[test]
fn test_disconnected_graph() {
    let mut graph = Graph::from_edges(
        GraphMode::UndirectedWeighted,
        [(1, 2, 3.0), (2, 3, 1.0), (1, 3, 5.0), (10, 11, 2.0)],
    )
    .unwrap();
    graph.add_vertex(20);
    let matrix = graph.to_matrix();

    // Kruskal spans every component: 6 vertices, 3 components.
    let forest = kruskal(&matrix).unwrap();
    assert_eq!(forest.edge_count(), 6 - 3);
    assert_eq!(forest.total_weight, 6.0);

    // Prim only spans the root's component.
    let from_one = prim(&matrix, &1).unwrap();
    assert_eq!(from_one.edge_count(), 2);
    assert_eq!(from_one.total_weight, 4.0);

    let isolated = prim(&matrix, &20).unwrap();
    assert!(isolated.is_empty());
    assert_eq!(isolated.total_weight, 0.0);
}

#[test]
fn test_directed_matrix_rejected() {
    let matrix = Graph::from_edges(GraphMode::DirectedWeighted, [(1, 2, 1.0)])
        .unwrap()
        .to_matrix();
    assert!(matches!(kruskal(&matrix), Err(GraphError::InvalidInput(_))));
    assert!(matches!(prim(&matrix, &1), Err(GraphError::InvalidInput(_))));
}

#[test]
fn test_unknown_root() {
    let matrix = nine_vertex_graph().to_matrix();
    assert!(matches!(
        prim(&matrix, &42),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_self_loops_ignored() {
    let matrix = Graph::from_edges(
        GraphMode::UndirectedWeighted,
        [(1, 1, 0.5), (1, 2, 2.0)],
    )
    .unwrap()
    .to_matrix();
    assert_eq!(kruskal(&matrix).unwrap().total_weight, 2.0);
    assert_eq!(prim(&matrix, &1).unwrap().total_weight, 2.0);
}

#[test]
fn test_unweighted_graph_uses_unit_weights() {
    let matrix = Graph::from_edges(
        GraphMode::UndirectedUnweighted,
        [(1, 2), (2, 3), (3, 1), (3, 4)],
    )
    .unwrap()
    .to_matrix();
    assert_eq!(kruskal(&matrix).unwrap().total_weight, 3.0);
}

#[test]
fn test_equal_weights_deterministic() {
    let matrix = Graph::from_edges(
        GraphMode::UndirectedWeighted,
        [(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)],
    )
    .unwrap()
    .to_matrix();

    let forest = kruskal(&matrix).unwrap();
    let pairs: Vec<(u32, u32)> = forest.edges.iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(pairs, vec![(1, 2), (1, 3)]);
    assert_eq!(kruskal(&matrix).unwrap(), forest);
}

// ==================== Property Tests ====================

#[test]
fn test_prim_equals_kruskal_random() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let graph = random_connected_graph(&mut rng, 25, 40);
        let matrix = graph.to_matrix();

        let by_prim = prim(&matrix, &0).unwrap();
        let by_kruskal = kruskal(&matrix).unwrap();

        assert_eq!(by_prim.total_weight, by_kruskal.total_weight);
        assert_eq!(by_prim.edge_count(), graph.vertex_count() - 1);
        assert_eq!(by_kruskal.edge_count(), graph.vertex_count() - 1);
        assert_acyclic(&by_prim, &matrix);
        assert_acyclic(&by_kruskal, &matrix);
    }
}

#[test]
fn test_kruskal_edge_count_random_forest() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..25 {
        let mut graph = Graph::new(GraphMode::UndirectedWeighted);
        for v in 0..20u32 {
            graph.add_vertex(v);
        }
        for _ in 0..12 {
            let u = rng.gen_range(0..20u32);
            let v = rng.gen_range(0..20u32);
            graph
                .add_edge(u, v, Some(rng.gen_range(1..10) as f64))
                .unwrap();
        }

        let components = weak_components(&graph).unwrap().len();
        let forest = kruskal(&graph.to_matrix()).unwrap();
        assert_eq!(forest.edge_count(), graph.vertex_count() - components);
    }
}
