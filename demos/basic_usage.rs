//! Basic build -> query flow over every algorithm.

use graph_algorithms::*;

fn main() -> GraphResult<()> {
    // Directed reachability and components
    let mut builder = GraphBuilder::directed();
    builder
        .edge(1, 2)
        .edge(2, 5)
        .edge(3, 6)
        .edge(4, 6)
        .edge(4, 7)
        .edge(6, 7)
        .vertex(8);
    let graph = builder.build()?;

    println!(
        "Directed graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("path 1 -> 5: {}", path_exists(&graph, &1, &5)?);
    println!("path 1 -> 3: {}", path_exists(&graph, &1, &3)?);

    for (i, component) in weak_components(&graph)?.iter().enumerate() {
        println!("Weak component {}: {:?}", i + 1, component.sorted());
    }

    // Weighted, undirected: spanning trees and shortest paths
    let roads = Graph::from_edges(
        GraphMode::UndirectedWeighted,
        [
            ("A", "C", 1.0),
            ("A", "B", 4.0),
            ("B", "F", 3.0),
            ("C", "F", 7.0),
            ("F", "H", 1.0),
            ("E", "F", 1.0),
            ("E", "H", 2.0),
        ],
    )?;
    let matrix = roads.to_matrix();

    let by_prim = prim(&matrix, &"A")?;
    let by_kruskal = kruskal(&matrix)?;
    println!(
        "MST weight: prim {} / kruskal {}",
        by_prim.total_weight, by_kruskal.total_weight
    );

    let route = dijkstra(&matrix, &"C", &"H")?;
    match route.distance {
        Some(distance) => println!("C -> H: {:?} ({})", route.path, distance),
        None => println!("C -> H: unreachable"),
    }

    Ok(())
}
