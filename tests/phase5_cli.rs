//! Phase 5 tests: graph documents and the `galg` CLI end to end.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use graph_algorithms::cli::{GraphDocument, Label};
use graph_algorithms::types::{GraphError, GraphMode};

// ==================== CLI Helpers ====================

/// Run the `galg` CLI with the given arguments and return the output.
fn run_galg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_galg"))
        .args(args)
        .output()
        .expect("Failed to run galg")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "galg failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write a JSON document to a temporary file.
fn write_document(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn reachability_document() -> NamedTempFile {
    write_document(
        r#"{
            "mode": "directed-unweighted",
            "edges": [
                {"source": 1, "target": 2},
                {"source": 2, "target": 5},
                {"source": 3, "target": 6},
                {"source": 4, "target": 6},
                {"source": 4, "target": 7},
                {"source": 6, "target": 7}
            ]
        }"#,
    )
}

fn weighted_document() -> NamedTempFile {
    write_document(
        r#"{
            "mode": "undirected-weighted",
            "vertices": ["Z"],
            "edges": [
                {"source": "A", "target": "C", "weight": 1},
                {"source": "A", "target": "B", "weight": 4},
                {"source": "B", "target": "F", "weight": 3},
                {"source": "C", "target": "F", "weight": 7}
            ]
        }"#,
    )
}

// ==================== Document Tests ====================

#[test]
fn test_label_parsing() {
    assert_eq!("42".parse::<Label>().unwrap(), Label::Id(42));
    assert_eq!(" B ".parse::<Label>().unwrap(), Label::from("B"));
    assert!(Label::Id(100) < Label::from("A"));
    assert_eq!(Label::Id(7).to_string(), "7");
    assert_eq!(format!("{:?}", Label::from("A")), "\"A\"");
}

#[test]
fn test_document_roundtrip_to_graph() {
    let document = GraphDocument::from_json(
        r#"{"mode": "undirected-weighted", "vertices": [9],
            "edges": [{"source": 1, "target": "x", "weight": 2.5}]}"#,
    )
    .unwrap();
    assert_eq!(document.mode, GraphMode::UndirectedWeighted);

    let graph = document.to_graph().unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph.weight(&Label::from("x"), &Label::Id(1)).unwrap(),
        Some(2.5)
    );
}

#[test]
fn test_document_rejects_negative_weight() {
    let document = GraphDocument::from_json(
        r#"{"mode": "directed-weighted",
            "edges": [{"source": 1, "target": 2, "weight": -3}]}"#,
    )
    .unwrap();
    assert!(matches!(
        document.to_graph(),
        Err(GraphError::InvalidInput(_))
    ));
}

#[test]
fn test_document_malformed_json() {
    assert!(matches!(
        GraphDocument::from_json("{\"mode\": \"sideways\"}"),
        Err(GraphError::Json(_))
    ));
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let file = weighted_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["info", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Mode: undirected-weighted"));
    assert!(out.contains("Vertices: 5"));
    assert!(out.contains("Edges: 4"));
}

#[test]
fn test_cli_reach() {
    let file = reachability_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["reach", path, "1", "5"]);
    assert_success(&output);
    assert!(stdout_str(&output).starts_with("True"));

    let output = run_galg(&["reach", path, "1", "3"]);
    assert_success(&output);
    assert!(stdout_str(&output).starts_with("False"));
}

#[test]
fn test_cli_reach_json() {
    let file = reachability_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["--format", "json", "reach", path, "4", "7"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["path_exists"], true);
    assert_eq!(value["start"], 4);
}

#[test]
fn test_cli_unknown_vertex_exit_code() {
    let file = reachability_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["reach", path, "1", "99"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown vertex"));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let output = run_galg(&["info", "/nonexistent/graph.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_components() {
    let file = reachability_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["--format", "json", "components", path]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["strategy"], "weak");
    assert_eq!(value["components"].as_array().unwrap().len(), 2);

    let output = run_galg(&["components", path, "--strong"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Strongly connected components:"));
    assert!(out.contains("Component 7: 7"));
}

#[test]
fn test_cli_mst() {
    let file = weighted_document();
    let path = file.path().to_str().unwrap();

    for algorithm in ["prim", "kruskal"] {
        let output = run_galg(&["--format", "json", "mst", path, "--algorithm", algorithm]);
        assert_success(&output);
        let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
        assert_eq!(value["total_weight"], 8.0);
        assert_eq!(value["edges"].as_array().unwrap().len(), 3);
    }

    let output = run_galg(&["mst", path, "--algorithm", "boruvka"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_mst_directed_rejected() {
    let file = reachability_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["mst", path]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_path() {
    let file = weighted_document();
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["path", path, "C", "B"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("C -> A -> B"));
    assert!(out.contains("Total weight: 5"));

    let output = run_galg(&["--format", "json", "path", path, "A", "Z"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["reachable"], false);
    assert!(value["distance"].is_null());
}

#[test]
fn test_cli_inorder() {
    let file = write_document(
        r#"{"mode": "directed-unweighted", "edges": [
            {"source": 1, "target": 2}, {"source": 1, "target": 3},
            {"source": 2, "target": 5}, {"source": 2, "target": 6},
            {"source": 3, "target": 4}, {"source": 4, "target": 8},
            {"source": 5, "target": 7}
        ]}"#,
    );
    let path = file.path().to_str().unwrap();

    let output = run_galg(&["inorder", path, "1"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("7 5 2 6 1 8 4 3"));
}
