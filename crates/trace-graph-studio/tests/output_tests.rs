use std::path::Path;
use tempfile::NamedTempFile;
use trace_graph_studio::output::validate_path;
use trace_graph_studio::output::{read_graph_json, write_document, write_graph_json};
use trace_graph_studio::parser::{ExportEdge, ExportNode, GraphExport};

fn create_test_graph() -> GraphExport {
    GraphExport {
        version: "1.0.0".to_string(),
        target: Some("income_tax".to_string()),
        period: "2024".to_string(),
        nodes: vec![
            ExportNode {
                id: "income_tax".to_string(),
                leaf: false,
            },
            ExportNode {
                id: "taxable_income".to_string(),
                leaf: true,
            },
        ],
        edges: vec![ExportEdge {
            from: "income_tax".to_string(),
            to: "taxable_income".to_string(),
        }],
        generated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn test_write_and_read_graph() {
    let graph = create_test_graph();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_graph_json(&graph, path).unwrap();
    let loaded = read_graph_json(path).unwrap();

    assert_eq!(loaded, graph);
}

#[test]
fn test_graph_without_target_omits_field() {
    let mut graph = create_test_graph();
    graph.target = None;

    let temp_file = NamedTempFile::new().unwrap();
    write_graph_json(&graph, temp_file.path()).unwrap();

    let raw = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(!raw.contains("\"target\""));
    assert_eq!(read_graph_json(temp_file.path()).unwrap().target, None);
}

#[test]
fn test_read_invalid_json() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    assert!(read_graph_json(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/graph.json");

    write_graph_json(&create_test_graph(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_write_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/graph.html");
    let html = "<!DOCTYPE html>\n<html><body></body></html>\n";

    write_document(html, &nested_path).unwrap();

    assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), html);
}

#[test]
fn test_write_document_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(write_document("x", temp_dir.path()).is_err());
}
