use crate::output::read_graph_json;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate an exported graph JSON file
pub fn validate_graph_file(file_path: PathBuf) -> Result<()> {
    println!("Validating graph: {}", file_path.display());

    let graph = read_graph_json(&file_path).context("Failed to read graph JSON")?;

    graph
        .check_consistency()
        .map_err(|problem| anyhow::anyhow!("Inconsistent graph: {}", problem))?;

    println!("✓ Valid graph JSON");
    println!("  Version: {}", graph.version);
    if let Some(target) = &graph.target {
        println!("  Target: {}", target);
    }
    println!("  Period: {}", graph.period);
    println!("  Variables: {}", graph.nodes.len());
    println!("  Leaves: {}", graph.leaf_count());
    println!("  Dependencies: {}", graph.edges.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Trace Graph Studio Export Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string       - Schema version (e.g., '1.0.0')");
        println!("  target: string?       - Variable the trace was requested for");
        println!("  period: string        - Evaluation period");
        println!("  nodes: array          - One entry per variable");
        println!("    id: string          - Variable name");
        println!("    leaf: boolean       - True if it has no logged dependencies");
        println!("  edges: array          - Dependencies");
        println!("    from: string        - Variable whose formula reads `to`");
        println!("    to: string          - Variable being read");
        println!("  generated_at: string  - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Trace Graph Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Dependency graphs from rules-engine calculation traces.");
}
