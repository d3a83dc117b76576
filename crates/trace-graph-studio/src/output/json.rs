//! JSON graph export writer.
//!
//! Writes GraphExport structs to JSON files with proper formatting.

use crate::parser::schema::GraphExport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a graph export to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `graph` - Export data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_graph_json(
    graph: &GraphExport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing graph JSON to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, graph).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Graph JSON written successfully ({} nodes, {} edges)",
        graph.nodes.len(),
        graph.edges.len()
    );

    Ok(())
}

/// Read a graph export from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_graph_json(input_path: impl AsRef<Path>) -> Result<GraphExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading graph JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let graph: GraphExport = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Graph loaded: version {}, {} nodes",
        graph.version,
        graph.nodes.len()
    );

    Ok(graph)
}
