//! Main trace parser for calculation engine output.
//!
//! Ties the line classifier and the dependency builder together and converts
//! the result into the export schema.

use super::classifier::{scan_lines, ClassifierConfig};
use super::schema::{ExportEdge, ExportNode, GraphExport};
use crate::aggregator::dependency_builder::{build_dependency_graph, DependencyGraph};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::debug;

/// Parsed trace data (internal representation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTrace {
    pub graph: DependencyGraph,

    /// Lines in the trace text
    pub total_lines: usize,

    /// Lines classified as variable evaluations
    pub relevant_lines: usize,

    /// Evaluation lines dropped by the denylist
    pub excluded_lines: usize,

    /// Deepest nesting level among relevant lines
    pub max_depth: usize,
}

/// Parse an engine trace into a dependency graph
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `trace` - Full trace text (engine standard output)
/// * `config` - Period marker, indentation width, name rule and denylist
///
/// # Returns
/// Parsed trace ready for export. Parsing never fails; lines that are not
/// evaluations are skipped.
pub fn parse_trace(trace: &str, config: &ClassifierConfig) -> ParsedTrace {
    let lines = scan_lines(trace, config);

    let relevant_lines = lines.iter().filter(|l| l.evaluation.is_some()).count();
    let max_depth = lines
        .iter()
        .filter_map(|l| l.evaluation.as_ref())
        .map(|e| e.indent_depth)
        .max()
        .unwrap_or(0);
    let excluded_lines = count_excluded(trace, config);

    debug!(
        "Scanned {} trace lines ({} evaluations, {} excluded)",
        lines.len(),
        relevant_lines,
        excluded_lines
    );

    let graph = build_dependency_graph(&lines);

    ParsedTrace {
        graph,
        total_lines: lines.len(),
        relevant_lines,
        excluded_lines,
        max_depth,
    }
}

/// Count evaluation lines that only the denylist kept out of the graph
fn count_excluded(trace: &str, config: &ClassifierConfig) -> usize {
    if config.excluded.is_empty() {
        return 0;
    }

    let unfiltered = ClassifierConfig {
        excluded: Default::default(),
        ..config.clone()
    };

    trace
        .lines()
        .filter_map(|line| super::classifier::classify_line(line, &unfiltered))
        .filter(|evaluation| config.is_excluded(&evaluation.variable_name))
        .count()
}

/// Convert a dependency graph to the export schema
///
/// **Public** - hands the graph to renderers and writers
///
/// Node order follows the graph's sorted node set, so it is stable and free
/// of duplicates; every edge endpoint is one of the emitted nodes.
pub fn to_export(graph: &DependencyGraph, target: Option<&str>, period: &str) -> GraphExport {
    let nodes = graph
        .nodes()
        .iter()
        .map(|id| ExportNode {
            id: id.clone(),
            leaf: graph.is_leaf(id),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| ExportEdge {
            from: edge.parent.clone(),
            to: edge.child.clone(),
        })
        .collect();

    GraphExport {
        version: SCHEMA_VERSION.to_string(),
        target: target.map(str::to_string),
        period: period.to_string(),
        nodes,
        edges,
        generated_at: Utc::now().to_rfc3339(),
    }
}
