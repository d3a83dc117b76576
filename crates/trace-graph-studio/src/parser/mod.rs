//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Classifying raw engine trace lines
//! - Turning a trace into a dependency graph
//! - Defining the export schema

pub mod classifier;
pub mod schema;
pub mod trace;

// Re-export main types
pub use classifier::{
    classify_line, extract_variable_name, indent_depth, period_marker_for, scan_lines,
    ClassifiedLine, ClassifierConfig, NameExtraction, ScannedLine,
};
pub use schema::{ExportEdge, ExportNode, GraphExport};
pub use trace::{parse_trace, to_export, ParsedTrace};
