//! Parse command implementation.
//!
//! Builds the graph from a trace saved earlier (for example with
//! `graph --save-trace`), without running the engine.

use super::models::ParseArgs;
use super::report::{report_trace, ReportRequest};
use crate::parser::GraphExport;
use anyhow::{Context, Result};
use log::info;
use std::fs;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
pub fn execute_parse(args: ParseArgs) -> Result<GraphExport> {
    info!("Reading trace: {}", args.trace_file.display());

    let trace = fs::read_to_string(&args.trace_file)
        .with_context(|| format!("Failed to read trace file {}", args.trace_file.display()))?;

    report_trace(
        &trace,
        &ReportRequest {
            target: args.target.as_deref(),
            period: &args.period,
            classifier: &args.classifier,
            outputs: &args.outputs,
            render_config: &args.render_config,
            print_summary: args.print_summary,
        },
    )
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_parse_args(args: &ParseArgs) -> Result<()> {
    if args.trace_file.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if !args.trace_file.is_file() {
        anyhow::bail!("Trace file not found: {}", args.trace_file.display());
    }

    super::validate_common(
        &args.period,
        &args.classifier,
        &args.outputs,
        args.print_summary,
    )
}
