//! Shared tail of the graph and parse commands: trace text in, files out.

use super::models::OutputTargets;
use crate::aggregator::{calculate_fan_out, calculate_graph_stats};
use crate::output::{write_document, write_graph_json};
use crate::parser::{parse_trace, to_export, ClassifierConfig, GraphExport, ParsedTrace};
use crate::render::{render_text_summary, DotRenderer, GraphRenderer, HtmlRenderer, RenderConfig};
use crate::utils::config::SUMMARY_TOP_FAN_OUT;
use anyhow::{Context, Result};
use log::{debug, info};

/// Everything needed to turn one trace into output files
pub(crate) struct ReportRequest<'a> {
    pub target: Option<&'a str>,
    pub period: &'a str,
    pub classifier: &'a ClassifierConfig,
    pub outputs: &'a OutputTargets,
    pub render_config: &'a RenderConfig,
    pub print_summary: bool,
}

/// Parse the trace, write every requested output, optionally print a summary.
///
/// Fails if the trace holds no evaluation for the period: an empty graph
/// nearly always means the wrong variable or period was asked for.
pub(crate) fn report_trace(trace: &str, request: &ReportRequest) -> Result<GraphExport> {
    info!("Parsing trace ({} bytes)...", trace.len());
    let parsed = parse_trace(trace, request.classifier);

    if parsed.graph.is_empty() {
        anyhow::bail!(
            "No variable evaluations for period marker `{}` found in trace ({} lines)",
            request.classifier.period_marker,
            parsed.total_lines
        );
    }

    let stats = calculate_graph_stats(&parsed.graph);
    info!("Graph: {}", stats.summary());

    let export = to_export(&parsed.graph, request.target, request.period);
    debug!("Export has {} nodes, {} edges", export.nodes.len(), export.edges.len());

    write_outputs(&export, request.outputs, request.render_config)?;

    if request.print_summary {
        print_summary(&parsed);
    }

    Ok(export)
}

/// Write output files (HTML page, JSON export, DOT file).
///
/// **Private** - internal helper for report_trace
fn write_outputs(
    export: &GraphExport,
    outputs: &OutputTargets,
    render_config: &RenderConfig,
) -> Result<()> {
    info!("Writing output files...");

    if let Some(path) = &outputs.html {
        let html = HtmlRenderer::new(render_config.clone())
            .render(export)
            .context("Failed to render HTML graph")?;
        write_document(&html, path).context("Failed to write HTML graph")?;
        info!("✓ Graph written to: {}", path.display());
    }

    if let Some(path) = &outputs.json {
        write_graph_json(export, path).context("Failed to write graph JSON")?;
        info!("✓ Graph JSON written to: {}", path.display());
    }

    if let Some(path) = &outputs.dot {
        let dot = DotRenderer::new(render_config.clone())
            .render(export)
            .context("Failed to render DOT graph")?;
        write_document(&dot, path).context("Failed to write DOT graph")?;
        info!("✓ DOT graph written to: {}", path.display());
    }

    Ok(())
}

/// Print a human-readable graph summary to stdout.
///
/// **Private** - internal helper for report_trace
fn print_summary(parsed: &ParsedTrace) {
    let stats = calculate_graph_stats(&parsed.graph);
    let fan_out = calculate_fan_out(&parsed.graph, SUMMARY_TOP_FAN_OUT);

    println!();
    println!("{}", render_text_summary(parsed, &stats, &fan_out));
    println!();
}
