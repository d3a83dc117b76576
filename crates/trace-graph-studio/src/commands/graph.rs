//! Graph command implementation.
//!
//! The graph command:
//! 1. Builds a scenario request for the target variable
//! 2. Runs the calculation engine with a verbose trace
//! 3. Parses the trace into a dependency graph
//! 4. Renders and writes the requested outputs

use super::models::GraphArgs;
use super::report::{report_trace, ReportRequest};
use crate::engine::{CalculationEngine, EngineOutcome, ScenarioRequest};
use crate::output::write_document;
use crate::parser::GraphExport;
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Graph command arguments
/// * `engine` - Produces the trace (the engine subprocess, or a fake in tests)
///
/// # Returns
/// The exported graph on success
///
/// # Errors
/// * Engine launch failures
/// * Engine run failures, carrying the engine's failure text verbatim
/// * Traces without any evaluation for the period
/// * File write errors
pub fn execute_graph<E>(args: GraphArgs, engine: &E) -> Result<GraphExport>
where
    E: CalculationEngine + ?Sized,
{
    let start_time = Instant::now();

    info!(
        "Building dependency graph for {} ({})",
        args.variable, args.period
    );

    let request = build_request(&args);

    let outcome = engine
        .run(&request)
        .context("Failed to run calculation engine")?;

    // Failure output is never parsed as a trace
    let trace = match outcome {
        EngineOutcome::Trace(trace) => trace,
        EngineOutcome::Failed { status, output } => {
            warn!("Calculation engine failed (status {:?})", status);
            let output = output.trim_end();
            if output.trim().is_empty() {
                match status {
                    Some(code) => anyhow::bail!(
                        "Calculation engine failed with exit status {} and no output",
                        code
                    ),
                    None => anyhow::bail!("Calculation engine was terminated without output"),
                }
            }
            anyhow::bail!("{}", output);
        }
    };

    if let Some(path) = &args.save_trace {
        write_document(&trace, path).context("Failed to save engine trace")?;
        info!("✓ Trace saved to: {}", path.display());
    }

    let export = report_trace(
        &trace,
        &ReportRequest {
            target: Some(args.variable.as_str()),
            period: &args.period,
            classifier: &args.classifier,
            outputs: &args.outputs,
            render_config: &args.render_config,
            print_summary: args.print_summary,
        },
    )?;

    info!(
        "Graph completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(export)
}

/// Scenario request from command arguments.
///
/// **Private** - internal helper for execute_graph
fn build_request(args: &GraphArgs) -> ScenarioRequest {
    let mut request = ScenarioRequest::new(args.variable.clone(), args.period.clone());

    if let Some(region) = &args.region {
        request = request.with_region(region.clone());
    }
    for (key, value) in &args.inputs {
        request = request.with_input(key.clone(), value.clone());
    }

    request
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if args.variable.is_empty() {
        anyhow::bail!("Variable name cannot be empty");
    }

    if !is_identifier(&args.variable) {
        anyhow::bail!(
            "Variable name `{}` must contain only letters, digits and underscores",
            args.variable
        );
    }

    if let Some(region) = &args.region {
        if region.trim().is_empty() {
            anyhow::bail!("Region cannot be empty");
        }
    }

    super::validate_common(
        &args.period,
        &args.classifier,
        &args.outputs,
        args.print_summary,
    )
}

fn is_identifier(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
