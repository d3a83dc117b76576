//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod models;
pub mod parse;
mod report;
pub mod utils;

// Re-export main command functions
pub use graph::{execute_graph, validate_graph_args};
pub use models::{parse_input_pair, GraphArgs, OutputTargets, ParseArgs};
pub use parse::{execute_parse, validate_parse_args};
pub use utils::{display_schema, display_version, validate_graph_file};

use crate::parser::ClassifierConfig;
use anyhow::Result;

/// Checks shared by the graph and parse commands
fn validate_common(
    period: &str,
    classifier: &ClassifierConfig,
    outputs: &OutputTargets,
    print_summary: bool,
) -> Result<()> {
    if period.is_empty() {
        anyhow::bail!("Period cannot be empty");
    }

    if period
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | ',' | '='))
    {
        anyhow::bail!("Period `{}` contains invalid characters", period);
    }

    if classifier.period_marker.is_empty() {
        anyhow::bail!("Period marker cannot be empty");
    }

    if classifier.indent_width == 0 {
        anyhow::bail!("Indent width must be greater than 0");
    }

    if outputs.is_empty() && !print_summary {
        anyhow::bail!("Nothing to do: request an output file or --summary");
    }

    Ok(())
}
