//! Terminal summary of a parsed trace.

use crate::aggregator::metrics::{FanOut, GraphStats};
use crate::parser::trace::ParsedTrace;
use colored::*;

/// Create a text summary with counts, roots and the widest formulas
pub fn render_text_summary(parsed: &ParsedTrace, stats: &GraphStats, fan_out: &[FanOut]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", "DEPENDENCY GRAPH SUMMARY".bold()));
    lines.push(format!(
        "  Trace lines:  {} ({} evaluations, {} excluded)",
        parsed.total_lines, parsed.relevant_lines, parsed.excluded_lines
    ));
    lines.push(format!("  Max depth:    {}", parsed.max_depth));
    lines.push(format!("  Variables:    {}", stats.node_count));
    lines.push(format!(
        "  ├─ Computed: {}",
        stats.non_leaf_count.to_string().cyan()
    ));
    lines.push(format!("  └─ Leaves:   {}", stats.leaf_count.to_string().red()));
    lines.push(format!("  Dependencies: {}", stats.edge_count));

    if !stats.roots.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", "ROOTS".bold()));
        for root in &stats.roots {
            lines.push(format!("  • {}", root.green()));
        }
    }

    if !fan_out.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", "WIDEST FORMULAS".bold()));
        let width = fan_out
            .iter()
            .map(|f| f.variable.len())
            .max()
            .unwrap_or(0);
        for entry in fan_out {
            lines.push(format!(
                "  {:<width$}  {:>4} dependencies",
                entry.variable,
                entry.dependencies,
                width = width
            ));
        }
    }

    lines.join("\n")
}
