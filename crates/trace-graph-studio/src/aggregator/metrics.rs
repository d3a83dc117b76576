//! Summary metrics for dependency graphs.
//!
//! Fan-out (how many variables a formula reads directly) points at the
//! formulas worth inspecting first in a large graph.

use super::dependency_builder::DependencyGraph;
use log::debug;
use serde::{Deserialize, Serialize};

/// A variable and how many variables it reads directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOut {
    pub variable: String,
    pub dependencies: usize,
}

/// Calculate the variables with the most direct dependencies
///
/// **Public** - main entry point for fan-out ranking
///
/// # Arguments
/// * `graph` - Built dependency graph
/// * `top_n` - Number of entries to return
///
/// # Returns
/// Entries sorted by dependency count (descending), ties broken by name
pub fn calculate_fan_out(graph: &DependencyGraph, top_n: usize) -> Vec<FanOut> {
    debug!("Ranking top {} variables by fan-out", top_n);

    let mut ranking: Vec<FanOut> = graph
        .fan_out()
        .into_iter()
        .map(|(variable, dependencies)| FanOut {
            variable: variable.to_string(),
            dependencies,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.dependencies
            .cmp(&a.dependencies)
            .then_with(|| a.variable.cmp(&b.variable))
    });
    ranking.truncate(top_n);
    ranking
}

/// Calculate graph statistics
///
/// **Public** - provides summary statistics
pub fn calculate_graph_stats(graph: &DependencyGraph) -> GraphStats {
    let leaf_count = graph.leaves().len();
    let node_count = graph.nodes().len();

    GraphStats {
        node_count,
        edge_count: graph.edges().len(),
        leaf_count,
        non_leaf_count: node_count - leaf_count,
        roots: graph.roots().into_iter().map(str::to_string).collect(),
    }
}

/// Graph statistics
///
/// **Public** - returned from calculate_graph_stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub leaf_count: usize,
    pub non_leaf_count: usize,

    /// Variables no other variable depends on
    pub roots: Vec<String>,
}

impl GraphStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Nodes: {} | Edges: {} | Leaves: {} | Non-leaves: {} | Roots: {}",
            self.node_count,
            self.edge_count,
            self.leaf_count,
            self.non_leaf_count,
            self.roots.len()
        )
    }
}
