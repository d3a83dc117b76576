//! Reconstruct variable dependencies from trace indentation.
//!
//! The engine logs a variable, then (indented one level deeper) every variable
//! its formula reads. Walking the trace top to bottom with a stack of open
//! scopes recovers the parent of each evaluation: the innermost open scope.
//!
//! Example:
//! ```text
//! a<2024, (default)> = 1        a opens a scope (next line is deeper)
//!   b<2024, (default)> = 2      edge a -> b, leaf
//!   c<2024, (default)> = 3      edge a -> c, leaf, closes a
//! ```

use crate::parser::classifier::ScannedLine;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Directed dependency: `parent`'s computation reads `child`'s value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub parent: String,
    pub child: String,
}

impl Edge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

/// Finished dependency graph.
///
/// Immutable once built: every edge endpoint is a node, and every node is
/// either a leaf or a non-leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeSet<String>,
    edges: BTreeSet<Edge>,
    leaves: BTreeSet<String>,
}

impl DependencyGraph {
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn leaves(&self) -> &BTreeSet<String> {
        &self.leaves
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.nodes.contains(variable)
    }

    pub fn is_leaf(&self, variable: &str) -> bool {
        self.leaves.contains(variable)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with at least one logged sub-evaluation
    pub fn non_leaves(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|node| !self.leaves.contains(*node))
            .map(String::as_str)
    }

    /// Nodes nothing else depends on (the forest's roots)
    pub fn roots(&self) -> Vec<&str> {
        let children: BTreeSet<&str> = self.edges.iter().map(|e| e.child.as_str()).collect();
        self.nodes
            .iter()
            .map(String::as_str)
            .filter(|node| !children.contains(node))
            .collect()
    }

    /// Direct dependencies of `variable`, in name order
    pub fn children_of<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.parent == variable)
            .map(|e| e.child.as_str())
    }

    /// Number of direct dependencies per variable (non-leaves only)
    pub fn fan_out(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for edge in &self.edges {
            *counts.entry(edge.parent.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Stateful single-pass builder.
///
/// **Public** - drive it with [`DependencyBuilder::observe`] once per relevant
/// line, in trace order, then call [`DependencyBuilder::finish`].
#[derive(Debug, Default)]
pub struct DependencyBuilder {
    /// Open scopes, shallowest first
    ancestors: Vec<String>,
    nodes: BTreeSet<String>,
    edges: BTreeSet<Edge>,
    leaf_occurrences: BTreeSet<String>,
    non_leaf_occurrences: BTreeSet<String>,
}

impl DependencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation of `variable` at depth `current`.
    ///
    /// `next` is the depth of the following original trace line; `None` at the
    /// end of the trace counts as depth 0.
    pub fn observe(&mut self, variable: &str, current: usize, next: Option<usize>) {
        let next = next.unwrap_or(0);

        self.nodes.insert(variable.to_string());

        if let Some(parent) = self.ancestors.last() {
            // Sub-period evaluations nest under their own name
            if parent != variable {
                self.edges.insert(Edge::new(parent.as_str(), variable));
            }
        }

        if current > next {
            let keep = self.ancestors.len().saturating_sub(current - next);
            self.ancestors.truncate(keep);
        } else if current < next {
            self.ancestors.push(variable.to_string());
        }

        if current >= next {
            self.leaf_occurrences.insert(variable.to_string());
        } else {
            self.non_leaf_occurrences.insert(variable.to_string());
        }
    }

    /// Current number of open scopes
    pub fn open_scopes(&self) -> usize {
        self.ancestors.len()
    }

    /// Resolve leaf status and freeze the graph
    pub fn finish(self) -> DependencyGraph {
        let Self {
            nodes,
            edges,
            leaf_occurrences,
            non_leaf_occurrences,
            ..
        } = self;

        let leaves: BTreeSet<String> = leaf_occurrences
            .difference(&non_leaf_occurrences)
            .cloned()
            .collect();

        debug!(
            "Built dependency graph: {} nodes, {} edges, {} leaves",
            nodes.len(),
            edges.len(),
            leaves.len()
        );

        DependencyGraph {
            nodes,
            edges,
            leaves,
        }
    }
}

/// Build the dependency graph from scanned trace lines
///
/// **Public** - main entry point for graph construction
///
/// # Arguments
/// * `lines` - Every trace line in original order, relevant or not
///
/// # Returns
/// The deduplicated node/edge/leaf sets. Never fails: a truncated trace
/// simply closes its open scopes.
pub fn build_dependency_graph(lines: &[ScannedLine]) -> DependencyGraph {
    let mut builder = DependencyBuilder::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(evaluation) = &line.evaluation else {
            continue;
        };
        let next = lines.get(i + 1).map(|l| l.depth);
        builder.observe(&evaluation.variable_name, evaluation.indent_depth, next);
    }

    builder.finish()
}
