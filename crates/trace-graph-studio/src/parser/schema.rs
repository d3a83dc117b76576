//! Output JSON schema definitions for exported graphs.
//!
//! This is the backend-agnostic hand-off between the parser and any renderer.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level graph export written to JSON and consumed by renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Variable the trace was requested for (absent for parsed trace files)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Evaluation period the trace was filtered on
    pub period: String,

    /// One entry per variable, sorted by id
    pub nodes: Vec<ExportNode>,

    /// Dependencies, sorted by (from, to)
    pub edges: Vec<ExportEdge>,

    /// Timestamp when the export was generated
    pub generated_at: String,
}

/// A variable in the exported graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,

    /// True if the variable never triggered a logged sub-evaluation
    pub leaf: bool,
}

/// A dependency edge: `from` reads `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub from: String,
    pub to: String,
}

impl GraphExport {
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.leaf).count()
    }

    /// Check that every edge endpoint is an exported node and ids are unique.
    ///
    /// Returns the first problem found.
    pub fn check_consistency(&self) -> Result<(), String> {
        let mut ids = std::collections::BTreeSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(format!("duplicate node id `{}`", node.id));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(format!(
                        "edge {} -> {} references unknown node `{}`",
                        edge.from, edge.to, endpoint
                    ));
                }
            }
            if edge.from == edge.to {
                return Err(format!("self-loop on `{}`", edge.from));
            }
        }

        Ok(())
    }
}
