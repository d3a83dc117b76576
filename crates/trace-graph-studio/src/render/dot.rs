//! Graphviz DOT output.

use super::{GraphRenderer, RenderConfig};
use crate::parser::schema::GraphExport;
use crate::utils::error::RenderError;
use log::info;

/// Renders a `digraph` for `dot -Tsvg` and friends
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &GraphExport) -> Result<String, RenderError> {
        if graph.nodes.is_empty() {
            return Err(RenderError::EmptyGraph);
        }

        let mut dot = String::new();
        dot.push_str(&format!("digraph {} {{\n", quote(&self.config.title)));
        dot.push_str("  rankdir=LR;\n");
        dot.push_str(&format!(
            "  node [shape=box, style=\"rounded,filled\", fillcolor={}];\n",
            quote(&self.config.node_color)
        ));

        for node in &graph.nodes {
            if node.leaf {
                dot.push_str(&format!(
                    "  {} [fillcolor={}];\n",
                    quote(&node.id),
                    quote(&self.config.leaf_color)
                ));
            } else {
                dot.push_str(&format!("  {};\n", quote(&node.id)));
            }
        }

        for edge in &graph.edges {
            dot.push_str(&format!("  {} -> {};\n", quote(&edge.from), quote(&edge.to)));
        }

        dot.push_str("}\n");

        info!("DOT graph generated ({} bytes)", dot.len());
        Ok(dot)
    }
}

/// Quote a DOT identifier
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}
