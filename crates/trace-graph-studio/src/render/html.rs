//! Interactive HTML graph using vis-network.
//!
//! Produces a single self-contained page: the library is loaded from a CDN,
//! nodes and edges are embedded as JSON. Layout is a Barnes-Hut simulation
//! tuned so large dependency trees spread out instead of collapsing.

use super::{escape_html, GraphRenderer, RenderConfig};
use crate::parser::schema::GraphExport;
use crate::utils::error::RenderError;
use log::info;
use serde_json::{json, Value};

const VIS_NETWORK_URL: &str = "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// Renders an interactive, physics-laid-out HTML page
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl GraphRenderer for HtmlRenderer {
    fn render(&self, graph: &GraphExport) -> Result<String, RenderError> {
        if graph.nodes.is_empty() {
            return Err(RenderError::EmptyGraph);
        }

        let config = &self.config;
        info!(
            "Generating HTML graph with {} nodes and {} edges",
            graph.nodes.len(),
            graph.edges.len()
        );

        let nodes: Vec<Value> = graph
            .nodes
            .iter()
            .map(|node| {
                json!({
                    "id": node.id,
                    "label": node.id,
                    "title": node.id,
                    "color": config.color_for(node.leaf),
                    "shape": "dot",
                    "size": 10,
                })
            })
            .collect();

        let edges: Vec<Value> = graph
            .edges
            .iter()
            .map(|edge| json!({ "from": edge.from, "to": edge.to, "arrows": "to" }))
            .collect();

        let nodes_json = script_json(&Value::Array(nodes))?;
        let edges_json = script_json(&Value::Array(edges))?;
        let options_json = script_json(&network_options(config))?;
        let title = escape_html(&config.title);

        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(&format!("<script src=\"{}\"></script>\n", VIS_NETWORK_URL));
        html.push_str("<style>\n");
        html.push_str("html, body { margin: 0; padding: 0; font-family: sans-serif; }\n");
        html.push_str("#toolbar { padding: 6px 10px; background: #f4f4f4; border-bottom: 1px solid #ddd; }\n");
        html.push_str(&format!(
            "#graph {{ width: 100%; height: {}; }}\n",
            escape_html(&config.height)
        ));
        html.push_str("</style>\n</head>\n<body>\n");

        if config.select_menu {
            html.push_str("<div id=\"toolbar\">\n");
            html.push_str(&format!("<strong>{}</strong>\n", title));
            html.push_str("<select id=\"select-node\"><option value=\"\">Select a variable</option></select>\n");
            html.push_str("<button id=\"reset\" type=\"button\">Reset selection</button>\n");
            html.push_str("</div>\n");
        }

        html.push_str("<div id=\"graph\"></div>\n<script>\n");
        html.push_str(&format!("const nodes = new vis.DataSet({});\n", nodes_json));
        html.push_str(&format!("const edges = new vis.DataSet({});\n", edges_json));
        html.push_str(&format!("const options = {};\n", options_json));
        html.push_str(
            "const network = new vis.Network(document.getElementById(\"graph\"), { nodes, edges }, options);\n",
        );
        html.push_str(
            "const originalColors = Object.fromEntries(nodes.get().map((n) => [n.id, n.color]));\n",
        );
        html.push_str(HIGHLIGHT_SCRIPT);

        if config.neighborhood_highlight {
            html.push_str(
                "network.on(\"click\", (params) => highlight(params.nodes.length ? params.nodes[0] : null));\n",
            );
        }

        if config.select_menu {
            html.push_str(SELECT_MENU_SCRIPT);
        }

        html.push_str("</script>\n</body>\n</html>\n");

        info!("HTML graph generated successfully ({} bytes)", html.len());
        Ok(html)
    }
}

const HIGHLIGHT_SCRIPT: &str = r##"function highlight(selected) {
  if (selected === null) {
    nodes.update(nodes.get().map((n) => ({ id: n.id, color: originalColors[n.id], font: { color: "#343434" } })));
    return;
  }
  const keep = new Set(network.getConnectedNodes(selected));
  keep.add(selected);
  nodes.update(nodes.get().map((n) => keep.has(n.id)
    ? { id: n.id, color: originalColors[n.id], font: { color: "#343434" } }
    : { id: n.id, color: "rgba(200,200,200,0.5)", font: { color: "rgba(200,200,200,0.5)" } }));
}
"##;

const SELECT_MENU_SCRIPT: &str = r#"const menu = document.getElementById("select-node");
nodes.getIds().sort().forEach((id) => {
  const option = document.createElement("option");
  option.value = id;
  option.textContent = id;
  menu.appendChild(option);
});
menu.addEventListener("change", () => {
  if (!menu.value) { highlight(null); return; }
  network.selectNodes([menu.value]);
  network.focus(menu.value, { scale: 1.2, animation: true });
  highlight(menu.value);
});
document.getElementById("reset").addEventListener("click", () => {
  menu.value = "";
  network.unselectAll();
  highlight(null);
});
"#;

/// vis-network options: directed edges plus the Barnes-Hut tuning
fn network_options(config: &RenderConfig) -> Value {
    json!({
        "edges": {
            "arrows": { "to": { "enabled": true } },
            "smooth": { "type": "continuous" }
        },
        "interaction": { "hover": true },
        "physics": {
            "enabled": config.physics,
            "barnesHut": {
                "theta": 1,
                "centralGravity": 0,
                "springLength": 255,
                "springConstant": 0.06,
                "damping": 1,
                "avoidOverlap": 1
            },
            "minVelocity": 0.75
        }
    })
}

/// Serialize for embedding inside a `<script>` element
fn script_json(value: &Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let out = script_json(&json!(["</script>"])).unwrap();
        assert!(!out.contains("</script>"));
        assert!(out.contains("<\\/script>"));
    }
}
