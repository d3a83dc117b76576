//! Graph rendering.
//!
//! Renderers take the backend-agnostic [`GraphExport`] and produce a document
//! as a string; writing it to disk is the output module's job.

pub mod dot;
pub mod html;
pub mod summary;

// Re-export main types
pub use dot::DotRenderer;
pub use html::HtmlRenderer;
pub use summary::render_text_summary;

use crate::parser::schema::GraphExport;
use crate::utils::error::RenderError;

/// A sink that turns an exported graph into a document
pub trait GraphRenderer {
    fn render(&self, graph: &GraphExport) -> Result<String, RenderError>;
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,

    /// CSS height of the graph canvas
    pub height: String,

    /// Barnes-Hut physics layout (off gives a static layout)
    pub physics: bool,

    /// Drop-down to pick and focus a node
    pub select_menu: bool,

    /// Dim everything but a clicked node's neighbors
    pub neighborhood_highlight: bool,

    pub leaf_color: String,
    pub node_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Variable Dependency Graph".to_string(),
            height: "100vh".to_string(),
            physics: true,
            select_menu: true,
            neighborhood_highlight: true,
            leaf_color: "red".to_string(),
            node_color: "#97c2fc".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_physics(mut self, physics: bool) -> Self {
        self.physics = physics;
        self
    }

    /// Color for a node given its leaf flag
    pub fn color_for(&self, leaf: bool) -> &str {
        if leaf {
            &self.leaf_color
        } else {
            &self.node_color
        }
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
