use crate::parser::classifier::ClassifierConfig;
use crate::render::RenderConfig;
use crate::utils::config::DEFAULT_PERIOD;
use serde_json::Value;
use std::path::PathBuf;

/// Where to write the rendered graph
///
/// **Public** - shared by the graph and parse commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    /// Interactive HTML page
    pub html: Option<PathBuf>,

    /// JSON graph export
    pub json: Option<PathBuf>,

    /// Graphviz DOT file
    pub dot: Option<PathBuf>,
}

impl OutputTargets {
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.json.is_none() && self.dot.is_none()
    }
}

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Variable whose dependencies are graphed
    pub variable: String,

    /// Evaluation period (e.g. "2024")
    pub period: String,

    /// Optional region code for the scenario
    pub region: Option<String>,

    /// Extra scenario inputs
    pub inputs: Vec<(String, Value)>,

    pub outputs: OutputTargets,

    /// Also keep the raw engine trace
    pub save_trace: Option<PathBuf>,

    pub classifier: ClassifierConfig,

    pub render_config: RenderConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            variable: String::new(),
            period: DEFAULT_PERIOD.to_string(),
            region: None,
            inputs: Vec::new(),
            outputs: OutputTargets {
                html: Some(PathBuf::from("nx.html")),
                json: None,
                dot: None,
            },
            save_trace: None,
            classifier: ClassifierConfig::default(),
            render_config: RenderConfig::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Saved engine trace
    pub trace_file: PathBuf,

    pub period: String,

    /// Variable the trace was produced for, if known
    pub target: Option<String>,

    pub outputs: OutputTargets,

    pub classifier: ClassifierConfig,

    pub render_config: RenderConfig,

    pub print_summary: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            trace_file: PathBuf::new(),
            period: DEFAULT_PERIOD.to_string(),
            target: None,
            outputs: OutputTargets {
                html: Some(PathBuf::from("nx.html")),
                json: None,
                dot: None,
            },
            classifier: ClassifierConfig::default(),
            render_config: RenderConfig::default(),
            print_summary: false,
        }
    }
}

/// Parse a `KEY=VALUE` scenario input.
///
/// The value is read as JSON when it parses (numbers, booleans, arrays) and
/// kept as a plain string otherwise.
pub fn parse_input_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty input name in `{}`", raw));
    }

    let value = value.trim();
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));

    Ok((key.to_string(), value))
}
