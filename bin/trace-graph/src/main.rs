//! Trace Graph CLI
//!
//! Runs a rules-based calculation engine for one variable and turns its
//! verbose trace into an interactive dependency graph.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use trace_graph_studio::commands::{
    display_schema, display_version, execute_graph, execute_parse, parse_input_pair,
    validate_graph_args, validate_graph_file, validate_parse_args, GraphArgs, OutputTargets,
    ParseArgs,
};
use trace_graph_studio::parser::{ClassifierConfig, NameExtraction};
use trace_graph_studio::render::RenderConfig;
use trace_graph_studio::utils::config::ARTIFACTS_DIR;
use trace_graph_studio::utils::settings::{load_settings, Settings};

/// Trace Graph - variable dependency graphs from calculation traces
#[derive(Parser, Debug)]
#[command(name = "trace-graph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML settings file
    #[arg(long, global = true, env = "TRACE_GRAPH_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the engine for a variable and graph its dependencies
    Graph {
        /// Variable to compute
        variable: String,

        /// Region code for the scenario (e.g. CA)
        #[arg(long)]
        region: Option<String>,

        /// Extra scenario input, repeatable
        #[arg(long = "input", value_name = "KEY=VALUE", value_parser = parse_input_pair)]
        inputs: Vec<(String, serde_json::Value)>,

        /// Also save the raw engine trace
        #[arg(long)]
        save_trace: Option<PathBuf>,

        /// Engine executable
        #[arg(long)]
        engine: Option<String>,

        /// Country model package passed to the engine
        #[arg(long)]
        country_package: Option<String>,

        #[command(flatten)]
        options: GraphOptions,
    },

    /// Graph a previously saved trace
    Parse {
        /// Path to the trace file
        #[arg(short, long)]
        trace: PathBuf,

        /// Variable the trace was produced for
        #[arg(long)]
        target: Option<String>,

        #[command(flatten)]
        options: GraphOptions,
    },

    /// Validate a graph JSON file
    Validate {
        /// Path to graph JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// Options shared by `graph` and `parse`
#[derive(Args, Debug)]
struct GraphOptions {
    /// Evaluation period (defaults to the settings file, then 2024)
    #[arg(short, long)]
    period: Option<String>,

    /// Period marker to match instead of `<PERIOD,`
    #[arg(long)]
    period_marker: Option<String>,

    /// Which part of a trace line holds the variable name
    #[arg(long, value_enum)]
    name_rule: Option<NameExtraction>,

    /// Additional variable to leave out of the graph, repeatable
    #[arg(long)]
    exclude: Vec<String>,

    /// Do not apply the built-in exclusion list
    #[arg(long)]
    no_default_excludes: bool,

    /// Output path for the HTML graph (placed in artifacts/ by default)
    #[arg(short, long, default_value = "nx.html")]
    output: PathBuf,

    /// Skip the HTML graph
    #[arg(long)]
    no_html: bool,

    /// Output path for the JSON graph export
    #[arg(long)]
    json: Option<PathBuf>,

    /// Output path for a Graphviz DOT file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Graph title
    #[arg(long)]
    title: Option<String>,

    /// Static layout instead of the physics simulation
    #[arg(long)]
    no_physics: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    debug!("Settings: {:?}", settings);

    // Execute command
    match cli.command {
        Commands::Graph {
            variable,
            region,
            inputs,
            save_trace,
            engine,
            country_package,
            options,
        } => {
            let period = resolve_period(&options, &settings);
            let title = options
                .title
                .clone()
                .unwrap_or_else(|| format!("Dependencies of {} ({})", variable, period));

            let args = GraphArgs {
                classifier: classifier_config(&options, &settings, &period),
                render_config: render_config(&options, title),
                outputs: output_targets(&options),
                save_trace: save_trace.map(into_artifacts),
                print_summary: options.summary,
                variable,
                period,
                region,
                inputs,
            };

            let mut runner = settings.engine();
            if let Some(program) = engine {
                runner = runner.with_program(program);
            }
            if let Some(package) = country_package {
                runner = runner.with_country_package(package);
            }

            // Validate args first
            validate_graph_args(&args)?;

            execute_graph(args, &runner)?;
        }

        Commands::Parse {
            trace,
            target,
            options,
        } => {
            let period = resolve_period(&options, &settings);
            let title = options.title.clone().unwrap_or_else(|| match &target {
                Some(target) => format!("Dependencies of {} ({})", target, period),
                None => format!("Dependencies in {}", trace.display()),
            });

            let args = ParseArgs {
                trace_file: trace,
                classifier: classifier_config(&options, &settings, &period),
                render_config: render_config(&options, title),
                outputs: output_targets(&options),
                print_summary: options.summary,
                period,
                target,
            };

            validate_parse_args(&args)?;

            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_graph_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn resolve_period(options: &GraphOptions, settings: &Settings) -> String {
    options
        .period
        .clone()
        .unwrap_or_else(|| settings.period().to_string())
}

/// Settings file first, then command-line overrides
fn classifier_config(options: &GraphOptions, settings: &Settings, period: &str) -> ClassifierConfig {
    let mut config = settings.classifier_config(period);

    if let Some(marker) = &options.period_marker {
        config = config.with_period_marker(marker.clone());
    }
    if let Some(rule) = options.name_rule {
        config = config.with_name_rule(rule);
    }
    if options.no_default_excludes {
        config = config.with_excluded(Vec::<String>::new());
    }
    for name in &options.exclude {
        config = config.exclude(name.clone());
    }

    config
}

fn render_config(options: &GraphOptions, title: String) -> RenderConfig {
    RenderConfig::new()
        .with_title(title)
        .with_physics(!options.no_physics)
}

fn output_targets(options: &GraphOptions) -> OutputTargets {
    OutputTargets {
        html: (!options.no_html).then(|| into_artifacts(options.output.clone())),
        json: options.json.clone().map(into_artifacts),
        dot: options.dot.clone().map(into_artifacts),
    }
}

/// Ensure outputs go to artifacts/ if no directory is specified
fn into_artifacts(path: PathBuf) -> PathBuf {
    if path.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
        PathBuf::from(ARTIFACTS_DIR).join(path)
    } else {
        path
    }
}
