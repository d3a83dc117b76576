//! Trace Graph Studio library
//!
//! Turns the verbose trace of a rules-based calculation engine into a
//! directed graph of variable dependencies and renders it.
//!
//! ```ignore
//! use trace_graph_studio::parser::{parse_trace, to_export, ClassifierConfig};
//!
//! let parsed = parse_trace(&trace_text, &ClassifierConfig::for_period("2024"));
//! let export = to_export(&parsed.graph, Some("income_tax"), "2024");
//! ```

pub mod aggregator;
pub mod commands;
pub mod engine;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
