//! Aggregation of classified trace lines into a dependency graph and metrics.
//!
//! This module transforms classified trace lines into:
//! - A deduplicated dependency graph with leaf classification
//! - Fan-out rankings
//! - Graph statistics

pub mod dependency_builder;
pub mod metrics;

// Re-export main types and functions
pub use dependency_builder::{build_dependency_graph, DependencyBuilder, DependencyGraph, Edge};
pub use metrics::{calculate_fan_out, calculate_graph_stats, FanOut, GraphStats};
