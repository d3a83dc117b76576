//! Trace line classification.
//!
//! The engine logs one line per variable evaluation, indented two spaces per
//! nesting level:
//!
//! ```text
//! income_tax<2024, (default)> = [1234.5]
//!   taxable_income<2024, (default)> = [20000.]
//!     adjusted_gross_income<2024, (default)> = [25000.]
//! ```
//!
//! Only lines carrying both the assignment marker and the configured period
//! marker are evaluations. Everything else (headers, test results, values of
//! other periods) is irrelevant to the graph but still occupies a position in
//! the trace, which matters for look-ahead in the builder.

use crate::utils::config::{
    ASSIGNMENT_MARKER, DEFAULT_ANNOTATION, DEFAULT_EXCLUDED_VARIABLES, DEFAULT_PERIOD,
    INDENT_WIDTH,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which part of an evaluation line holds the variable name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum NameExtraction {
    /// Text preceding the first assignment marker
    #[default]
    #[serde(rename = "before-assignment")]
    #[value(name = "before-assignment")]
    BeforeAssignment,

    /// Text preceding the period marker
    #[serde(rename = "before-period")]
    #[value(name = "before-period")]
    BeforePeriodMarker,
}

/// A relevant trace line reduced to what the builder needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub variable_name: String,
    pub indent_depth: usize,
}

/// A trace line with its position-preserving depth.
///
/// Irrelevant lines are kept (with `evaluation: None`) so the builder can look
/// ahead at the next *original* line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub index: usize,
    pub depth: usize,
    pub evaluation: Option<ClassifiedLine>,
}

/// Per-invocation classifier settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Substring identifying evaluations for the configured period (`<2024,`)
    pub period_marker: String,

    /// Whitespace characters per nesting level
    pub indent_width: usize,

    pub name_rule: NameExtraction,

    /// Variables dropped as if their lines were irrelevant
    pub excluded: BTreeSet<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::for_period(DEFAULT_PERIOD)
    }
}

impl ClassifierConfig {
    /// Config for a period with the default indentation, name rule and denylist
    pub fn for_period(period: &str) -> Self {
        Self {
            period_marker: period_marker_for(period),
            indent_width: INDENT_WIDTH,
            name_rule: NameExtraction::default(),
            excluded: DEFAULT_EXCLUDED_VARIABLES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn with_period_marker(mut self, marker: impl Into<String>) -> Self {
        self.period_marker = marker.into();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_name_rule(mut self, rule: NameExtraction) -> Self {
        self.name_rule = rule;
        self
    }

    /// Replace the denylist
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one name to the denylist
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }
}

/// Period marker the engine writes for yearly evaluations of `period`
pub fn period_marker_for(period: &str) -> String {
    format!("<{},", period)
}

/// Nesting depth of a line: leading whitespace divided by the indent width,
/// truncated toward zero.
pub fn indent_depth(line: &str, indent_width: usize) -> usize {
    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
    leading / indent_width.max(1)
}

/// Classify a single raw trace line
///
/// **Public** - pure function, no side effects
///
/// # Returns
/// `Some` with the bare variable name and depth when the line is a relevant,
/// non-excluded evaluation; `None` otherwise.
pub fn classify_line(line: &str, config: &ClassifierConfig) -> Option<ClassifiedLine> {
    if !line.contains(ASSIGNMENT_MARKER) || !line.contains(config.period_marker.as_str()) {
        return None;
    }

    let variable_name = extract_variable_name(line, config)?;
    if config.is_excluded(&variable_name) {
        return None;
    }

    Some(ClassifiedLine {
        variable_name,
        indent_depth: indent_depth(line, config.indent_width),
    })
}

/// Pull the bare variable identifier out of an evaluation line.
///
/// Returns `None` if nothing is left once the period tag and annotations are
/// removed.
pub fn extract_variable_name(line: &str, config: &ClassifierConfig) -> Option<String> {
    let marker = config.period_marker.as_str();

    let head = match config.name_rule {
        NameExtraction::BeforeAssignment => line.split(ASSIGNMENT_MARKER).next()?,
        NameExtraction::BeforePeriodMarker => line.split(marker).next()?,
    };

    // Everything from the period marker on is the period tag
    let head = match head.find(marker) {
        Some(pos) => &head[..pos],
        None => head,
    };

    let name = head.replace(DEFAULT_ANNOTATION, "");
    let name = name.trim().trim_end_matches('>').trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Split a trace into lines and classify each one, preserving positions
///
/// **Public** - feeds the dependency builder
pub fn scan_lines(trace: &str, config: &ClassifierConfig) -> Vec<ScannedLine> {
    trace
        .lines()
        .enumerate()
        .map(|(index, line)| ScannedLine {
            index,
            depth: indent_depth(line, config.indent_width),
            evaluation: classify_line(line, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_depth_truncates() {
        assert_eq!(indent_depth("abc", 2), 0);
        assert_eq!(indent_depth(" abc", 2), 0);
        assert_eq!(indent_depth("   abc", 2), 1);
        assert_eq!(indent_depth("      abc", 2), 3);
    }

    #[test]
    fn test_indent_depth_zero_width_does_not_panic() {
        assert_eq!(indent_depth("    abc", 0), 4);
    }

    #[test]
    fn test_period_marker_for() {
        assert_eq!(period_marker_for("2024"), "<2024,");
    }
}
