//! Configuration and constants for the CLI.

/// Current graph export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Period evaluated when none is given
pub const DEFAULT_PERIOD: &str = "2024";

/// Characters of leading whitespace per nesting level in engine traces
pub const INDENT_WIDTH: usize = 2;

// Markers the engine writes on every evaluation line:
// `  income_tax<2024, (default)> = [1234.5]`
pub const ASSIGNMENT_MARKER: char = '=';
pub const DEFAULT_ANNOTATION: &str = "(default)";

/// Variables that only add noise to the graph (labor supply response plumbing
/// and household-size helpers that nearly everything reads).
pub const DEFAULT_EXCLUDED_VARIABLES: &[&str] = &[
    "employment_income_before_lsr",
    "employment_income_behavioral_response",
    "spm_unit_size",
];

// Calculation engine invocation
pub const DEFAULT_ENGINE_PROGRAM: &str = "policyengine-core";
pub const DEFAULT_COUNTRY_PACKAGE: &str = "policyengine_us";
pub const SCENARIO_NAME: &str = "Scenario";
pub const REGION_INPUT_KEY: &str = "state_code";

/// Where outputs without a directory component are written
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Number of fan-out entries shown in the terminal summary
pub const SUMMARY_TOP_FAN_OUT: usize = 10;
