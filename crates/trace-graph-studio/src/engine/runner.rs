//! Subprocess runner for the engine's command-line test tool.

use super::scenario::{scenario_document, ScenarioRequest};
use super::{CalculationEngine, EngineOutcome};
use crate::utils::config::{DEFAULT_COUNTRY_PACKAGE, DEFAULT_ENGINE_PROGRAM};
use crate::utils::error::EngineError;
use log::{debug, info, warn};
use std::io::Write;
use std::process::Command;

/// Runs `<program> test <scenario> -c <country_package> -v`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreCliEngine {
    pub program: String,
    pub country_package: String,
}

impl Default for CoreCliEngine {
    fn default() -> Self {
        Self {
            program: DEFAULT_ENGINE_PROGRAM.to_string(),
            country_package: DEFAULT_COUNTRY_PACKAGE.to_string(),
        }
    }
}

impl CoreCliEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_country_package(mut self, package: impl Into<String>) -> Self {
        self.country_package = package.into();
        self
    }
}

impl CalculationEngine for CoreCliEngine {
    fn run(&self, request: &ScenarioRequest) -> Result<EngineOutcome, EngineError> {
        let document = scenario_document(request)?;

        // Dropped (and deleted) when this function returns
        let mut scenario = tempfile::Builder::new()
            .prefix("trace-graph-scenario-")
            .suffix(".yaml")
            .tempfile()?;
        scenario.write_all(document.as_bytes())?;
        scenario.flush()?;

        debug!("Scenario written to {}", scenario.path().display());
        info!(
            "Running {} for {} ({})",
            self.program, request.variable, request.period
        );

        let output = Command::new(&self.program)
            .arg("test")
            .arg(scenario.path())
            .arg("-c")
            .arg(&self.country_package)
            .arg("-v")
            .output()
            .map_err(|source| EngineError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            let trace = String::from_utf8_lossy(&output.stdout).into_owned();
            debug!("Engine produced {} bytes of trace", trace.len());
            Ok(EngineOutcome::Trace(trace))
        } else {
            warn!("Engine exited with {}", output.status);
            Ok(EngineOutcome::Failed {
                status: output.status.code(),
                output: failure_text(&output.stdout, &output.stderr),
            })
        }
    }
}

/// Failure report of a run: stderr, or stdout when stderr is blank.
///
/// Test runners often print assertion reports to stdout only.
fn failure_text(stdout: &[u8], stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(stdout).into_owned()
    } else {
        stderr.into_owned()
    }
}
