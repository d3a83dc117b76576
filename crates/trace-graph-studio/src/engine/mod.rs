//! Calculation engine collaborator.
//!
//! The parser only ever sees trace text. Producing it (building a scenario and
//! running the engine) happens behind [`CalculationEngine`], so commands can be
//! driven by the real subprocess or by an in-process fake.

pub mod runner;
pub mod scenario;

pub use runner::CoreCliEngine;
pub use scenario::{scenario_document, ScenarioCase, ScenarioRequest};

use crate::utils::error::EngineError;

/// Result of one engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    /// Verbose trace from a successful run
    Trace(String),

    /// The engine ran but failed; `output` is its failure text, verbatim
    Failed { status: Option<i32>, output: String },
}

/// Anything that can turn a scenario request into a trace
pub trait CalculationEngine {
    fn run(&self, request: &ScenarioRequest) -> Result<EngineOutcome, EngineError>;
}

impl<F> CalculationEngine for F
where
    F: Fn(&ScenarioRequest) -> Result<EngineOutcome, EngineError>,
{
    fn run(&self, request: &ScenarioRequest) -> Result<EngineOutcome, EngineError> {
        self(request)
    }
}
