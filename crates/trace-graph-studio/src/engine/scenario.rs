//! Scenario requests and the document handed to the engine's test runner.

use crate::utils::config::{REGION_INPUT_KEY, SCENARIO_NAME};
use crate::utils::error::EngineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What to compute: one target variable for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub variable: String,
    pub period: String,

    /// Input context (e.g. a region code)
    #[serde(default)]
    pub inputs: BTreeMap<String, Value>,
}

impl ScenarioRequest {
    pub fn new(variable: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            period: period.into(),
            inputs: BTreeMap::new(),
        }
    }

    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    /// Set the region the household lives in
    pub fn with_region(self, region: impl Into<String>) -> Self {
        let region: String = region.into();
        self.with_input(REGION_INPUT_KEY, region)
    }
}

/// One test case in the engine's scenario file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCase {
    pub name: String,
    pub period: Value,
    pub input: BTreeMap<String, Value>,
    pub output: BTreeMap<String, Value>,
}

impl From<&ScenarioRequest> for ScenarioCase {
    fn from(request: &ScenarioRequest) -> Self {
        // The engine wants yearly periods as integers
        let period = request
            .period
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(request.period.clone()));

        let mut output = BTreeMap::new();
        output.insert(request.variable.clone(), Value::from(0));

        Self {
            name: SCENARIO_NAME.to_string(),
            period,
            input: request.inputs.clone(),
            output,
        }
    }
}

/// Render the scenario file for a request.
///
/// The document is JSON, which the engine's YAML loader reads as-is.
pub fn scenario_document(request: &ScenarioRequest) -> Result<String, EngineError> {
    if request.variable.trim().is_empty() {
        return Err(EngineError::InvalidScenario(
            "target variable is empty".to_string(),
        ));
    }

    let cases = vec![ScenarioCase::from(request)];
    Ok(serde_json::to_string_pretty(&cases)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scenario_document_shape() {
        let request = ScenarioRequest::new("income_tax", "2024").with_region("CA");
        let doc = scenario_document(&request).unwrap();
        let parsed: Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(
            parsed,
            json!([{
                "name": "Scenario",
                "period": 2024,
                "input": { "state_code": "CA" },
                "output": { "income_tax": 0 }
            }])
        );
    }

    #[test]
    fn test_non_numeric_period_kept_as_string() {
        let case = ScenarioCase::from(&ScenarioRequest::new("x", "2024-01"));
        assert_eq!(case.period, json!("2024-01"));
    }

    #[test]
    fn test_empty_variable_rejected() {
        let request = ScenarioRequest::new("  ", "2024");
        assert!(scenario_document(&request).is_err());
    }
}
