//! Optional TOML settings file.
//!
//! Every field is optional; command-line flags override what the file sets.
//!
//! ```toml
//! period = "2024"
//! indent_width = 2
//! name_rule = "before-assignment"
//! exclude = ["spm_unit_size"]
//!
//! [engine]
//! program = "policyengine-core"
//! country_package = "policyengine_us"
//! ```

use crate::engine::CoreCliEngine;
use crate::parser::classifier::{ClassifierConfig, NameExtraction};
use crate::utils::config::DEFAULT_PERIOD;
use crate::utils::error::SettingsError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Evaluation period (e.g. "2024")
    pub period: Option<String>,

    /// Full period marker, when the engine's tag differs from `<period,`
    pub period_marker: Option<String>,

    pub indent_width: Option<usize>,

    pub name_rule: Option<NameExtraction>,

    /// Replaces the built-in denylist
    pub exclude: Option<Vec<String>>,

    #[serde(default)]
    pub engine: EngineSettings,
}

/// Calculation engine settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineSettings {
    pub program: Option<String>,
    pub country_package: Option<String>,
}

/// Load settings from a TOML file
///
/// # Errors
/// * `SettingsError::ReadFailed` - If file cannot be read
/// * `SettingsError::ParseFailed` - If TOML is invalid
/// * `SettingsError::InvalidValue` - If a value is out of range
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let contents = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.indent_width == Some(0) {
            return Err(SettingsError::InvalidValue(
                "indent_width must be greater than 0".to_string(),
            ));
        }

        if let Some(period) = &self.period {
            if period.trim().is_empty() {
                return Err(SettingsError::InvalidValue("period is empty".to_string()));
            }
        }

        if let Some(marker) = &self.period_marker {
            if marker.is_empty() {
                return Err(SettingsError::InvalidValue(
                    "period_marker is empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Period from the file, or the built-in default
    pub fn period(&self) -> &str {
        self.period.as_deref().unwrap_or(DEFAULT_PERIOD)
    }

    /// Classifier config for `period` with the file's overrides applied.
    ///
    /// `period_marker` only applies when `period` is the file's own period.
    pub fn classifier_config(&self, period: &str) -> ClassifierConfig {
        let mut config = ClassifierConfig::for_period(period);

        // The file's marker belongs to the file's period
        if let Some(marker) = &self.period_marker {
            if period == self.period() {
                config = config.with_period_marker(marker.clone());
            } else {
                warn!(
                    "Ignoring period_marker `{}` from settings: period {} overrides {}",
                    marker,
                    period,
                    self.period()
                );
            }
        }
        if let Some(width) = self.indent_width {
            config = config.with_indent_width(width);
        }
        if let Some(rule) = self.name_rule {
            config = config.with_name_rule(rule);
        }
        if let Some(exclude) = &self.exclude {
            config = config.with_excluded(exclude.iter().cloned());
        }

        config
    }

    /// Subprocess engine with the file's overrides applied
    pub fn engine(&self) -> CoreCliEngine {
        let mut engine = CoreCliEngine::new();

        if let Some(program) = &self.engine.program {
            engine = engine.with_program(program.clone());
        }
        if let Some(package) = &self.engine.country_package {
            engine = engine.with_country_package(package.clone());
        }

        engine
    }
}
