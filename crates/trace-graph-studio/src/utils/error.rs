//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while running the calculation engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to launch engine `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {0}")]
    ScenarioIo(#[from] std::io::Error),

    #[error("Failed to serialize scenario: {0}")]
    ScenarioSerialization(#[from] serde_json::Error),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

/// Errors that can occur during graph rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Failed to serialize graph data: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Settings TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    InvalidValue(String),
}
