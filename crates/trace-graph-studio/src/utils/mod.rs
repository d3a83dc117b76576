//! Utility modules for configuration, settings files, and error handling.

pub mod config;
pub mod error;
pub mod settings;

// Re-export commonly used error types for convenience
pub use error::{EngineError, OutputError, RenderError, SettingsError};
