//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Maximum range span must be at least one day")]
    InvalidMaxSpan,

    #[error("Default window must be at least one day")]
    InvalidDefaultWindow,

    #[error("Default window of {window} days exceeds maximum span of {max} days")]
    DefaultWindowExceedsSpan { window: u32, max: u32 },

    #[error("Quick range of {preset} days exceeds maximum span of {max} days")]
    PresetExceedsSpan { preset: u32, max: u32 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
