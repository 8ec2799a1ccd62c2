//! Error types for the bsgrid CLI.

use pricer_core::types::InputError;
use pricer_models::analytical::AnalyticalError;
use pricer_risk::GridError;
use thiserror::Error;

use crate::config::ConfigError;

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input outside the pricer's domain
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Input outside the configured host range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Pricing failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] AnalyticalError),

    /// Grid generation failed
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Rendering results failed
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
