//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a coordinator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
