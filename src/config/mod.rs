//! Coordinator configuration.
//!
//! Configuration is plain data: it can be built with the fluent setters or
//! deserialized from JSON. Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Number of trace entries kept when no capacity is configured
pub const DEFAULT_TRACE_CAPACITY: usize = 256;

/// Options applied when a coordinator is built.
///
/// # Example
///
/// ```rust
/// use exclusive_state::config::CoordinatorConfig;
///
/// let config = CoordinatorConfig::from_json(r#"{ "debug_logs": true }"#).unwrap();
/// assert!(config.debug_logs);
/// assert_eq!(config.trace_capacity, 256);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Attach an info-level log subscriber to every node's enter and exit
    pub debug_logs: bool,

    /// Maximum retained trace entries; zero disables tracing
    pub trace_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            debug_logs: false,
            trace_capacity: DEFAULT_TRACE_CAPACITY,
        }
    }
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-node debug logging
    pub fn debug_logs(mut self, enabled: bool) -> Self {
        self.debug_logs = enabled;
        self
    }

    /// Set the trace capacity (zero disables the trace)
    pub fn trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = capacity;
        self
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_debug_logs() {
        let config = CoordinatorConfig::default();
        assert!(!config.debug_logs);
        assert_eq!(config.trace_capacity, DEFAULT_TRACE_CAPACITY);
    }

    #[test]
    fn fluent_setters_apply() {
        let config = CoordinatorConfig::new()
            .debug_logs(true)
            .trace_capacity(0);
        assert!(config.debug_logs);
        assert_eq!(config.trace_capacity, 0);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoordinatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CoordinatorConfig::default());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = CoordinatorConfig::from_json("{ debug_logs: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = CoordinatorConfig::from_json(r#"{ "trace_capacity": "many" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn config_survives_json() {
        let config = CoordinatorConfig::new().debug_logs(true).trace_capacity(8);
        let json = config.to_json().unwrap();
        assert_eq!(CoordinatorConfig::from_json(&json).unwrap(), config);
    }
}
