// Validation engine configuration

use lcform_core::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Validation engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Emit tracing events for registrations and triggers
    pub enable_logging: bool,

    /// Result type recorded when a rule fails during full-form validation
    pub rule_failure_type: String,

    /// Convert panicking rules into rule errors on single-field triggers.
    /// When off, the panic unwinds through the trigger. Full-form validation
    /// always converts panics into failed entries.
    pub catch_panics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            rule_failure_type: "RULE_FAILURE".to_string(),
            catch_panics: true,
        }
    }
}

impl EngineConfig {
    /// Parse configuration from a TOML document. Missing keys keep their defaults.
    ///
    /// ```
    /// use lcform_validation::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("enable_logging = false").unwrap();
    /// assert!(!config.enable_logging);
    /// assert_eq!(config.rule_failure_type, "RULE_FAILURE");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(format!("Failed to read file: {}", e)))?;

        Self::from_toml_str(&content)
    }
}

/// Engine configuration builder
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Enable/disable logging
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.config.enable_logging = enabled;
        self
    }

    /// Set the result type used for failed rules in full-form validation
    pub fn rule_failure_type(mut self, kind: impl Into<String>) -> Self {
        self.config.rule_failure_type = kind.into();
        self
    }

    /// Enable/disable panic capture
    pub fn catch_panics(mut self, enabled: bool) -> Self {
        self.config.catch_panics = enabled;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
