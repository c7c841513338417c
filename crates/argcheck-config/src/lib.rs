//! Configuration system for argcheck.
//!
//! Controls whether validated functions enforce their checks, only log
//! failures, or skip checking, without code changes. Annotations are always
//! compiled at registration, whatever the mode, so a bad annotation still
//! fails early.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use argcheck_config::{ValidationConfig, ValidationMode};
//!
//! let config = ValidationConfig::from_toml_str(r#"
//!     mode = "enforce"
//!
//!     [functions.parse_header]
//!     mode = "warn"
//! "#).unwrap();
//!
//! assert_eq!(config.mode_for("parse_header"), ValidationMode::Warn);
//! assert_eq!(config.mode_for("anything_else"), ValidationMode::Enforce);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use argcheck_config::ValidationConfig;
//!
//! let config = ValidationConfig::load("argcheck.toml").unwrap_or_default();
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidationConfig {
    /// Mode used by every function without an override.
    #[serde(default)]
    pub mode: ValidationMode,

    /// Per-function overrides, keyed by registered function name.
    #[serde(default)]
    pub functions: HashMap<String, FunctionOverride>,
}

impl ValidationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the default mode.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the mode for one function.
    pub fn with_function_mode(mut self, function: impl Into<String>, mode: ValidationMode) -> Self {
        self.functions
            .insert(function.into(), FunctionOverride::with_mode(mode));
        self
    }

    /// Returns the effective mode for a registered function.
    pub fn mode_for(&self, function: &str) -> ValidationMode {
        self.functions
            .get(function)
            .and_then(|o| o.mode)
            .unwrap_or(self.mode)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.functions.keys().find(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "function override name must not be blank: {:?}",
                name
            )));
        }
        Ok(())
    }
}

/// How a validated function treats failed checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Failed checks are returned to the caller.
    #[default]
    Enforce,

    /// Failed checks are logged and the call proceeds.
    /// Binding rejections are still returned.
    Warn,

    /// Calls are forwarded without binding or checking.
    Off,
}

/// Per-function configuration override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FunctionOverride {
    /// Mode for this function, if different from the default.
    pub mode: Option<ValidationMode>,
}

impl FunctionOverride {
    pub fn with_mode(mode: ValidationMode) -> Self {
        FunctionOverride { mode: Some(mode) }
    }
}
