//! Configuration for multimemo.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{MemoError, MemoResult};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "multimemo.toml";

/// Main configuration for multimemo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Privatizer settings.
    #[serde(default)]
    pub privatizer: PrivatizerConfig,

    /// Settings for the bundled counter demo.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// How a slot name list is checked when the private scope is built.
///
/// Malformed names, reserved words and empty lists are rejected under every
/// policy. The policy only decides what happens with repeated names.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Repeated names collapse into a single slot.
    #[default]
    Permissive,
    /// Repeated names are an error.
    Strict,
}

/// Privatizer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivatizerConfig {
    /// Name validation policy.
    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl PrivatizerConfig {
    /// Configuration that rejects repeated names.
    pub fn strict() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
        }
    }
}

/// Counter demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Name of the privatized counter slot.
    #[serde(default = "default_demo_slot")]
    pub slot: String,

    /// Number of times the counter is called.
    #[serde(default = "default_demo_calls")]
    pub calls: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            slot: default_demo_slot(),
            calls: default_demo_calls(),
        }
    }
}

fn default_demo_slot() -> String {
    "iSeed".to_string()
}

fn default_demo_calls() -> usize {
    3
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MemoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the binary cannot honour.
    pub fn validate(&self) -> MemoResult<()> {
        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(MemoError::config(format!(
                "unknown log_level '{}' (expected one of: {})",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(MemoError::config(format!(
                "unknown log_format '{}' (expected one of: {})",
                self.general.log_format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MemoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            privatizer: PrivatizerConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
