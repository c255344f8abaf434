//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordfreq_core::{defaults, Config, WordOrder};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Counting configuration
    #[serde(default)]
    pub counting: CountingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Counting-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CountingConfig {
    /// Separator characters, taken literally after TOML unescaping
    pub separators: String,

    /// Report order
    pub ordering: WordOrder,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            separators: defaults::SEPARATORS.to_string(),
            ordering: WordOrder::default(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Core counting configuration described by this file
    pub fn counting_config(&self) -> Result<Config> {
        let config = Config::builder()
            .separators(&self.counting.separators)
            .order(self.counting.ordering)
            .build()
            .map_err(CliError::from)?;
        Ok(config)
    }
}
