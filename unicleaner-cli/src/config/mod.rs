//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use unicleaner_core::HtmlClasses;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Highlight rendering configuration
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            pretty_json: true,
        }
    }
}

/// CSS classes for the HTML highlight
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Class attribute for invisible spans
    pub invisible_class: String,

    /// Class attribute for double-space spans
    pub double_space_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        let classes = HtmlClasses::default();
        Self {
            invisible_class: classes.invisible,
            double_space_class: classes.double_space,
        }
    }
}

impl HighlightConfig {
    /// Classes to hand to the renderer
    pub fn html_classes(&self) -> HtmlClasses {
        HtmlClasses {
            invisible: self.invisible_class.clone(),
            double_space: self.double_space_class.clone(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Process input files in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.default_format()?;
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Default output format from the config, if any
    pub fn default_format(&self) -> Result<Option<OutputFormat>, CliError> {
        self.output
            .default_format
            .as_deref()
            .map(|name| {
                OutputFormat::from_str(name, true)
                    .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
            })
            .transpose()
    }

    /// Render as a commented TOML template
    pub fn to_template(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        Ok(format!(
            "# unicleaner configuration\n\
             #\n\
             # [output] default_format: one of text, json, markdown, html\n\
             # [performance] worker_threads: 0 picks the number of CPUs\n\n{body}"
        ))
    }
}
