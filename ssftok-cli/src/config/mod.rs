//! Configuration module
//!
//! Settings are read from an optional TOML file. Command-line flags take
//! precedence over the file, and the file over built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Language code used when `--lang` is not given
    #[serde(default)]
    pub language: Option<String>,

    /// Run coarse sentence splitting before token-level refinement
    #[serde(default = "default_true")]
    pub sentence_split: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: None,
            sentence_split: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Replacement extension for files written in directory mode
    #[serde(default)]
    pub extension: Option<String>,
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
