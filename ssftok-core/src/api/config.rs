//! Configuration API for SSF processing

use crate::error::Result;
use crate::language::{LanguageClass, DEFAULT_LANGUAGE_CODE};

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language_code: String,
    pub(crate) language: LanguageClass,
    pub(crate) sentence_split: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            language: LanguageClass::default(),
            sentence_split: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language code as given
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Resolved language class
    pub fn language(&self) -> LanguageClass {
        self.language
    }

    /// Whether coarse sentence splitting runs before refinement
    pub fn sentence_split(&self) -> bool {
        self.sentence_split
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    sentence_split: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by ISO 639-1 code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Enable or disable coarse sentence splitting
    pub fn sentence_split(mut self, enabled: bool) -> Self {
        self.sentence_split = Some(enabled);
        self
    }

    /// Build the configuration, resolving the language code
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = LanguageClass::from_code(&code)?;
            config.language_code = code.trim().to_lowercase();
        }

        if let Some(enabled) = self.sentence_split {
            config.sentence_split = enabled;
        }

        Ok(config)
    }
}
