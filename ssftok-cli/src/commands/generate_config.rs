//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use ssftok_core::{LanguageClass, DEFAULT_LANGUAGE_CODE};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Default language code written into the template
    #[arg(short = 'l', long = "lang", value_name = "CODE", default_value = DEFAULT_LANGUAGE_CODE)]
    pub language: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let class = LanguageClass::from_code(&self.language)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        println!("Generating configuration template...");
        println!("  Language code: {} ({})", self.language, class);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for processing:");
        println!(
            "   ssftok process -i input.txt -o output.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# ssftok configuration
# Command-line flags override the values below.

[processing]
# Two-letter ISO 639-1 code:
#   Devanagari-family:    hi, or, mn, as, bn, pa
#   Arabic-script-family: ur, ks
#   Other:                en, gu, mr, ml, kn, te, ta
language = "{}"

# Split on line breaks (and the danda for Devanagari-family languages)
# before refining at end markers. Set to false to treat each line as a
# single candidate.
sentence_split = true

[output]
# Replace the file extension of outputs written in directory mode.
# extension = "ssf"
"#,
            self.language.trim().to_lowercase()
        )
    }
}
