//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, error, info, warn};
use ssftok_core::{Config, Input, Output, SsfProcessor, DEFAULT_LANGUAGE_CODE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_input, FileReader, InputPlan};
use crate::output::{output_path_for, write_sentences, SsfFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file, or a directory processed recursively
    #[arg(short, long, value_name = "PATH", required = true)]
    pub input: PathBuf,

    /// Output file, or output directory for directory input (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Two-letter ISO 639-1 language code [default: hi]
    #[arg(short, long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// Treat every input line as one candidate instead of splitting sentences first
    #[arg(long)]
    pub no_sentence_split: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        info!("Starting text processing");
        debug!("Arguments: {:?}", self);

        // Resolve everything that can fail before touching input or output
        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let processor = self.build_processor(&file_config)?;

        match resolve_input(&self.input)? {
            InputPlan::File(path) => self.process_single(&processor, &path),
            InputPlan::Directory { root, files } => {
                self.process_directory(&processor, &root, &files, &file_config)
            }
        }
    }

    /// Merge flags over the config file and build the processor
    fn build_processor(&self, file_config: &CliConfig) -> Result<SsfProcessor> {
        let language = self
            .language
            .as_deref()
            .or(file_config.processing.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE_CODE);
        let sentence_split = !self.no_sentence_split && file_config.processing.sentence_split;

        let config = Config::builder()
            .language(language)
            .sentence_split(sentence_split)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        info!(
            "Language: {} ({}), sentence split: {}",
            config.language_code(),
            config.language(),
            config.sentence_split()
        );

        Ok(SsfProcessor::with_config(config)?)
    }

    fn process_single(&self, processor: &SsfProcessor, path: &Path) -> Result<()> {
        let output = process_file(processor, path)?;

        match &self.output {
            Some(target) => write_output_file(&output, target),
            None => {
                let mut formatter = SsfFormatter::new(io::stdout().lock());
                write_sentences(&mut formatter, &output.sentences)
            }
        }
    }

    fn process_directory(
        &self,
        processor: &SsfProcessor,
        root: &Path,
        files: &[PathBuf],
        file_config: &CliConfig,
    ) -> Result<()> {
        let output_root = self.output.as_deref().ok_or_else(|| {
            CliError::ConfigError("--output is required when the input is a directory".into())
        })?;

        fs::create_dir_all(output_root).with_context(|| {
            format!("Failed to create output directory: {}", output_root.display())
        })?;

        if files.is_empty() {
            warn!("No files found under {}", root.display());
            return Ok(());
        }

        let extension = file_config.output.extension.as_deref();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut failed = 0;
        for file in files {
            let target = output_path_for(root, file, output_root, extension);
            let name = file.display().to_string();

            let result = process_file(processor, file).and_then(|output| {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
                write_output_file(&output, &target)
            });

            match result {
                Ok(()) => progress.file_completed(&name),
                Err(e) => {
                    error!("{}: {:#}", name, e);
                    progress.file_failed(&name);
                    failed += 1;
                }
            }
        }

        progress.finish(failed);
        info!(
            "Processed {} of {} files into {}",
            files.len() - failed,
            files.len(),
            output_root.display()
        );

        if failed > 0 {
            return Err(CliError::BatchFailed {
                failed,
                total: files.len(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Already installed when called more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Read and segment one document
fn process_file(processor: &SsfProcessor, path: &Path) -> Result<Output> {
    let text = FileReader::read_text(path)?;
    let size = text.len();
    let output = processor
        .process(Input::from_text(text))
        .map_err(|e| CliError::ProcessingError(format!("{}: {}", path.display(), e)))?;

    let stats = output.metadata.stats;
    debug!(
        "{}: {} bytes, {} lines, {} candidates, {} sentences, {} merges in {:?}",
        path.display(),
        size,
        stats.lines,
        stats.candidates,
        output.sentences.len(),
        stats.merges,
        output.metadata.duration
    );

    Ok(output)
}

/// Render fully in memory, then write in one call
fn write_output_file(output: &Output, target: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_sentences(&mut SsfFormatter::new(&mut buffer), &output.sentences)?;

    fs::write(target, buffer)
        .with_context(|| format!("Failed to write output file: {}", target.display()))
}
