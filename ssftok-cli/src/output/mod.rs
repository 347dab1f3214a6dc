//! Output formatting and placement

use anyhow::Result;
use ssftok_core::Sentence;
use std::path::{Path, PathBuf};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod ssf;

pub use ssf::SsfFormatter;

/// Format every sentence with `formatter` and finish it
pub fn write_sentences<F: OutputFormatter>(formatter: &mut F, sentences: &[Sentence]) -> Result<()> {
    for sentence in sentences {
        formatter.format_sentence(sentence)?;
    }
    formatter.finish()
}

/// Output path for `file`, found below `input_root`, inside `output_root`.
///
/// The path relative to the input root is kept, so equally named files in
/// different subdirectories do not overwrite each other.
pub fn output_path_for(
    input_root: &Path,
    file: &Path,
    output_root: &Path,
    extension: Option<&str>,
) -> PathBuf {
    let relative = file
        .strip_prefix(input_root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| file.file_name().map(PathBuf::from))
        .unwrap_or_else(|| file.to_path_buf());

    let target = output_root.join(relative);
    match extension {
        Some(ext) => target.with_extension(ext.trim_start_matches('.')),
        None => target,
    }
}
