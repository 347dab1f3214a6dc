//! Document processor: raw text in, sentences and SSF out

use std::io::Read;
use std::time::Instant;

use log::debug;

use crate::api::{Config, Input, Output, ProcessingMetadata};
use crate::error::Result;
use crate::segmenter::SentenceSegmenter;
use crate::tokenizer::Tokenizer;

/// Tokenizes and segments whole documents for one configuration
#[derive(Debug, Clone)]
pub struct SsfProcessor {
    tokenizer: Tokenizer,
    config: Config,
}

impl SsfProcessor {
    /// Create a processor with the default configuration (`hi`)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        Ok(Self { tokenizer, config })
    }

    /// Create a processor for a specific language code
    pub fn for_language(lang_code: impl Into<String>) -> Result<Self> {
        let config = Config::builder().language(lang_code).build()?;
        Self::with_config(config)
    }

    /// The compiled tokenizer shared by every document
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segmenter bound to this processor's tokenizer and language
    pub fn segmenter(&self) -> SentenceSegmenter<'_> {
        SentenceSegmenter::new(&self.tokenizer, self.config.language)
            .with_sentence_split(self.config.sentence_split)
    }

    /// Process input and return its sentences
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        debug!("processing {:?} as {}", input, self.config.language_code);

        let text = input.into_text()?;
        let segmentation = self.segmenter().segment_text(&text);

        Ok(Output {
            sentences: segmentation.sentences,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                language_code: self.config.language_code.clone(),
                stats: segmentation.stats,
            },
        })
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Output> {
        self.process(Input::from_reader(reader))
    }

    /// Process text and render it straight to SSF
    pub fn to_ssf(&self, text: &str) -> String {
        crate::ssf::to_ssf(&self.segmenter().segment_text(text).sentences)
    }
}
