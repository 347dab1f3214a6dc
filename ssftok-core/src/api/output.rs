//! Output types for the processing API

use std::time::Duration;

use crate::segmenter::{SegmentStats, Sentence};
use crate::ssf;

/// Segmented document with processing metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Language code the document was processed with
    pub language_code: String,
    /// Segmentation counters
    pub stats: SegmentStats,
}

impl Output {
    /// Render the sentences as SSF blocks
    pub fn to_ssf(&self) -> String {
        ssf::to_ssf(&self.sentences)
    }

    /// Sentence texts, tokens joined by single spaces
    pub fn sentence_texts(&self) -> Vec<String> {
        self.sentences.iter().map(Sentence::text).collect()
    }

    /// Whether the document produced no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
