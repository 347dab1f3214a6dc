//! Tokenization and sentence segmentation into SSF blocks
//!
//! This crate turns raw multilingual text (one utterance per line) into
//! sentence-segmented, tokenized output in the column-tagged SSF format used
//! for corpus preparation in Indian-language NLP pipelines.
//!
//! # Architecture
//!
//! - [`tokenizer`]: script-aware word/number/punctuation tokenizer
//! - [`segmenter`]: coarse split, end-marker refinement and punctuation merge
//! - [`ssf`]: `<Sentence>` block rendering
//! - [`api`]: configuration, input handling and the [`SsfProcessor`] facade
//!
//! # Example
//!
//! ```rust
//! use ssftok_core::{Input, SsfProcessor};
//!
//! let processor = SsfProcessor::for_language("hi").unwrap();
//! let output = processor.process(Input::from_text("राम गया। श्याम आया।")).unwrap();
//!
//! assert_eq!(output.sentences.len(), 2);
//! assert!(output.to_ssf().starts_with("<Sentence id='1'>\n1\tराम\tunk\n"));
//! ```

pub mod api;
pub mod error;
pub mod language;
pub mod segmenter;
pub mod ssf;
pub mod tokenizer;

pub use api::{Config, ConfigBuilder, Input, Output, ProcessingMetadata, SsfProcessor};
pub use error::{Error, Result};
pub use language::{EndMarkerSet, LanguageClass, DEFAULT_LANGUAGE_CODE};
pub use segmenter::{SegmentStats, Segmentation, Sentence, SentenceSegmenter};
pub use tokenizer::{SpecialPatterns, Tokenizer};
