//! Language classes and the lookup tables they select
//!
//! A language code (two-letter ISO 639-1) maps to one of three coarse
//! [`LanguageClass`]es. The class decides which tokens end a sentence and
//! whether the coarse splitter breaks on the Devanagari full stop.

mod class;
pub(crate) mod tables;

pub use class::{LanguageClass, DEFAULT_LANGUAGE_CODE};
pub(crate) use class::DANDA;
pub use tables::{is_merge_punctuation, EndMarkerSet};
