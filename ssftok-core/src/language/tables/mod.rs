//! Character lookup tables used by the segmenter

pub mod punctuation;
pub mod terminator;

pub use punctuation::is_merge_punctuation;
pub use terminator::EndMarkerSet;
