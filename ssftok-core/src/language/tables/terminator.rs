//! Sentence end-marker lookup with O(1) membership
//!
//! Optimized for the hot path with an ASCII fast-path.

use std::collections::HashSet;

/// Fast end-marker lookup table
#[derive(Debug, Clone)]
pub struct EndMarkerSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII markers (danda, Arabic question mark, ...)
    non_ascii: HashSet<char>,
}

impl EndMarkerSet {
    /// Create from a list of marker characters
    pub fn new(markers: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in markers {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if a character is an end marker - hot path
    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Check if a whole token is an end marker.
    ///
    /// Only single-character tokens can match; `"?!"` or `"।।"` never do.
    pub fn is_end_marker(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.contains_char(ch),
            _ => false,
        }
    }
}
