//! Script-aware word and punctuation tokenizer
//!
//! Each whitespace-delimited chunk is scanned left to right with a single
//! alternation; the first alternative that matches at a position wins:
//!
//! 1. a run of Brahmic-script characters, optionally joined across an
//!    apostrophe variant when script characters follow,
//! 2. a run of Latin letters, optionally joined across `'`,
//! 3. a run of digits, optionally joined across `.` or `,`,
//! 4. a standalone script-specific punctuation mark,
//! 5. any other single non-space character.
//!
//! The last alternative guarantees every non-space character lands in
//! exactly one token.

mod patterns;

pub use patterns::{SpecialPatterns, SPECIAL_PATTERN_TABLE};

use regex::Regex;

use crate::error::Result;

/// Devanagari through Sinhala, minus the dandas, plus ZWNJ/ZWJ
const BRAHMIC_CLASS: &str = r"\x{0900}-\x{0963}\x{0966}-\x{0DFF}\x{200C}\x{200D}";

/// Apostrophe variants allowed inside a Brahmic word
const APOSTROPHE_CLASS: &str = r"'\x{2019}\x{02BC}\x{02BB}";

/// Danda, Arabic full stop/comma/semicolon/question/percent, quotes, `?`
const STANDALONE_PUNCTUATION: &str = r#"\x{0964}\x{06D4}\x{060C}\x{061B}\x{061F}\x{066A}"\x{201C}\x{201D}?"#;

fn token_pattern() -> String {
    format!(
        r"[{b}]+(?:[{a}][{b}]+)*|[A-Za-z]+(?:'[A-Za-z]+)*|\d+(?:[.,]\d+)*|[{p}]|\S",
        b = BRAHMIC_CLASS,
        a = APOSTROPHE_CLASS,
        p = STANDALONE_PUNCTUATION,
    )
}

/// Compiled tokenizer; build once and share by reference
#[derive(Debug, Clone)]
pub struct Tokenizer {
    token_re: Regex,
}

impl Tokenizer {
    /// Compile the token pattern
    pub fn new() -> Result<Self> {
        let token_re = Regex::new(&token_pattern())?;
        Ok(Self { token_re })
    }

    /// Tokenize a single whitespace-free chunk.
    ///
    /// A chunk that yields no match at all is passed through unchanged.
    pub fn tokenize_chunk<'a>(&self, chunk: &'a str) -> Vec<&'a str> {
        let tokens: Vec<&str> = self
            .token_re
            .find_iter(chunk)
            .map(|m| m.as_str())
            .collect();

        if tokens.is_empty() {
            vec![chunk]
        } else {
            tokens
        }
    }

    /// Split text on whitespace and tokenize every chunk
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace()
            .flat_map(|chunk| self.tokenize_chunk(chunk))
            .collect()
    }
}
