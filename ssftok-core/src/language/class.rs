//! Language class selection from ISO 639-1 codes

use std::fmt;
use std::str::FromStr;

use super::tables::EndMarkerSet;
use crate::error::Error;

/// Language code used when none is given
pub const DEFAULT_LANGUAGE_CODE: &str = "hi";

const DEVANAGARI_CODES: &[&str] = &["hi", "or", "mn", "as", "bn", "pa"];
const ARABIC_SCRIPT_CODES: &[&str] = &["ur", "ks"];
const OTHER_CODES: &[&str] = &["en", "gu", "mr", "ml", "kn", "te", "ta"];

/// Devanagari/Bengali full stop (danda)
pub(crate) const DANDA: char = '\u{0964}';

/// Coarse grouping of languages sharing segmentation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageClass {
    /// Languages whose sentences end with the danda
    #[default]
    Devanagari,
    /// Urdu and Kashmiri
    ArabicScript,
    /// Everything else we support, terminated by Latin punctuation
    Other,
}

impl LanguageClass {
    /// All classes, in table order
    pub const ALL: [LanguageClass; 3] = [
        LanguageClass::Devanagari,
        LanguageClass::ArabicScript,
        LanguageClass::Other,
    ];

    /// Resolve a language code to its class
    pub fn from_code(code: &str) -> Result<Self, Error> {
        let normalized = code.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|class| class.codes().contains(&normalized.as_str()))
            .ok_or_else(|| Error::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    /// Language codes mapped to this class
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            LanguageClass::Devanagari => DEVANAGARI_CODES,
            LanguageClass::ArabicScript => ARABIC_SCRIPT_CODES,
            LanguageClass::Other => OTHER_CODES,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageClass::Devanagari => "Devanagari-family",
            LanguageClass::ArabicScript => "Arabic-script-family",
            LanguageClass::Other => "Other",
        }
    }

    /// Characters that terminate a sentence at the token level
    pub fn end_marker_chars(&self) -> &'static [char] {
        match self {
            LanguageClass::Devanagari => &['?', DANDA, '!', '|'],
            LanguageClass::ArabicScript => &['\u{061F}', '!', '|', '\u{06D4}'],
            LanguageClass::Other => &['?', '.', '!', '|'],
        }
    }

    /// Build the end-marker lookup for this class
    pub fn end_markers(&self) -> EndMarkerSet {
        EndMarkerSet::new(self.end_marker_chars().iter().copied())
    }

    /// Whether coarse splitting also breaks after a danda
    pub fn splits_on_danda(&self) -> bool {
        matches!(self, LanguageClass::Devanagari)
    }
}

impl FromStr for LanguageClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for LanguageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
