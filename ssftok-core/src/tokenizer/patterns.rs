//! Labeled special-token patterns
//!
//! Dates, e-mail addresses, URLs, bullets and extended punctuation each have
//! a labeled pattern here. [`Tokenizer`](super::Tokenizer) does not consult
//! this table: those inputs go through the regular cascade. Callers can use
//! [`SpecialPatterns::classify`] to label a token after the fact.

use regex::Regex;

use crate::error::Result;

/// `(label, pattern)` pairs, in priority order
pub const SPECIAL_PATTERN_TABLE: &[(&str, &str)] = &[
    (
        "datemonth",
        r"^(0?[1-9]|1[012])[-/.](0?[1-9]|[12][0-9]|3[01])[-/.](1|2)\d\d\d$",
    ),
    (
        "monthdate",
        r"^(0?[1-9]|[12][0-9]|3[01])[-/.](0?[1-9]|1[012])[-/.](1|2)\d\d\d$",
    ),
    (
        "yearmonth",
        r"^((1|2)\d\d\d)[-/.](0?[1-9]|1[012])[-/.](0?[1-9]|[12][0-9]|3[01])",
    ),
    ("email", r"([\w.])+@(\w)+\.(com|org|co\.in)$"),
    (
        "url",
        r"(https?://www\.|https?:\\\\www\.)(?:[-a-z0-9]+\.)*([-a-z0-9]+.*)",
    ),
    ("url_bare", r"(www\.)([-a-z0-9]+\.)*([-a-z0-9]+.*)(/[-a-z0-9]+)*"),
    ("bracket", r"[()\[\]{}]"),
    ("urdu_year", r"^(\x{0621})(\d{4})"),
    ("bullet", r"(\d+\.)$"),
    ("number", r"^(\d+)([,.\x{066B}\x{066C}]\d+)*(\w)*"),
    ("assign", r"[~:]"),
    ("end", r"[;!_]"),
    ("equal", r"="),
    ("operator", r"[+*/\-]"),
    ("fullstop", r"(\.+)$"),
    ("ellipsis", r"\.(\.)+"),
    ("hyphen", r"[-+|]"),
    ("slash", r"[\\/]"),
    ("comma", r"[,%]"),
    ("danda", r"\x{0964}"),
    ("urdu_stop", r"\x{06D4}"),
    ("urdu_comma", r"\x{060C}"),
    ("urdu_semicolon", r"\x{061B}"),
    ("urdu_question_mark", r"\x{061F}"),
    ("urdu_percent", r"\x{066A}"),
    ("quote_question", r"[\x{201D}?]"),
    ("hashtag", r"#"),
    ("join", r"\x{2013}"),
];

/// Compiled form of [`SPECIAL_PATTERN_TABLE`]
#[derive(Debug, Clone)]
pub struct SpecialPatterns {
    rules: Vec<(&'static str, Regex)>,
}

impl SpecialPatterns {
    /// Compile every pattern in the table
    pub fn new() -> Result<Self> {
        let rules = SPECIAL_PATTERN_TABLE
            .iter()
            .map(|&(label, pattern)| Ok((label, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Label of the first pattern matching anywhere in `token`
    pub fn classify(&self, token: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(token))
            .map(|(label, _)| *label)
    }

    /// Labels in priority order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(label, _)| *label)
    }
}
