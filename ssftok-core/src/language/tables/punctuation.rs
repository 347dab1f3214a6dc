//! Punctuation set used when merging orphan fragments

/// Quotation marks accepted on top of ASCII punctuation
const EXTRA_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Whether a token is a single ASCII punctuation mark or a quotation mark.
///
/// A candidate whose every token passes this check is appended to the
/// previous sentence instead of becoming a sentence of its own.
pub fn is_merge_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ch.is_ascii_punctuation() || EXTRA_QUOTES.contains(&ch),
        _ => false,
    }
}
