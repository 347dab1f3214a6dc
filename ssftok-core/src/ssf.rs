//! SSF block serialization
//!
//! ```text
//! <Sentence id='1'>
//! 1	राम	unk
//! 2	गया	unk
//! 3	।	unk
//! </Sentence>
//! ```

use std::fmt::Write;

use crate::segmenter::Sentence;

/// Tag written in the third column of every token line
pub const PLACEHOLDER_TAG: &str = "unk";

/// Append one `<Sentence>` block, newline-terminated, to `out`.
///
/// `id` is the 1-based position of the sentence in the document.
pub fn write_block(out: &mut String, id: usize, sentence: &Sentence) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "<Sentence id='{id}'>");
    for (index, token) in sentence.tokens().iter().enumerate() {
        let _ = writeln!(out, "{}\t{}\t{}", index + 1, token, PLACEHOLDER_TAG);
    }
    out.push_str("</Sentence>\n");
}

/// Render sentences as consecutive SSF blocks numbered from 1.
///
/// Empty sentences are skipped without consuming an id. An empty slice
/// renders as the empty string.
pub fn to_ssf(sentences: &[Sentence]) -> String {
    let mut out = String::new();
    for (index, sentence) in sentences.iter().filter(|s| !s.is_empty()).enumerate() {
        write_block(&mut out, index + 1, sentence);
    }
    out
}
