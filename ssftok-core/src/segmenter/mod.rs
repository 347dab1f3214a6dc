//! Two-pass sentence segmentation
//!
//! The document is first split into coarse candidates (lines, and for the
//! Devanagari class also danda-terminated spans). Each candidate is then
//! tokenized and cut after every end-marker token. Finally, a candidate made
//! only of punctuation is glued onto the sentence emitted just before it.
//!
//! The merge pass is a single forward scan with a one-candidate lookahead
//! buffer. A consumed candidate is skipped and never examined again.

pub mod coarse;

use log::{debug, trace};

use crate::language::{is_merge_punctuation, EndMarkerSet, LanguageClass};
use crate::tokenizer::Tokenizer;

/// An ordered run of tokens forming one sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    /// Build a sentence from tokens
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    fn append<S: AsRef<str>>(&mut self, tokens: &[S]) {
        self.tokens
            .extend(tokens.iter().map(|t| t.as_ref().to_string()));
    }
}

/// Counters collected during one segmentation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    /// Non-blank input lines
    pub lines: usize,
    /// Candidates after coarse splitting
    pub candidates: usize,
    /// Candidates merged into their predecessor
    pub merges: usize,
    /// Total tokens across emitted sentences
    pub tokens: usize,
}

/// Sentences plus the counters that produced them
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    /// Emitted sentences, never empty
    pub sentences: Vec<Sentence>,
    /// Run counters
    pub stats: SegmentStats,
}

/// Splits documents into sentences for one language class
#[derive(Debug, Clone)]
pub struct SentenceSegmenter<'t> {
    tokenizer: &'t Tokenizer,
    class: LanguageClass,
    end_markers: EndMarkerSet,
    sentence_split: bool,
}

impl<'t> SentenceSegmenter<'t> {
    /// Create a segmenter with coarse sentence splitting enabled
    pub fn new(tokenizer: &'t Tokenizer, class: LanguageClass) -> Self {
        Self {
            tokenizer,
            class,
            end_markers: class.end_markers(),
            sentence_split: true,
        }
    }

    /// Enable or disable coarse splitting; when disabled every line is a
    /// candidate on its own
    pub fn with_sentence_split(mut self, enabled: bool) -> Self {
        self.sentence_split = enabled;
        self
    }

    /// Language class this segmenter applies
    pub fn class(&self) -> LanguageClass {
        self.class
    }

    /// Segment raw document text
    pub fn segment_text(&self, text: &str) -> Segmentation {
        self.segment(&coarse::raw_lines(text))
    }

    /// Segment already trimmed, non-blank lines
    pub fn segment(&self, lines: &[&str]) -> Segmentation {
        let blob;
        let candidates: Vec<&str> = if self.sentence_split {
            blob = coarse::join_lines(lines);
            coarse::split_candidates(&blob, self.class)
        } else {
            lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .collect()
        };

        debug!(
            "{} lines -> {} candidates ({})",
            lines.len(),
            candidates.len(),
            self.class
        );

        let mut stats = SegmentStats {
            lines: lines.len(),
            candidates: candidates.len(),
            ..SegmentStats::default()
        };
        let mut sentences = Vec::new();

        let mut index = 0;
        let mut current = candidates.first().map(|c| self.tokenizer.tokenize(c));

        while let Some(tokens) = current.take() {
            let next = candidates
                .get(index + 1)
                .map(|c| self.tokenizer.tokenize(c));
            let mut emitted = self.split_at_end_markers(&tokens);

            match (emitted.last_mut(), next) {
                (Some(last), Some(next_tokens)) if is_punctuation_only(&next_tokens) => {
                    trace!(
                        "merging candidate {} into sentence {:?}",
                        index + 1,
                        last.text()
                    );
                    last.append(&next_tokens);
                    stats.merges += 1;
                    index += 2;
                    current = candidates.get(index).map(|c| self.tokenizer.tokenize(c));
                }
                (_, next) => {
                    index += 1;
                    current = next;
                }
            }

            sentences.extend(emitted.into_iter().filter(|s| !s.is_empty()));
        }

        stats.tokens = sentences.iter().map(Sentence::len).sum();
        debug!(
            "emitted {} sentences, {} merges",
            sentences.len(),
            stats.merges
        );

        Segmentation { sentences, stats }
    }

    /// Cut a candidate's tokens after every end marker.
    ///
    /// Material after the last marker becomes a final sentence of its own.
    fn split_at_end_markers(&self, tokens: &[&str]) -> Vec<Sentence> {
        let mut ends: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| self.end_markers.is_end_marker(token))
            .map(|(i, _)| i + 1)
            .collect();

        if ends.is_empty() {
            return vec![Sentence::from_tokens(tokens)];
        }

        if ends.last() != Some(&tokens.len()) {
            ends.push(tokens.len());
        }

        let mut start = 0;
        ends.into_iter()
            .map(|end| {
                let sentence = Sentence::from_tokens(&tokens[start..end]);
                start = end;
                sentence
            })
            .collect()
    }
}

fn is_punctuation_only(tokens: &[&str]) -> bool {
    !tokens.is_empty() && tokens.iter().all(|token| is_merge_punctuation(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segmentation: &Segmentation) -> Vec<String> {
        segmentation.sentences.iter().map(Sentence::text).collect()
    }

    #[test]
    fn test_devanagari_two_sentences_on_one_line() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Devanagari);
        let result = seg.segment(&["राम गया। श्याम आया।"]);
        assert_eq!(texts(&result), vec!["राम गया ।", "श्याम आया ।"]);
    }

    #[test]
    fn test_punctuation_line_merges_into_previous() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["Hello world.", "\""]);
        assert_eq!(texts(&result), vec!["Hello world . \""]);
        assert_eq!(result.stats.merges, 1);
    }

    #[test]
    fn test_no_terminator_single_sentence() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["one two three"]);
        assert_eq!(texts(&result), vec!["one two three"]);
    }

    #[test]
    fn test_trailing_material_kept() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["Is it? yes it is"]);
        assert_eq!(texts(&result), vec!["Is it ?", "yes it is"]);
    }

    #[test]
    fn test_merge_reaches_only_one_step() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["Done.", "\"", ")"]);
        // The first fragment is consumed; the second is never re-examined
        assert_eq!(texts(&result), vec!["Done . \"", ")"]);
    }

    #[test]
    fn test_merge_after_danda_line() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Devanagari);
        let result = seg.segment(&["राम गया।", "”"]);
        assert_eq!(texts(&result), vec!["राम गया । ”"]);
    }

    #[test]
    fn test_leading_punctuation_line_stands_alone() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["--", "Hello"]);
        assert_eq!(texts(&result), vec!["- -", "Hello"]);
    }

    #[test]
    fn test_sentence_split_disabled_uses_lines() {
        let tk = Tokenizer::new().unwrap();
        let seg =
            SentenceSegmenter::new(&tk, LanguageClass::Devanagari).with_sentence_split(false);
        let result = seg.segment(&["राम गया। श्याम", "आया"]);
        // Token-level refinement still applies within a line
        assert_eq!(texts(&result), vec!["राम गया ।", "श्याम", "आया"]);
        assert_eq!(result.stats.candidates, 2);
    }

    #[test]
    fn test_segment_text_skips_blank_lines() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment_text("First one.\n\n\n\nSecond one.\n");
        assert_eq!(texts(&result), vec!["First one .", "Second one ."]);
        assert_eq!(result.stats.lines, 2);
    }

    #[test]
    fn test_empty_document() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Devanagari);
        let result = seg.segment_text("\n\n   \n");
        assert!(result.sentences.is_empty());
        assert_eq!(result.stats, SegmentStats::default());
    }

    #[test]
    fn test_arabic_script_refines_on_urdu_stop() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::ArabicScript);
        let result = seg.segment(&["ok۔ fine؟"]);
        assert_eq!(texts(&result), vec!["ok ۔", "fine ؟"]);
    }

    #[test]
    fn test_stats_count_tokens() {
        let tk = Tokenizer::new().unwrap();
        let seg = SentenceSegmenter::new(&tk, LanguageClass::Other);
        let result = seg.segment(&["a b. c", "!"]);
        assert_eq!(result.stats.tokens, 5);
    }
}
