//! Coarse splitting of a document into candidates

use crate::language::{LanguageClass, DANDA};

/// Trimmed, non-blank lines of a document, in order
pub fn raw_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Join lines into one newline-terminated blob
pub fn join_lines(lines: &[&str]) -> String {
    let mut blob = lines.join("\n");
    blob.push('\n');
    blob
}

/// Split a newline-terminated blob into trimmed candidates.
///
/// Every candidate ends at a line break, or for [`LanguageClass::Devanagari`]
/// at the first danda, whichever comes first. Blank pieces are dropped.
pub fn split_candidates(blob: &str, class: LanguageClass) -> Vec<&str> {
    let splits_on_danda = class.splits_on_danda();

    blob.split_inclusive(|ch: char| ch == '\n' || (splits_on_danda && ch == DANDA))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_lines_drop_blanks() {
        let lines = raw_lines("  one  \n\n\n\t\ntwo\r\n");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_join_lines_appends_newline() {
        assert_eq!(join_lines(&["a", "b"]), "a\nb\n");
        assert_eq!(join_lines(&[]), "\n");
    }

    #[test]
    fn test_devanagari_splits_on_danda_and_newline() {
        let blob = join_lines(&["राम गया। श्याम आया।", "वह"]);
        let candidates = split_candidates(&blob, LanguageClass::Devanagari);
        assert_eq!(candidates, vec!["राम गया।", "श्याम आया।", "वह"]);
    }

    #[test]
    fn test_other_splits_on_newline_only() {
        let blob = join_lines(&["राम गया। श्याम आया।", "Hello. World."]);
        let candidates = split_candidates(&blob, LanguageClass::Other);
        assert_eq!(candidates, vec!["राम गया। श्याम आया।", "Hello. World."]);
    }

    #[test]
    fn test_arabic_script_ignores_urdu_stop() {
        let blob = join_lines(&["وہ آیا۔ میں گیا۔"]);
        let candidates = split_candidates(&blob, LanguageClass::ArabicScript);
        assert_eq!(candidates, vec!["وہ آیا۔ میں گیا۔"]);
    }

    #[test]
    fn test_empty_blob() {
        assert!(split_candidates("\n", LanguageClass::Devanagari).is_empty());
    }
}
