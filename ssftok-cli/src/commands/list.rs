//! List command implementation

use anyhow::Result;
use ssftok_core::{LanguageClass, SpecialPatterns, DEFAULT_LANGUAGE_CODE};

/// Print every supported language code grouped by class
pub fn languages() -> Result<()> {
    for line in language_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Print the labels of the special-token pattern table
pub fn patterns() -> Result<()> {
    let patterns = SpecialPatterns::new()?;

    println!("Special-token patterns (informational, not applied by the tokenizer):");
    for label in patterns.labels() {
        println!("  {label}");
    }
    Ok(())
}

fn language_lines() -> Vec<String> {
    LanguageClass::ALL
        .iter()
        .map(|class| {
            let markers: Vec<String> = class
                .end_marker_chars()
                .iter()
                .map(char::to_string)
                .collect();
            let codes: Vec<String> = class
                .codes()
                .iter()
                .map(|code| {
                    if *code == DEFAULT_LANGUAGE_CODE {
                        format!("{code} (default)")
                    } else {
                        code.to_string()
                    }
                })
                .collect();

            format!(
                "{}: {}  [end markers: {}]",
                class.name(),
                codes.join(", "),
                markers.join(" ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_lines() {
        let lines = language_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Devanagari-family: hi (default), or"));
        assert!(lines[0].contains("।"));
        assert!(lines[1].contains("ur, ks"));
        assert!(lines[2].contains("en, gu, mr, ml, kn, te, ta"));
    }
}
