//! Blank detection and baseline text cleanup.
//!
//! Upstream CSV ingestion leaves a zoo of "missing" spellings behind. Every
//! cleaner funnels text columns through here first so that a blank means the
//! same thing everywhere: `None`.

/// Textual spellings of "missing" produced by the CSV ingestion path.
///
/// Matched case-insensitively against the trimmed value.
pub const BLANK_TOKENS: &[&str] = &["NAN", "NONE", "NULL", "NA", "N A", "N/A"];

/// Returns true when the trimmed value is empty or a known blank token.
pub fn is_blank_str(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || BLANK_TOKENS.contains(&trimmed.to_uppercase().as_str())
}

/// Returns true for absent values and for blank-token text.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(is_blank_str)
}

/// Returns true when the trimmed value contains no letters or digits.
///
/// Underscores count as punctuation. The empty string is not
/// punctuation-only; it is blank.
pub fn is_punctuation_only(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| !c.is_alphanumeric())
}

/// Trims a value and collapses blanks and punctuation-only noise to `None`.
///
/// With `uppercase` set the surviving text is upper-cased, which is how
/// code-like columns (segments, vip status, room types) are stored.
pub fn clean_text(value: Option<&str>, uppercase: bool) -> Option<String> {
    let trimmed = value?.trim();
    if is_blank_str(trimmed) || is_punctuation_only(trimmed) {
        return None;
    }
    if uppercase {
        Some(trimmed.to_uppercase())
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims a value without blanking it.
///
/// Used for passthrough columns whose content is kept verbatim.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Drops a trailing `.0` left behind when a numeric identifier column went
/// through a float representation upstream.
pub fn strip_dot_zero(value: &str) -> &str {
    value.strip_suffix(".0").unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_match_case_insensitively() {
        for token in ["nan", "NaN", "NONE", "null", "na", "n a", "N/A", "", "   "] {
            assert!(is_blank_str(token), "{token:?} should be blank");
        }
    }

    #[test]
    fn real_values_are_not_blank() {
        for value in ["John", "0", "NANCY", "N/A CORP"] {
            assert!(!is_blank_str(value), "{value:?} should not be blank");
        }
    }

    #[test]
    fn missing_values_are_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(" null ")));
        assert!(!is_blank(Some("DLX")));
    }

    #[test]
    fn punctuation_only_values_are_detected() {
        assert!(is_punctuation_only("---"));
        assert!(is_punctuation_only(" ??!! "));
        assert!(is_punctuation_only("_"));
        assert!(!is_punctuation_only("a-b"));
        assert!(!is_punctuation_only(""));
    }

    #[test]
    fn clean_text_trims_and_blanks() {
        assert_eq!(clean_text(Some("  Deluxe  "), false), Some("Deluxe".to_string()));
        assert_eq!(clean_text(Some("  Deluxe  "), true), Some("DELUXE".to_string()));
        assert_eq!(clean_text(Some("null"), false), None);
        assert_eq!(clean_text(Some("***"), false), None);
        assert_eq!(clean_text(None, false), None);
    }

    #[test]
    fn dot_zero_suffix_is_stripped_once() {
        assert_eq!(strip_dot_zero("12345.0"), "12345");
        assert_eq!(strip_dot_zero("12345"), "12345");
        assert_eq!(strip_dot_zero("12.50"), "12.50");
        assert_eq!(strip_dot_zero("1.0.0"), "1.0");
    }
}
