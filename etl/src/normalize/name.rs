//! Person name cleanup: honorific stripping and `Last, First` reordering.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::blank::is_blank_str;

/// Honorific titles removed from guest names, with an optional trailing dot
/// and comma. `BPK` is the Indonesian `Bapak`.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(MR|MRS|MS|MISS|DR|PROF|SIR|MADAM|BPK)\b\.?,?\s*")
        .expect("title regex must compile")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex must compile"));

/// Normalizes a person name.
///
/// Strips honorific titles, reorders a single `Last, First` comma pair to
/// `First Last`, and collapses runs of whitespace. Names that are blank, or
/// that consist only of titles, come back as `None`. The function is
/// idempotent, so replaying an already-cleaned record leaves it untouched.
pub fn clean_name(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let stripped = TITLE_RE.replace_all(value, "");

    let parts: Vec<&str> = stripped.split(',').collect();
    let reordered = match parts.as_slice() {
        [last, first] => format!("{} {}", first.trim(), last.trim()),
        _ => stripped.trim().to_string(),
    };

    let collapsed = WHITESPACE_RE.replace_all(reordered.trim(), " ").to_string();
    if is_blank_str(&collapsed) {
        None
    } else {
        Some(collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_titles() {
        assert_eq!(clean_name("Mr. John Smith"), Some("John Smith".to_string()));
        assert_eq!(clean_name("MRS JANE DOE"), Some("JANE DOE".to_string()));
        assert_eq!(clean_name("Bpk. Budi Santoso"), Some("Budi Santoso".to_string()));
    }

    #[test]
    fn reorders_last_comma_first() {
        assert_eq!(clean_name("Smith, John"), Some("John Smith".to_string()));
        assert_eq!(clean_name("Mr. Smith, John"), Some("John Smith".to_string()));
    }

    #[test]
    fn multiple_commas_are_left_in_order() {
        assert_eq!(clean_name("Smith, John, Jr"), Some("Smith, John, Jr".to_string()));
    }

    #[test]
    fn title_words_inside_names_survive() {
        assert_eq!(clean_name("Missy Elliott"), Some("Missy Elliott".to_string()));
        assert_eq!(clean_name("Drew Barry"), Some("Drew Barry".to_string()));
    }

    #[test]
    fn title_only_names_become_none() {
        assert_eq!(clean_name("Mr."), None);
        assert_eq!(clean_name("  "), None);
        assert_eq!(clean_name("null"), None);
    }

    #[test]
    fn idempotent_on_cleaned_output() {
        let once = clean_name("Dr. Smith,  John").unwrap();
        assert_eq!(clean_name(&once), Some(once.clone()));
    }
}
