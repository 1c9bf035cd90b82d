//! Phone number normalization for guest contact columns and chat identifiers.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::blank::is_blank_str;

/// Country calling code applied when a trunk-prefixed local number shows up.
pub const COUNTRY_CALLING_CODE: &str = "62";

static PHONE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d+$").expect("phone shape regex must compile"));

/// Normalizes a contact phone number to digits only.
///
/// Everything that is not an ASCII digit is dropped. A single leading trunk
/// `0` is replaced with [`COUNTRY_CALLING_CODE`]; numbers already carrying
/// the calling code, and foreign numbers, pass through unchanged. Blank or
/// digit-free input comes back as `None`.
pub fn normalize_phone(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.strip_prefix('0') {
        Some(rest) if !rest.starts_with('0') => Some(format!("{COUNTRY_CALLING_CODE}{rest}")),
        _ => Some(digits),
    }
}

/// Removes the separators tolerated in phone-shaped identifiers.
pub fn compact_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect()
}

/// Returns true when a compacted identifier looks like a phone number: an
/// optional `+` followed by digits only.
pub fn is_phone_shaped(value: &str) -> bool {
    PHONE_SHAPE_RE.is_match(value)
}

/// Strips one leading trunk `0` from a chat identifier, keeping a bare `"0"`
/// intact.
pub fn strip_trunk_zero(value: &str) -> &str {
    if value == "0" {
        return value;
    }
    value.strip_prefix('0').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_zero_becomes_calling_code() {
        assert_eq!(normalize_phone("0812-3456-789"), Some("628123456789".to_string()));
        assert_eq!(normalize_phone("0812 3456 789"), Some("628123456789".to_string()));
    }

    #[test]
    fn existing_calling_code_is_kept() {
        assert_eq!(normalize_phone("+62 812 3456 789"), Some("628123456789".to_string()));
        assert_eq!(normalize_phone("628123456789"), Some("628123456789".to_string()));
    }

    #[test]
    fn foreign_numbers_pass_through() {
        assert_eq!(normalize_phone("+44 20 7946 0958"), Some("442079460958".to_string()));
    }

    #[test]
    fn blanks_and_garbage_become_none() {
        assert_eq!(normalize_phone("  "), None);
        assert_eq!(normalize_phone("null"), None);
        assert_eq!(normalize_phone("call me"), None);
    }

    #[test]
    fn phone_shape_accepts_plus_and_digits_only() {
        assert!(is_phone_shaped("+628123456789"));
        assert!(is_phone_shaped("08123456789"));
        assert!(!is_phone_shaped("group-chat-42"));
        assert!(!is_phone_shaped("+62 81"));
        assert!(!is_phone_shaped(""));
    }

    #[test]
    fn compact_removes_separators_only() {
        assert_eq!(compact_phone("+62 (812) 3456-789"), "+628123456789");
        assert_eq!(compact_phone("kitchen staff"), "kitchenstaff");
    }

    #[test]
    fn trunk_zero_strip_keeps_bare_zero() {
        assert_eq!(strip_trunk_zero("08123"), "8123");
        assert_eq!(strip_trunk_zero("0"), "0");
        assert_eq!(strip_trunk_zero("628123"), "628123");
    }
}
