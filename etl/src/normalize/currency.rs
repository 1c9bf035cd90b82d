//! Currency and count parsing for monetary and occupancy columns.

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

use crate::normalize::blank::is_blank_str;
use crate::types::Scalar;

/// Parses a currency amount into a 2-decimal-place string.
///
/// Thousands separators are dropped, a parenthesized amount is negative, and
/// anything that still fails to parse as a decimal comes back as `None`.
/// Rounding is half-up on the second decimal place.
pub fn normalize_currency(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let compact: String = value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')'))
        .collect();
    let negative = compact.starts_with('(') && compact.ends_with(')');
    let digits: String = compact.chars().filter(|c| *c != '(' && *c != ')').collect();
    if digits.is_empty() {
        return None;
    }
    let mut amount = BigDecimal::from_str(&digits).ok()?;
    if negative {
        amount = -amount;
    }
    Some(amount.with_scale_round(2, RoundingMode::HalfUp).to_string())
}

/// Parses an occupancy or night count, defaulting to 0.
///
/// Numeric scalars truncate toward zero; textual values must be plain
/// integers to count.
pub fn parse_count(value: Option<&Scalar>) -> i64 {
    match value {
        Some(Scalar::Int(count)) => *count,
        Some(Scalar::Float(count)) => count.trunc() as i64,
        Some(Scalar::Bool(flag)) => i64::from(*flag),
        Some(Scalar::Text(text)) => text.trim().parse().unwrap_or(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_amounts_get_two_decimals() {
        assert_eq!(normalize_currency("1500"), Some("1500.00".to_string()));
        assert_eq!(normalize_currency("107.5"), Some("107.50".to_string()));
        assert_eq!(normalize_currency("99.999"), Some("100.00".to_string()));
    }

    #[test]
    fn thousands_separators_are_dropped() {
        assert_eq!(normalize_currency("1,500,000.25"), Some("1500000.25".to_string()));
    }

    #[test]
    fn currency_symbols_are_ignored() {
        assert_eq!(normalize_currency("Rp 2.500"), Some("2.50".to_string()));
        assert_eq!(normalize_currency("$ 120.00"), Some("120.00".to_string()));
    }

    #[test]
    fn parenthesized_amounts_are_negative() {
        assert_eq!(normalize_currency("(500)"), Some("-500.00".to_string()));
        assert_eq!(normalize_currency("(1,250.75)"), Some("-1250.75".to_string()));
    }

    #[test]
    fn unparseable_amounts_are_none() {
        assert_eq!(normalize_currency("free"), None);
        assert_eq!(normalize_currency("1.2.3"), None);
        assert_eq!(normalize_currency("null"), None);
        assert_eq!(normalize_currency("-"), None);
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some(&Scalar::Text("abc".to_string()))), 0);
        assert_eq!(parse_count(Some(&Scalar::Text("12.5".to_string()))), 0);
    }

    #[test]
    fn counts_parse_numeric_forms() {
        assert_eq!(parse_count(Some(&Scalar::Int(3))), 3);
        assert_eq!(parse_count(Some(&Scalar::Float(2.9))), 2);
        assert_eq!(parse_count(Some(&Scalar::Text(" 4 ".to_string()))), 4);
    }
}
