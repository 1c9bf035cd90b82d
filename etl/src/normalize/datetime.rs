//! Fuzzy timestamp, date, and time-of-day parsing.
//!
//! Upstream exports mix ISO timestamps, US and day-first dates, dot-separated
//! times, and stray timezone suffixes in the same column. The parser
//! preprocesses the raw text into a dash-separated, offset-free form and then
//! trials a fixed list of formats, year-first before US before day-first.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::blank::is_blank_str;

/// Output format for every normalized timestamp column.
pub const CANONICAL_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Trial order is load-bearing: year-first wins over US month-first, which
/// wins over day-first, for inputs that parse under more than one.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%m-%d-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m-%d-%Y", "%d-%m-%Y"];

static TZ_COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+\-]\d{2}:\d{2}$").expect("offset regex must compile"));

/// Compact `+0700` style offsets. Only applied when the value carries a time,
/// otherwise the trailing year of a dashed date would match.
static TZ_COMPACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+\-]\d{4}$").expect("compact offset regex must compile"));

static DOT_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\.(\d{1,2})\.(\d{1,2})(\.\d{1,6})?")
        .expect("dot time regex must compile")
});

/// Rewrites raw timestamp text into the dash-separated form the format
/// trials expect. Returns `None` for blanks.
fn preprocess(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let mut text = value.trim().replace(['T', 't'], " ");
    if let Some(stripped) = text.strip_suffix('Z') {
        text = stripped.trim_end().to_string();
    }
    if let Some(found) = TZ_COLON_RE.find(&text) {
        let end = found.start();
        text = text[..end].trim_end().to_string();
    } else if text.contains(':') {
        if let Some(found) = TZ_COMPACT_RE.find(&text) {
            let end = found.start();
            text = text[..end].trim_end().to_string();
        }
    }
    let text = DOT_TIME_RE.replace_all(&text, "${1}:${2}:${3}${4}");
    Some(text.replace('/', "-").trim().to_string())
}

/// Parses raw timestamp text, trying datetime formats first and date-only
/// formats at midnight second. Unparseable input comes back as `None`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let text = preprocess(value)?;
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&text, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(&text, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parses and re-renders a timestamp column in [`CANONICAL_TIMESTAMP`] form.
pub fn normalize_timestamp(value: &str) -> Option<String> {
    parse_timestamp(value).map(|ts| ts.format(CANONICAL_TIMESTAMP).to_string())
}

/// Renders the date part of a parseable timestamp as `YYYYMMDD`.
///
/// Used by the surrogate guest id generator, where the key must be stable
/// across replays of the same row.
pub fn date_key(value: &str) -> Option<String> {
    parse_timestamp(value).map(|ts| ts.format("%Y%m%d").to_string())
}

/// Normalizes a time-of-day column to `HH:MM`.
///
/// Accepts `H:MM`, `HH:MM`, `HH:MM:SS` (seconds dropped), and compact
/// 4-digit `HHMM` once separators are removed.
pub fn normalize_time(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let trimmed = value.trim();
    for format in ["%H:%M:%S", "%H:%M"] {
        if let Ok(parsed) = NaiveTime::parse_from_str(trimmed, format) {
            return Some(parsed.format("%H:%M").to_string());
        }
    }
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 4 {
        if let Ok(parsed) = NaiveTime::parse_from_str(&digits, "%H%M") {
            return Some(parsed.format("%H:%M").to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamp_with_t_and_z() {
        assert_eq!(
            normalize_timestamp("2024-01-15T10:30:00Z"),
            Some("2024-01-15 10:30:00".to_string())
        );
    }

    #[test]
    fn lowercase_t_separator_is_accepted() {
        assert_eq!(
            normalize_timestamp("2024-01-15t10:30:00"),
            Some("2024-01-15 10:30:00".to_string())
        );
    }

    #[test]
    fn timezone_offsets_are_stripped() {
        assert_eq!(
            normalize_timestamp("2024-01-15 10:30:00+07:00"),
            Some("2024-01-15 10:30:00".to_string())
        );
        assert_eq!(
            normalize_timestamp("2024-01-15T10:30:00-0500"),
            Some("2024-01-15 10:30:00".to_string())
        );
    }

    #[test]
    fn date_only_gets_midnight() {
        assert_eq!(
            normalize_timestamp("2024-01-15"),
            Some("2024-01-15 00:00:00".to_string())
        );
    }

    #[test]
    fn us_date_parses_month_first() {
        assert_eq!(
            normalize_timestamp("01-15-2024"),
            Some("2024-01-15 00:00:00".to_string())
        );
    }

    #[test]
    fn day_first_date_with_slashes() {
        assert_eq!(
            normalize_timestamp("15/01/2024"),
            Some("2024-01-15 00:00:00".to_string())
        );
    }

    #[test]
    fn ambiguous_date_resolves_in_trial_order() {
        // 03-04-2024 parses under both US and day-first; US wins.
        assert_eq!(
            normalize_timestamp("03-04-2024"),
            Some("2024-03-04 00:00:00".to_string())
        );
    }

    #[test]
    fn dot_separated_time_is_rewritten() {
        assert_eq!(
            normalize_timestamp("2024-01-15 10.30.45"),
            Some("2024-01-15 10:30:45".to_string())
        );
    }

    #[test]
    fn fractional_seconds_are_accepted_and_dropped() {
        assert_eq!(
            normalize_timestamp("2024-01-15 10:30:45.123456"),
            Some("2024-01-15 10:30:45".to_string())
        );
    }

    #[test]
    fn unpadded_fields_parse() {
        assert_eq!(
            normalize_timestamp("2024-1-5 9:3:7"),
            Some("2024-01-05 09:03:07".to_string())
        );
    }

    #[test]
    fn garbage_and_blanks_are_none() {
        assert_eq!(normalize_timestamp("not a date"), None);
        assert_eq!(normalize_timestamp("null"), None);
        assert_eq!(normalize_timestamp(""), None);
        assert_eq!(normalize_timestamp("2024-13-45"), None);
    }

    #[test]
    fn compact_offset_does_not_eat_trailing_years() {
        assert_eq!(
            normalize_timestamp("15-01-2024"),
            Some("2024-01-15 00:00:00".to_string())
        );
    }

    #[test]
    fn date_key_renders_compact() {
        assert_eq!(date_key("2024-01-15T10:30:00Z"), Some("20240115".to_string()));
        assert_eq!(date_key("junk"), None);
    }

    #[test]
    fn time_of_day_forms() {
        assert_eq!(normalize_time("14:30"), Some("14:30".to_string()));
        assert_eq!(normalize_time("9:05"), Some("09:05".to_string()));
        assert_eq!(normalize_time("14:30:59"), Some("14:30".to_string()));
        assert_eq!(normalize_time("1430"), Some("14:30".to_string()));
        assert_eq!(normalize_time("25:00"), None);
        assert_eq!(normalize_time("nan"), None);
    }
}
