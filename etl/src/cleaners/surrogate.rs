//! Deterministic surrogate guest identifiers.
//!
//! When a row arrives without a usable `guest_id`, the cleaners derive one
//! from whatever identifying fields the row does carry, in a fixed priority
//! order. The derivation uses only row content, so replaying the same row
//! after a crash regenerates the same identifier.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::blank::is_blank_str;

/// Generated identifiers are capped at this many characters.
pub const MAX_GUEST_ID_LEN: usize = 50;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("non-word regex must compile"));

static UNDERSCORE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore run regex must compile"));

static SPACE_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \-]+").expect("space dash regex must compile"));

static EMAIL_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ .@]+").expect("email separator regex must compile"));

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("space run regex must compile"));

/// Joins the present, non-blank parts with underscores.
fn join_parts(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .copied()
        .flatten()
        .filter(|part| !is_blank_str(part))
        .collect::<Vec<_>>()
        .join("_")
}

fn truncate(value: String) -> String {
    if value.chars().count() <= MAX_GUEST_ID_LEN {
        value
    } else {
        value.chars().take(MAX_GUEST_ID_LEN).collect()
    }
}

/// Collapses every non-word run to a single underscore and upper-cases, the
/// slug form used by reservation candidates.
fn slug(value: &str) -> String {
    let replaced = NON_WORD_RE.replace_all(value, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&replaced, "_");
    collapsed.trim().to_uppercase()
}

/// The shared last-resort candidate: `GUEST_{batch}_{row}`.
fn guest_row_candidate(csv_upload_id: Option<i64>, row_id: Option<i64>) -> String {
    let csv = csv_upload_id.map(|v| v.to_string());
    let row = row_id.map(|v| v.to_string());
    join_parts(&[Some("GUEST"), csv.as_deref(), row.as_deref()])
}

/// Surrogate identifier for a reservation row without a source `guest_id`.
///
/// Priority: name + room + arrival date key, then name + arrival key + row
/// id, then the `GUEST_{batch}_{row}` fallback. The first two are slugged
/// and truncated.
pub fn reservation_guest_id(
    guest_name: Option<&str>,
    room_number: Option<&str>,
    arrival_key: Option<&str>,
    row_id: Option<i64>,
    csv_upload_id: Option<i64>,
) -> String {
    let name = guest_name.filter(|n| !is_blank_str(n));
    let room = room_number.filter(|r| !is_blank_str(r));
    let key = arrival_key.filter(|k| !is_blank_str(k));

    if let (Some(name), Some(room), Some(key)) = (name, room, key) {
        return truncate(slug(&join_parts(&[Some(name), Some(room), Some(key)])));
    }
    if let Some(name) = name {
        let row = row_id.map(|v| v.to_string());
        return truncate(slug(&join_parts(&[Some(name), key, row.as_deref()])));
    }
    guest_row_candidate(csv_upload_id, row_id)
}

/// Surrogate identifier for a guest profile row without a source `guest_id`.
///
/// Priority: name + phone, then name + email, then name + row id, then the
/// `GUEST_{batch}_{row}` fallback. Each candidate collapses its own
/// separator set and is truncated.
pub fn profile_guest_id(
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    row_id: Option<i64>,
    csv_upload_id: Option<i64>,
) -> String {
    let name = name.filter(|n| !is_blank_str(n));
    let phone = phone.filter(|p| !is_blank_str(p));
    let email = email.filter(|e| !is_blank_str(e));
    let row = row_id.map(|v| v.to_string());

    if let (Some(name), Some(phone)) = (name, phone) {
        let bare_phone = phone.replace('+', "");
        let base = join_parts(&[Some(name), Some(bare_phone.as_str())]);
        return truncate(SPACE_DASH_RE.replace_all(&base, "_").to_string());
    }
    if let (Some(name), Some(email)) = (name, email) {
        let base = join_parts(&[Some(name), Some(email)]);
        return truncate(EMAIL_SEP_RE.replace_all(&base, "_").to_string());
    }
    if let Some(name) = name {
        let base = join_parts(&[Some(name), row.as_deref()]);
        return truncate(SPACE_RUN_RE.replace_all(&base, "_").to_string());
    }
    truncate(guest_row_candidate(csv_upload_id, row_id))
}
