//! Reservation row cleaning.

use crate::cleaners::surrogate;
use crate::normalize::blank::{is_blank, is_blank_str, is_punctuation_only, strip_dot_zero};
use crate::normalize::currency::{normalize_currency, parse_count};
use crate::normalize::datetime::{date_key, normalize_time, normalize_timestamp};
use crate::normalize::phone::normalize_phone;
use crate::types::{ReservationRecord, ReservationRow, Scalar, to_text};

/// Cleans a raw reservation row.
///
/// Rows without an arrival date, departure date, or room number carry no
/// usable stay and are dropped.
pub fn clean(row: ReservationRow) -> Option<ReservationRecord> {
    let arrival_raw = to_text(&row.arrival_date);
    let depart_raw = to_text(&row.depart_date);
    let room_raw = to_text(&row.room_number);
    if is_blank(arrival_raw.as_deref())
        || is_blank(depart_raw.as_deref())
        || is_blank(room_raw.as_deref())
    {
        return None;
    }

    let first_name = to_text(&row.first_name);
    let last_name = to_text(&row.last_name);
    let guest_name = compose_guest_name(first_name.as_deref(), last_name.as_deref());
    let room_number = room_raw.map(|room| room.trim().to_string());

    let existing_guest_id = to_text(&row.guest_id)
        .map(|id| strip_dot_zero(id.trim()).to_string())
        .filter(|id| !is_blank_str(id));
    let guest_id = match existing_guest_id {
        Some(id) => id,
        None => surrogate::reservation_guest_id(
            guest_name.as_deref(),
            room_number.as_deref(),
            arrival_raw.as_deref().and_then(date_key).as_deref(),
            row.id,
            row.csv_upload_id,
        ),
    };

    Some(ReservationRecord {
        id: row.id,
        csv_upload_id: row.csv_upload_id,
        reservation_id: row.reservation_id,
        guest_id,
        first_name,
        last_name,
        guest_name,
        room_number,
        room_type: uppercased(&row.room_type),
        arrangement: to_text(&row.arrangement),
        in_house_date: to_text(&row.in_house_date),
        arrival_date: arrival_raw.as_deref().and_then(normalize_timestamp),
        depart_date: depart_raw.as_deref().and_then(normalize_timestamp),
        check_in_time: normalized(&row.check_in_time, normalize_time),
        check_out_time: normalized(&row.check_out_time, normalize_time),
        created_date: to_text(&row.created_date),
        birth_date: to_text(&row.birth_date),
        age: parse_count(row.age.as_ref()),
        member_no: to_text(&row.member_no),
        member_type: to_text(&row.member_type),
        email: cleaned_email(&row.email),
        mobile_phone: normalized(&row.mobile_phone, normalize_phone),
        vip_status: to_text(&row.vip_status),
        room_rate: normalized(&row.room_rate, normalize_currency),
        lodging: normalized(&row.lodging, normalize_currency),
        breakfast: normalized(&row.breakfast, normalize_currency),
        lunch: normalized(&row.lunch, normalize_currency),
        dinner: normalized(&row.dinner, normalize_currency),
        other_charges: normalized(&row.other_charges, normalize_currency),
        bill_number: to_text(&row.bill_number).map(|bill| strip_dot_zero(&bill).to_string()),
        pay_article: to_text(&row.pay_article),
        rate_code: to_text(&row.rate_code),
        adult_count: parse_count(row.adult_count.as_ref()),
        child_count: parse_count(row.child_count.as_ref()),
        compliment: to_text(&row.compliment),
        nationality: to_text(&row.nationality),
        local_region: to_text(&row.local_region),
        company_ta: to_text(&row.company_ta),
        sob: to_text(&row.sob),
        nights: parse_count(row.nights.as_ref()),
        segment: uppercased(&row.segment),
        created_by: to_text(&row.created_by),
        k_card: to_text(&row.k_card),
        remarks: cleaned_remarks(&row.remarks),
        created_at: normalized(&row.created_at, normalize_timestamp),
        deleted_at: normalized(&row.deleted_at, normalize_timestamp),
    })
}

/// Joins first and last name into the uppercased display name.
fn compose_guest_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let joined = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !is_blank_str(part))
        .collect::<Vec<_>>()
        .join(" ");
    let upper = joined.trim().to_uppercase();
    if is_blank_str(&upper) { None } else { Some(upper) }
}

fn uppercased(value: &Option<Scalar>) -> Option<String> {
    to_text(value).map(|v| v.trim().to_uppercase())
}

fn cleaned_email(value: &Option<Scalar>) -> Option<String> {
    to_text(value)
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !is_blank_str(email))
}

/// Applies a `&str -> Option<String>` normalizer to an optional scalar.
fn normalized<F>(value: &Option<Scalar>, normalizer: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    to_text(value).as_deref().and_then(normalizer)
}

/// Remarks keep their column but sentinel and punctuation-only noise is
/// rewritten to the empty string.
fn cleaned_remarks(value: &Option<Scalar>) -> Option<String> {
    to_text(value).map(|remarks| {
        if is_blank_str(&remarks) || is_punctuation_only(&remarks) {
            String::new()
        } else {
            remarks.trim().to_string()
        }
    })
}
