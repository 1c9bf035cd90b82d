//! Guest profile row cleaning.

use crate::cleaners::surrogate;
use crate::normalize::blank::{clean_text, is_blank_str, strip_dot_zero, trimmed};
use crate::normalize::datetime::normalize_timestamp;
use crate::normalize::name::clean_name;
use crate::normalize::phone::normalize_phone;
use crate::normalize::vocab::{clean_occupation, clean_segment, clean_sex};
use crate::types::{ProfileGuestRecord, ProfileGuestRow, Scalar, to_text};

/// Cleans a raw guest profile row.
///
/// A profile is only useful when it names somebody; rows whose name is blank
/// after cleaning are dropped.
pub fn clean(row: ProfileGuestRow) -> Option<ProfileGuestRecord> {
    let name = to_text(&row.name).as_deref().and_then(clean_name)?;

    let mobile_no = trimmed(to_text(&row.mobile_no));
    let phone_raw = trimmed(to_text(&row.phone));
    let preferred_phone = match &mobile_no {
        Some(mobile) if !is_blank_str(mobile) => Some(mobile.clone()),
        _ => phone_raw,
    };
    let phone = preferred_phone.as_deref().and_then(normalize_phone);

    let email = cleaned_email(&row.email);

    let existing_guest_id = to_text(&row.guest_id)
        .map(|id| strip_dot_zero(id.trim()).to_string())
        .filter(|id| !is_blank_str(id));
    let guest_id = match existing_guest_id {
        Some(id) => id,
        None => surrogate::profile_guest_id(
            Some(&name),
            phone.as_deref(),
            email.as_deref(),
            row.id,
            row.csv_upload_id,
        ),
    };

    let credit_limit = to_text(&row.credit_limit)
        .map(|limit| limit.trim().to_string())
        .filter(|limit| !is_blank_str(limit))
        .unwrap_or_else(|| "0".to_string());

    Some(ProfileGuestRecord {
        id: row.id,
        csv_upload_id: row.csv_upload_id,
        guest_id,
        name,
        email,
        phone,
        address: clean_text(to_text(&row.address).as_deref(), true),
        birth_date: normalized_timestamp(&row.birth_date),
        occupation: to_text(&row.occupation).as_deref().and_then(clean_occupation),
        city: clean_text(to_text(&row.city).as_deref(), false),
        country: trimmed(to_text(&row.country)),
        segment: to_text(&row.segment).as_deref().and_then(clean_segment),
        type_id: trimmed(to_text(&row.type_id)),
        id_no: trimmed(to_text(&row.id_no)),
        sex: to_text(&row.sex).as_deref().and_then(clean_sex),
        zip_code: trimmed(to_text(&row.zip_code)),
        local_region: trimmed(to_text(&row.local_region)),
        telefax: to_text(&row.telefax).map(|fax| fax.chars().filter(char::is_ascii_digit).collect()),
        mobile_no,
        comments: trimmed(to_text(&row.comments)),
        credit_limit,
        created_at: normalized_timestamp(&row.created_at),
        deleted_at: normalized_timestamp(&row.deleted_at),
    })
}

fn cleaned_email(value: &Option<Scalar>) -> Option<String> {
    clean_text(to_text(value).as_deref(), false).map(|email| email.to_lowercase())
}

fn normalized_timestamp(value: &Option<Scalar>) -> Option<String> {
    to_text(value).as_deref().and_then(normalize_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_row() -> ProfileGuestRow {
        ProfileGuestRow {
            id: Some(9),
            csv_upload_id: Some(2),
            name: Some(Scalar::Text("Smith, John".to_string())),
            ..ProfileGuestRow::default()
        }
    }

    #[test]
    fn nameless_rows_are_dropped() {
        let mut row = named_row();
        row.name = Some(Scalar::Text("  null ".to_string()));
        assert!(clean(row).is_none());

        let mut row = named_row();
        row.name = Some(Scalar::Text("Mr.".to_string()));
        assert!(clean(row).is_none());
    }

    #[test]
    fn name_is_cleaned_and_reordered() {
        let record = clean(named_row()).unwrap();
        assert_eq!(record.name, "John Smith");
    }

    #[test]
    fn mobile_no_wins_over_phone() {
        let mut row = named_row();
        row.phone = Some(Scalar::Text("0274-555123".to_string()));
        row.mobile_no = Some(Scalar::Text("0812 3456 789".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.phone, Some("628123456789".to_string()));
        assert_eq!(record.mobile_no, Some("0812 3456 789".to_string()));
    }

    #[test]
    fn phone_is_used_when_mobile_is_blank() {
        let mut row = named_row();
        row.phone = Some(Scalar::Text("0274555123".to_string()));
        row.mobile_no = Some(Scalar::Text(" nan ".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.phone, Some("62274555123".to_string()));
    }

    #[test]
    fn surrogate_id_prefers_phone_then_email() {
        let mut row = named_row();
        row.mobile_no = Some(Scalar::Text("08123".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.guest_id, "John_Smith_628123");

        let mut row = named_row();
        row.email = Some(Scalar::Text("John@Example.com".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.guest_id, "John_Smith_john_example_com");

        let record = clean(named_row()).unwrap();
        assert_eq!(record.guest_id, "John_Smith_9");
    }

    #[test]
    fn existing_guest_id_is_preserved() {
        let mut row = named_row();
        row.guest_id = Some(Scalar::Text("G-42.0".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.guest_id, "G-42");
    }

    #[test]
    fn vocabulary_columns_are_normalized() {
        let mut row = named_row();
        row.occupation = Some(Scalar::Text("irt".to_string()));
        row.segment = Some(Scalar::Text("compl".to_string()));
        row.sex = Some(Scalar::Text("female".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.occupation, Some("IBU RUMAH TANGGA".to_string()));
        assert_eq!(record.segment, Some("COMP".to_string()));
        assert_eq!(record.sex, Some("F".to_string()));
    }

    #[test]
    fn credit_limit_defaults_to_zero() {
        let record = clean(named_row()).unwrap();
        assert_eq!(record.credit_limit, "0");

        let mut row = named_row();
        row.credit_limit = Some(Scalar::Text(" 5000000 ".to_string()));
        assert_eq!(clean(row).unwrap().credit_limit, "5000000");
    }

    #[test]
    fn telefax_keeps_digits_only() {
        let mut row = named_row();
        row.telefax = Some(Scalar::Text("(0274) 555-123".to_string()));
        assert_eq!(clean(row).unwrap().telefax, Some("0274555123".to_string()));
    }

    #[test]
    fn address_is_uppercased_city_is_not() {
        let mut row = named_row();
        row.address = Some(Scalar::Text(" Jl. Malioboro 52 ".to_string()));
        row.city = Some(Scalar::Text(" Yogyakarta ".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.address, Some("JL. MALIOBORO 52".to_string()));
        assert_eq!(record.city, Some("Yogyakarta".to_string()));
    }
}
