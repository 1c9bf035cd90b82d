//! WhatsApp chat row cleaning.
//!
//! The chat capture mixes real guest conversations with group chats and
//! staff channels whose identifiers are free text. Only rows whose
//! identifier looks like a phone number make it through.

use crate::normalize::blank::is_blank_str;
use crate::normalize::datetime::normalize_timestamp;
use crate::normalize::phone::{compact_phone, is_phone_shaped, strip_trunk_zero};
use crate::types::{ChatWhatsappRecord, ChatWhatsappRow, Scalar, to_text};

/// Cleans a raw chat row.
///
/// Tabs are stripped and fields trimmed first; rows with a blank message or
/// message type, or a non-phone-shaped identifier, are dropped.
pub fn clean(row: ChatWhatsappRow) -> Option<ChatWhatsappRecord> {
    let message_type = detabbed(&row.message_type).filter(|t| !is_blank_str(t))?;
    let message = detabbed(&row.message).filter(|m| !is_blank_str(m))?;

    let compact = compact_phone(&detabbed(&row.phone_number)?);
    if !is_phone_shaped(&compact) {
        return None;
    }
    let phone_number = strip_trunk_zero(&compact).to_string();

    Some(ChatWhatsappRecord {
        id: row.id,
        csv_upload_id: row.csv_upload_id,
        phone_number,
        message_type,
        message_date: detabbed(&row.message_date)
            .as_deref()
            .and_then(normalize_timestamp),
        message,
        created_at: detabbed(&row.created_at)
            .as_deref()
            .and_then(normalize_timestamp),
        deleted_at: detabbed(&row.deleted_at)
            .as_deref()
            .and_then(normalize_timestamp),
    })
}

/// Tab characters show up mid-field when chat exports are pasted through
/// spreadsheets; strip them before trimming.
fn detabbed(value: &Option<Scalar>) -> Option<String> {
    to_text(value).map(|text| text.replace('\t', "").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_row() -> ChatWhatsappRow {
        ChatWhatsappRow {
            id: Some(11),
            csv_upload_id: Some(4),
            phone_number: Some(Scalar::Text("+62 812-3456-789".to_string())),
            message_type: Some(Scalar::Text("text".to_string())),
            message: Some(Scalar::Text("Booking for tonight".to_string())),
            ..ChatWhatsappRow::default()
        }
    }

    #[test]
    fn phone_shaped_rows_survive() {
        let record = clean(chat_row()).unwrap();
        assert_eq!(record.phone_number, "+628123456789");
        assert_eq!(record.message_type, "text");
        assert_eq!(record.message, "Booking for tonight");
    }

    #[test]
    fn group_chat_identifiers_are_dropped() {
        let mut row = chat_row();
        row.phone_number = Some(Scalar::Text("Front Office Team".to_string()));
        assert!(clean(row).is_none());

        let mut row = chat_row();
        row.phone_number = None;
        assert!(clean(row).is_none());
    }

    #[test]
    fn trunk_zero_is_stripped() {
        let mut row = chat_row();
        row.phone_number = Some(Scalar::Text("0812 3456 789".to_string()));
        assert_eq!(clean(row).unwrap().phone_number, "8123456789");
    }

    #[test]
    fn bare_zero_identifier_is_kept_as_is() {
        let mut row = chat_row();
        row.phone_number = Some(Scalar::Text("0".to_string()));
        assert_eq!(clean(row).unwrap().phone_number, "0");
    }

    #[test]
    fn blank_message_or_type_drops_the_row() {
        let mut row = chat_row();
        row.message = Some(Scalar::Text("  ".to_string()));
        assert!(clean(row).is_none());

        let mut row = chat_row();
        row.message_type = Some(Scalar::Text("nan".to_string()));
        assert!(clean(row).is_none());
    }

    #[test]
    fn tabs_are_stripped_before_validation() {
        let mut row = chat_row();
        row.phone_number = Some(Scalar::Text("\t08123456789\t".to_string()));
        row.message = Some(Scalar::Text("see\tyou".to_string()));
        let record = clean(row).unwrap();
        assert_eq!(record.phone_number, "8123456789");
        assert_eq!(record.message, "seeyou");
    }

    #[test]
    fn message_date_is_canonicalized() {
        let mut row = chat_row();
        row.message_date = Some(Scalar::Text("2024-01-15T10:30:00Z".to_string()));
        assert_eq!(
            clean(row).unwrap().message_date,
            Some("2024-01-15 10:30:00".to_string())
        );
    }
}
