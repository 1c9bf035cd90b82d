use serde::{Deserialize, Serialize};

use crate::types::Scalar;

/// Cleaned reservation record emitted to the `reservations` sink channel.
///
/// Serialized as a flat JSON object with exactly this column set, no envelope.
/// Stay dates and audit timestamps are canonical `YYYY-MM-DD HH:MM:SS`
/// strings, times of day are `HH:MM`, currency columns are 2-decimal-place
/// strings, counts default to 0, and `guest_id` is always present thanks to
/// the deterministic fallback generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: Option<i64>,
    pub csv_upload_id: Option<i64>,
    pub reservation_id: Option<i64>,
    pub guest_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub guest_name: Option<String>,
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub arrangement: Option<String>,
    pub in_house_date: Option<String>,
    pub arrival_date: Option<String>,
    pub depart_date: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub created_date: Option<String>,
    pub birth_date: Option<String>,
    pub age: i64,
    pub member_no: Option<String>,
    pub member_type: Option<String>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub vip_status: Option<String>,
    pub room_rate: Option<String>,
    pub lodging: Option<String>,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub other_charges: Option<String>,
    pub bill_number: Option<String>,
    pub pay_article: Option<String>,
    pub rate_code: Option<String>,
    pub adult_count: i64,
    pub child_count: i64,
    pub compliment: Option<String>,
    pub nationality: Option<String>,
    pub local_region: Option<String>,
    pub company_ta: Option<String>,
    pub sob: Option<String>,
    pub nights: i64,
    pub segment: Option<String>,
    pub created_by: Option<String>,
    pub k_card: Option<String>,
    pub remarks: Option<String>,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// Cleaned guest profile record emitted to the `profile_guest` sink channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileGuestRecord {
    pub id: Option<i64>,
    pub csv_upload_id: Option<i64>,
    pub guest_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub occupation: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub segment: Option<String>,
    pub type_id: Option<String>,
    pub id_no: Option<String>,
    pub sex: Option<String>,
    pub zip_code: Option<String>,
    pub local_region: Option<String>,
    pub telefax: Option<String>,
    pub mobile_no: Option<String>,
    pub comments: Option<String>,
    pub credit_limit: String,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// Cleaned WhatsApp chat record emitted to the `chat_whatsapp` sink channel.
///
/// Rows only survive the cleaner when their originating identifier is
/// phone-number-shaped, so `phone_number`, `message_type`, and `message` are
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatWhatsappRecord {
    pub id: Option<i64>,
    pub csv_upload_id: Option<i64>,
    pub phone_number: String,
    pub message_type: String,
    pub message_date: Option<String>,
    pub message: String,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// Cleaned restaurant transaction record emitted to the `transaction_resto`
/// sink channel.
///
/// The streaming path only normalizes timestamps and blanks out sentinel
/// text; numeric columns pass through with their original wire type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRestoRecord {
    pub id: Option<i64>,
    pub csv_upload_id: Option<i64>,
    pub bill_number: Option<String>,
    pub article_number: Option<String>,
    pub guest_name: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<Scalar>,
    pub sales: Option<Scalar>,
    pub payment: Option<Scalar>,
    pub article_category: Option<String>,
    pub article_subcategory: Option<String>,
    pub outlet: Option<String>,
    pub table_number: Option<Scalar>,
    pub posting_id: Option<String>,
    pub reservation_number: Option<String>,
    pub travel_agent_name: Option<String>,
    pub prev_bill_number: Option<String>,
    pub transaction_date: Option<String>,
    pub start_time: Option<String>,
    pub close_time: Option<String>,
    pub time: Option<String>,
    pub bill_discount: Option<Scalar>,
    pub bill_compliment: Option<Scalar>,
    pub total_deduction: Option<Scalar>,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
}
