use serde::Deserialize;

use crate::types::Scalar;

/// Raw reservation row as captured from the `reservation_raw` table.
///
/// Every declared column is present as an `Option`; the cleaner decides which
/// missing fields make the row unusable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub csv_upload_id: Option<i64>,
    #[serde(default)]
    pub reservation_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<Scalar>,
    #[serde(default)]
    pub first_name: Option<Scalar>,
    #[serde(default)]
    pub last_name: Option<Scalar>,
    #[serde(default)]
    pub room_number: Option<Scalar>,
    #[serde(default)]
    pub room_type: Option<Scalar>,
    #[serde(default)]
    pub arrangement: Option<Scalar>,
    #[serde(default)]
    pub in_house_date: Option<Scalar>,
    #[serde(default)]
    pub arrival_date: Option<Scalar>,
    #[serde(default)]
    pub depart_date: Option<Scalar>,
    #[serde(default)]
    pub check_in_time: Option<Scalar>,
    #[serde(default)]
    pub check_out_time: Option<Scalar>,
    #[serde(default)]
    pub created_date: Option<Scalar>,
    #[serde(default)]
    pub birth_date: Option<Scalar>,
    #[serde(default)]
    pub age: Option<Scalar>,
    #[serde(default)]
    pub member_no: Option<Scalar>,
    #[serde(default)]
    pub member_type: Option<Scalar>,
    #[serde(default)]
    pub email: Option<Scalar>,
    #[serde(default)]
    pub mobile_phone: Option<Scalar>,
    #[serde(default)]
    pub vip_status: Option<Scalar>,
    #[serde(default)]
    pub room_rate: Option<Scalar>,
    #[serde(default)]
    pub lodging: Option<Scalar>,
    #[serde(default)]
    pub breakfast: Option<Scalar>,
    #[serde(default)]
    pub lunch: Option<Scalar>,
    #[serde(default)]
    pub dinner: Option<Scalar>,
    #[serde(default)]
    pub other_charges: Option<Scalar>,
    #[serde(default)]
    pub bill_number: Option<Scalar>,
    #[serde(default)]
    pub pay_article: Option<Scalar>,
    #[serde(default)]
    pub rate_code: Option<Scalar>,
    #[serde(default)]
    pub adult_count: Option<Scalar>,
    #[serde(default)]
    pub child_count: Option<Scalar>,
    #[serde(default)]
    pub compliment: Option<Scalar>,
    #[serde(default)]
    pub nationality: Option<Scalar>,
    #[serde(default)]
    pub local_region: Option<Scalar>,
    #[serde(default)]
    pub company_ta: Option<Scalar>,
    #[serde(default)]
    pub sob: Option<Scalar>,
    #[serde(default)]
    pub nights: Option<Scalar>,
    #[serde(default)]
    pub segment: Option<Scalar>,
    #[serde(default)]
    pub created_by: Option<Scalar>,
    #[serde(default)]
    pub k_card: Option<Scalar>,
    #[serde(default)]
    pub remarks: Option<Scalar>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
    #[serde(default)]
    pub deleted_at: Option<Scalar>,
}

/// Raw guest profile row as captured from the `profile_guest_raw` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileGuestRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub csv_upload_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<Scalar>,
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub email: Option<Scalar>,
    #[serde(default)]
    pub phone: Option<Scalar>,
    #[serde(default)]
    pub address: Option<Scalar>,
    #[serde(default)]
    pub birth_date: Option<Scalar>,
    #[serde(default)]
    pub occupation: Option<Scalar>,
    #[serde(default)]
    pub city: Option<Scalar>,
    #[serde(default)]
    pub country: Option<Scalar>,
    #[serde(default)]
    pub segment: Option<Scalar>,
    #[serde(default)]
    pub type_id: Option<Scalar>,
    #[serde(default)]
    pub id_no: Option<Scalar>,
    #[serde(default)]
    pub sex: Option<Scalar>,
    #[serde(default)]
    pub zip_code: Option<Scalar>,
    #[serde(default)]
    pub local_region: Option<Scalar>,
    #[serde(default)]
    pub telefax: Option<Scalar>,
    #[serde(default)]
    pub mobile_no: Option<Scalar>,
    #[serde(default)]
    pub comments: Option<Scalar>,
    #[serde(default)]
    pub credit_limit: Option<Scalar>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
    #[serde(default)]
    pub deleted_at: Option<Scalar>,
}

/// Raw WhatsApp chat row as captured from the `chat_whatsapp_raw` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatWhatsappRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub csv_upload_id: Option<i64>,
    #[serde(default)]
    pub phone_number: Option<Scalar>,
    #[serde(default)]
    pub message_type: Option<Scalar>,
    #[serde(default)]
    pub message_date: Option<Scalar>,
    #[serde(default)]
    pub message: Option<Scalar>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
    #[serde(default)]
    pub deleted_at: Option<Scalar>,
}

/// Raw restaurant transaction row as captured from the `transaction_resto_raw` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRestoRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub csv_upload_id: Option<i64>,
    #[serde(default)]
    pub bill_number: Option<Scalar>,
    #[serde(default)]
    pub article_number: Option<Scalar>,
    #[serde(default)]
    pub guest_name: Option<Scalar>,
    #[serde(default)]
    pub item_name: Option<Scalar>,
    #[serde(default)]
    pub quantity: Option<Scalar>,
    #[serde(default)]
    pub sales: Option<Scalar>,
    #[serde(default)]
    pub payment: Option<Scalar>,
    #[serde(default)]
    pub article_category: Option<Scalar>,
    #[serde(default)]
    pub article_subcategory: Option<Scalar>,
    #[serde(default)]
    pub outlet: Option<Scalar>,
    #[serde(default)]
    pub table_number: Option<Scalar>,
    #[serde(default)]
    pub posting_id: Option<Scalar>,
    #[serde(default)]
    pub reservation_number: Option<Scalar>,
    #[serde(default)]
    pub travel_agent_name: Option<Scalar>,
    #[serde(default)]
    pub prev_bill_number: Option<Scalar>,
    #[serde(default)]
    pub transaction_date: Option<Scalar>,
    #[serde(default)]
    pub start_time: Option<Scalar>,
    #[serde(default)]
    pub close_time: Option<Scalar>,
    #[serde(default)]
    pub time: Option<Scalar>,
    #[serde(default)]
    pub bill_discount: Option<Scalar>,
    #[serde(default)]
    pub bill_compliment: Option<Scalar>,
    #[serde(default)]
    pub total_deduction: Option<Scalar>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
    #[serde(default)]
    pub deleted_at: Option<Scalar>,
}
