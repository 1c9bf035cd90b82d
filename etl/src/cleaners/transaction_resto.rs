//! Restaurant transaction row cleaning.
//!
//! The streaming path keeps this entity narrow: timestamps are
//! canonicalized and textual columns blank-normalized, while numeric
//! columns pass through with their wire type. Bill consolidation and
//! article classification live in the batch warehouse layer, not here.

use crate::normalize::blank::clean_text;
use crate::normalize::datetime::normalize_timestamp;
use crate::types::{Scalar, TransactionRestoRecord, TransactionRestoRow, to_text};

/// Cleans a raw restaurant transaction row. Never drops a row.
pub fn clean(row: TransactionRestoRow) -> Option<TransactionRestoRecord> {
    Some(TransactionRestoRecord {
        id: row.id,
        csv_upload_id: row.csv_upload_id,
        bill_number: text(&row.bill_number),
        article_number: text(&row.article_number),
        guest_name: text(&row.guest_name),
        item_name: text(&row.item_name),
        quantity: row.quantity,
        sales: row.sales,
        payment: row.payment,
        article_category: text(&row.article_category),
        article_subcategory: text(&row.article_subcategory),
        outlet: text(&row.outlet),
        table_number: row.table_number,
        posting_id: text(&row.posting_id),
        reservation_number: text(&row.reservation_number),
        travel_agent_name: text(&row.travel_agent_name),
        prev_bill_number: text(&row.prev_bill_number),
        transaction_date: timestamp(&row.transaction_date),
        start_time: text(&row.start_time),
        close_time: text(&row.close_time),
        time: text(&row.time),
        bill_discount: row.bill_discount,
        bill_compliment: row.bill_compliment,
        total_deduction: row.total_deduction,
        created_at: timestamp(&row.created_at),
        deleted_at: timestamp(&row.deleted_at),
    })
}

fn text(value: &Option<Scalar>) -> Option<String> {
    clean_text(to_text(value).as_deref(), false)
}

fn timestamp(value: &Option<Scalar>) -> Option<String> {
    to_text(value).as_deref().and_then(normalize_timestamp)
}
