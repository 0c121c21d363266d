//! Order record fixtures.

use chrono::NaiveDateTime;
use orders_core::common::{empty_object, OrderRecord};
use serde_json::{json, Value};

pub fn listing_entry(document_number: &str) -> Value {
    json!({
        "document_number": document_number,
        "title": format!("Executive Order {document_number}"),
        "abstract": format!("Abstract of {document_number}"),
        "signing_date": "2025-01-20",
    })
}

pub fn order(document_number: &str, raw_text: &str) -> OrderRecord {
    let saved_at =
        NaiveDateTime::parse_from_str("2025-02-01T08:30:00.123456", "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap();
    let mut record = OrderRecord::collected(listing_entry(document_number), empty_object(), saved_at);
    record.raw_text = raw_text.to_string();
    record
}

pub fn summarized_order(document_number: &str, summary: &str) -> OrderRecord {
    let mut record = order(document_number, "full text");
    record.apply_summary(summary);
    record
}
