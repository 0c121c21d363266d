//! Order Record: the unit persisted in the shared orders file.
//!
//! `data` and `content` are stored exactly as the Federal Register returned
//! them. Only `summary` and `metadata.summarized` change after collection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One collected executive order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Listing-level metadata; carries the `document_number` key
    pub data: Value,

    /// Detail-level metadata; `{}` when the detail fetch failed
    #[serde(default = "empty_object")]
    pub content: Value,

    /// `null` in older files reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub raw_text: String,

    #[serde(default)]
    pub summary: Option<String>,

    pub metadata: OrderMetadata,

    /// Keys this type does not model, written back as read
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetadata {
    /// Local collection time, ISO-8601 without offset
    pub saved_at: NaiveDateTime,
    #[serde(default)]
    pub summarized: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRecord {
    /// Build a fresh, unsummarized record from a listing entry and its detail payload.
    pub fn collected(listing: Value, detail: Value, saved_at: NaiveDateTime) -> Self {
        let raw_text = select_raw_text(&detail, &listing);
        Self {
            data: listing,
            content: detail,
            raw_text,
            summary: None,
            metadata: OrderMetadata {
                saved_at,
                summarized: false,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn document_number(&self) -> Option<&str> {
        self.data.get("document_number").and_then(Value::as_str)
    }

    pub fn has_raw_text(&self) -> bool {
        !self.raw_text.is_empty()
    }

    pub fn is_summarized(&self) -> bool {
        self.summary.is_some()
    }

    pub fn apply_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
        self.metadata.summarized = true;
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Pick the text to summarize later.
///
/// Priority: detail `full_text_xml`, then detail `body_html`, then listing
/// `abstract`. Missing, null, non-string and empty values are skipped.
pub fn select_raw_text(detail: &Value, listing: &Value) -> String {
    non_empty_str(detail, "full_text_xml")
        .or_else(|| non_empty_str(detail, "body_html"))
        .or_else(|| non_empty_str(listing, "abstract"))
        .unwrap_or_default()
        .to_string()
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn saved_at() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-02-01T08:30:00.123456", "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap()
    }

    #[test]
    fn raw_text_prefers_full_text_xml() {
        let detail = json!({"full_text_xml": "<xml/>", "body_html": "<p>body</p>"});
        let listing = json!({"abstract": "short"});
        assert_eq!(select_raw_text(&detail, &listing), "<xml/>");
    }

    #[test]
    fn raw_text_falls_back_to_body_html() {
        let detail = json!({"full_text_xml": null, "body_html": "<p>body</p>"});
        let listing = json!({"abstract": "short"});
        assert_eq!(select_raw_text(&detail, &listing), "<p>body</p>");
    }

    #[test]
    fn raw_text_skips_empty_strings() {
        let detail = json!({"full_text_xml": "", "body_html": ""});
        let listing = json!({"abstract": "short"});
        assert_eq!(select_raw_text(&detail, &listing), "short");
    }

    #[test]
    fn raw_text_uses_abstract_when_detail_is_empty() {
        let listing = json!({"abstract": "short"});
        assert_eq!(select_raw_text(&empty_object(), &listing), "short");
    }

    #[test]
    fn raw_text_defaults_to_empty() {
        let listing = json!({"abstract": null});
        assert_eq!(select_raw_text(&empty_object(), &listing), "");
        assert_eq!(select_raw_text(&json!({"body_html": 42}), &json!({})), "");
    }

    #[test]
    fn collected_record_starts_unsummarized() {
        let record = OrderRecord::collected(
            json!({"document_number": "2025-01234", "abstract": "short"}),
            json!({"body_html": "<p>body</p>"}),
            saved_at(),
        );

        assert_eq!(record.document_number(), Some("2025-01234"));
        assert_eq!(record.raw_text, "<p>body</p>");
        assert!(!record.is_summarized());
        assert!(!record.metadata.summarized);
    }

    #[test]
    fn record_serializes_with_null_summary() {
        let record = OrderRecord::collected(json!({"document_number": "X"}), empty_object(), saved_at());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["summary"], Value::Null);
        assert_eq!(value["content"], json!({}));
        assert_eq!(value["metadata"]["summarized"], json!(false));
        assert_eq!(value["metadata"]["saved_at"], json!("2025-02-01T08:30:00.123456"));
    }

    #[test]
    fn null_raw_text_reads_as_empty() {
        let record: OrderRecord = serde_json::from_value(json!({
            "data": {"document_number": "X"},
            "content": {},
            "raw_text": null,
            "summary": null,
            "metadata": {"saved_at": "2025-02-01T08:30:00.123456", "summarized": false}
        }))
        .unwrap();

        assert_eq!(record.raw_text, "");
        assert!(!record.has_raw_text());
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let stored = json!({
            "data": {"document_number": "X"},
            "content": {},
            "raw_text": "text",
            "summary": "done",
            "metadata": {"saved_at": "2025-02-01T08:30:00.123456", "summarized": true, "model": "x"},
            "extra": 1
        });
        let record: OrderRecord = serde_json::from_value(stored.clone()).unwrap();

        assert_eq!(record.extra["extra"], json!(1));
        assert_eq!(record.metadata.extra["model"], json!("x"));
        assert_eq!(serde_json::to_value(&record).unwrap(), stored);
    }

    #[test]
    fn apply_summary_sets_flag() {
        let mut record = OrderRecord::collected(json!({"document_number": "X"}), empty_object(), saved_at());
        record.apply_summary("Key points");

        assert_eq!(record.summary.as_deref(), Some("Key points"));
        assert!(record.metadata.summarized);
    }
}
