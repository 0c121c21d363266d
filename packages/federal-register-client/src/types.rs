use serde::Deserialize;
use serde_json::Value;

/// Presidential document type filter for executive orders.
pub const EXECUTIVE_ORDER: &str = "executive_order";

/// Page size the listing endpoint is queried with.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Filters for `GET /documents.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    pub presidential_document_type: String,
    /// Minimum signing date, `YYYY-MM-DD`
    pub signing_date_gte: String,
    pub per_page: u32,
}

impl DocumentQuery {
    /// Executive orders signed on or after `start_date`.
    pub fn executive_orders_since(start_date: impl Into<String>) -> Self {
        Self {
            presidential_document_type: EXECUTIVE_ORDER.to_string(),
            signing_date_gte: start_date.into(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Query string pairs for one 1-indexed page.
    pub fn params(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            (
                "conditions[presidential_document_type][]",
                self.presidential_document_type.clone(),
            ),
            ("conditions[signing_date][gte]", self.signing_date_gte.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", page.to_string()),
        ]
    }
}

/// One page of the listing endpoint.
///
/// Results are kept as raw JSON so every listing field survives into the
/// stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<Value>,
}

impl DocumentPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
