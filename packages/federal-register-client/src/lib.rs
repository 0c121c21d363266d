//! Federal Register REST API client.
//!
//! Covers the two read endpoints the order collector needs: the paginated
//! document listing and the per-document detail payload. Responses stay as
//! raw JSON; interpreting them is the caller's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use federal_register_client::{DocumentQuery, FederalRegisterClient};
//!
//! let client = FederalRegisterClient::new();
//! let query = DocumentQuery::executive_orders_since("2025-01-20");
//!
//! let page = client.list_documents(&query, 1).await?;
//! for doc in &page.results {
//!     println!("{}", doc["document_number"]);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{FederalRegisterError, Result};
pub use types::{DocumentPage, DocumentQuery, DEFAULT_PER_PAGE, EXECUTIVE_ORDER};

use serde_json::Value;

pub const BASE_URL: &str = "https://www.federalregister.gov/api/v1";

#[derive(Clone)]
pub struct FederalRegisterClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for FederalRegisterClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FederalRegisterClient {
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new())
    }

    pub fn with_http_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API root (tests, mirrors).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one 1-indexed page of `GET /documents.json`.
    pub async fn list_documents(&self, query: &DocumentQuery, page: u32) -> Result<DocumentPage> {
        let url = format!("{}/documents.json", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&query.params(page))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FederalRegisterError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page_body: DocumentPage = resp.json().await?;
        tracing::debug!(page, results = page_body.results.len(), "Fetched document listing page");
        Ok(page_body)
    }

    /// Fetch `GET /documents/{document_number}.json`.
    pub async fn document(&self, document_number: &str) -> Result<Value> {
        let url = format!("{}/documents/{}.json", self.base_url, document_number);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FederalRegisterError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}
