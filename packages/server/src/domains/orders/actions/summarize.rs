use thiserror::Error;
use tracing::info;

use crate::common::OrderRecord;
use crate::kernel::{ServerDeps, StoreError};

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Orders file not found")]
    OrdersFileNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("No raw text available for summarization")]
    NoRawText,

    #[error("Error generating summary: {0}")]
    Summarizer(String),

    /// Anything else; the cause is logged, not returned to the caller
    #[error("Internal server error")]
    Internal(String),
}

impl From<StoreError> for SummarizeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::FileNotFound => SummarizeError::OrdersFileNotFound,
            StoreError::OrderNotFound(_) => SummarizeError::OrderNotFound,
            other => SummarizeError::Internal(other.to_string()),
        }
    }
}

/// Summarize one order and persist the result.
///
/// An order that already has a summary is returned unchanged without calling
/// the summarizer. If another request commits a summary first, that summary
/// wins and is returned.
pub async fn summarize_order(
    document_number: &str,
    deps: &ServerDeps,
) -> Result<OrderRecord, SummarizeError> {
    let order = deps
        .store
        .get(document_number)
        .await?
        .ok_or(SummarizeError::OrderNotFound)?;

    if order.is_summarized() {
        return Ok(order);
    }

    if !order.has_raw_text() {
        return Err(SummarizeError::NoRawText);
    }

    info!(document_number, "Summarizing order");
    let summary = deps
        .summarizer
        .summarize(&order.raw_text)
        .await
        .map_err(|e| SummarizeError::Summarizer(e.to_string()))?;

    let updated = deps
        .store
        .update_one(document_number, |record| {
            if !record.is_summarized() {
                record.apply_summary(summary);
            }
        })
        .await?;

    Ok(updated)
}
