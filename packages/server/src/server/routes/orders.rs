//! Order routes.
//!
//! GET  /orders                         - full orders file, verbatim
//! POST /summarize/:document_number     - summarize one order in place
//!
//! Every request re-reads the file; nothing is cached in memory.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::common::OrderRecord;
use crate::domains::orders::summarize_order;
use crate::server::app::AxumAppState;
use crate::server::ApiError;

pub async fn orders_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Value>, ApiError> {
    match state.server_deps.store.read_raw().await {
        Ok(Some(orders)) => Ok(Json(orders)),
        Ok(None) => Err(ApiError::orders_not_found()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read orders file");
            Err(ApiError::Error {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to read orders".to_string(),
            })
        }
    }
}

pub async fn summarize_handler(
    Extension(state): Extension<AxumAppState>,
    Path(document_number): Path<String>,
) -> Result<Json<OrderRecord>, ApiError> {
    let order = summarize_order(&document_number, &state.server_deps).await?;
    Ok(Json(order))
}
