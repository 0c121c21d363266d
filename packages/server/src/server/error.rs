//! HTTP error bodies.
//!
//! `GET /orders` answers with `{"error": ...}`; the summarize route answers
//! with `{"detail": ...}`. The frontend reads both shapes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::orders::SummarizeError;

#[derive(Debug)]
pub enum ApiError {
    /// `{"error": message}`
    Error { status: StatusCode, message: String },
    /// `{"detail": message}`
    Detail { status: StatusCode, message: String },
}

impl ApiError {
    pub fn orders_not_found() -> Self {
        ApiError::Error {
            status: StatusCode::NOT_FOUND,
            message: "Orders not found".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Error { status, .. } | ApiError::Detail { status, .. } => *status,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        let status = match &err {
            SummarizeError::OrdersFileNotFound | SummarizeError::OrderNotFound => {
                StatusCode::NOT_FOUND
            }
            SummarizeError::NoRawText => StatusCode::BAD_REQUEST,
            SummarizeError::Summarizer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SummarizeError::Internal(cause) => {
                tracing::error!(error = %cause, "Summarize failed unexpectedly");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError::Detail {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Error { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Detail { status, message } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
        }
    }
}
