//! In-process stand-in for the Federal Register API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Default)]
struct FakeState {
    pages: Vec<Vec<Value>>,
    failing_page: Option<u32>,
    details: HashMap<String, Value>,
    listing_requests: Mutex<Vec<HashMap<String, String>>>,
    detail_requests: Mutex<Vec<String>>,
}

/// Builder for the fake API. Pages are 1-indexed; any page past the last
/// configured one answers with an empty `results` array.
#[derive(Default)]
pub struct FakeFederalRegister {
    state: FakeState,
}

pub struct RunningFederalRegister {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeFederalRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, results: Vec<Value>) -> Self {
        self.state.pages.push(results);
        self
    }

    /// Answer this page with a 500 instead of its results.
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.state.failing_page = Some(page);
        self
    }

    /// Documents without a registered detail answer with 404.
    pub fn with_detail(mut self, document_number: &str, detail: Value) -> Self {
        self.state.details.insert(document_number.to_string(), detail);
        self
    }

    pub async fn start(self) -> RunningFederalRegister {
        let state = Arc::new(self.state);
        let router = Router::new()
            .route("/documents.json", get(listing))
            .route("/documents/:file", get(detail))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        RunningFederalRegister {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

impl RunningFederalRegister {
    /// Page numbers requested from the listing endpoint, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.listing_requests()
            .iter()
            .map(|q| q["page"].parse().unwrap())
            .collect()
    }

    pub fn listing_requests(&self) -> Vec<HashMap<String, String>> {
        self.state.listing_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.state.detail_requests.lock().unwrap().clone()
    }
}

async fn listing(
    State(state): State<Arc<FakeState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    state.listing_requests.lock().unwrap().push(query);

    if state.failing_page == Some(page) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable").into_response();
    }

    let results = (page as usize)
        .checked_sub(1)
        .and_then(|idx| state.pages.get(idx))
        .cloned()
        .unwrap_or_default();
    Json(json!({ "count": results.len(), "results": results })).into_response()
}

async fn detail(State(state): State<Arc<FakeState>>, Path(file): Path<String>) -> Response {
    let document_number = file.trim_end_matches(".json").to_string();
    state.detail_requests.lock().unwrap().push(document_number.clone());

    match state.details.get(&document_number) {
        Some(detail) => Json(detail.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"status": 404}))).into_response(),
    }
}
