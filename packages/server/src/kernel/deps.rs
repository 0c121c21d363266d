//! Server dependencies (using traits for testability)
//!
//! Everything a request handler needs is passed in here; there are no
//! process-wide clients.

use std::sync::Arc;

use crate::kernel::{BaseSummarizer, OrderStore};

/// Shared handles for the HTTP layer
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<OrderStore>,
    pub summarizer: Arc<dyn BaseSummarizer>,
}

impl ServerDeps {
    pub fn new(store: Arc<OrderStore>, summarizer: Arc<dyn BaseSummarizer>) -> Self {
        Self { store, summarizer }
    }
}
