// Test doubles for infrastructure traits
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::BaseSummarizer;

// =============================================================================
// Mock Summarizer
// =============================================================================

pub struct MockSummarizer {
    response: std::result::Result<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    /// Summarizer that always answers with `summary`
    pub fn returning(summary: &str) -> Self {
        Self {
            response: Ok(summary.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Summarizer that always fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Texts passed to `summarize`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseSummarizer for MockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        self.response.clone().map_err(|e| anyhow::anyhow!(e))
    }
}
