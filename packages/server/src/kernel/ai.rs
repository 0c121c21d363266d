// Summarizer implementation over an OpenAI-compatible chat endpoint (Groq)
//
// This is the infrastructure implementation of BaseSummarizer.
// Deciding *when* to summarize lives in domains/orders.

use anyhow::Result;
use async_trait::async_trait;
use llm_client::{ChatClient, ChatRequest, Message};

use super::BaseSummarizer;

pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes executive orders. \
Provide a clear, concise summary that captures the key points and implications of the order.";

pub const SUMMARY_TEMPERATURE: f32 = 0.3;
pub const SUMMARY_MAX_TOKENS: u32 = 500;

/// Groq-backed summarizer
#[derive(Clone)]
pub struct GroqSummarizer {
    client: ChatClient,
    model: String,
}

impl GroqSummarizer {
    pub fn new(client: ChatClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn request(&self, text: &str) -> ChatRequest {
        ChatRequest::new(self.model.clone())
            .message(Message::system(SUMMARY_SYSTEM_PROMPT))
            .message(Message::user(text))
            .temperature(SUMMARY_TEMPERATURE)
            .max_tokens(SUMMARY_MAX_TOKENS)
    }
}

#[async_trait]
impl BaseSummarizer for GroqSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let response = self.client.chat_completion(self.request(text)).await?;
        tracing::debug!(
            model = %self.model,
            tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Generated summary"
        );
        Ok(response.content)
    }
}
