// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseSummarizer)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Summarizer Trait (Infrastructure - LLM summarization)
// =============================================================================

#[async_trait]
pub trait BaseSummarizer: Send + Sync {
    /// Summarize an executive order's text (returns the completion verbatim)
    async fn summarize(&self, text: &str) -> Result<String>;
}
