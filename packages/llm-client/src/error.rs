//! Error types for the chat completion client.

use thiserror::Error;

/// Result type for chat completion operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Chat completion client errors.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network error (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the provider
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the chat completion shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Provider answered without any choices
    #[error("Empty completion")]
    EmptyCompletion,
}
