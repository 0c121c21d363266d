use thiserror::Error;

pub type Result<T> = std::result::Result<T, FederalRegisterError>;

#[derive(Debug, Error)]
pub enum FederalRegisterError {
    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Federal Register API error ({status}): {message}")]
    Api { status: u16, message: String },
}
