use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_START_DATE: &str = "2025-01-20";
pub const DEFAULT_SUMMARY_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "https://news.aiworld.com.br"];

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub orders_file: PathBuf,
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub summary_model: String,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            orders_file: env::var("ORDERS_FILE")
                .unwrap_or_else(|_| "orders.json".to_string())
                .into(),
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| llm_client::GROQ_BASE_URL.to_string()),
            summary_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_MODEL.to_string()),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| default_origins()),
        })
    }
}

/// Collector configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub federal_register_base_url: String,
    pub start_date: String,
    pub output_file: PathBuf,
}

impl CollectorConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        Ok(Self {
            federal_register_base_url: env::var("FEDERAL_REGISTER_BASE_URL")
                .unwrap_or_else(|_| federal_register_client::BASE_URL.to_string()),
            start_date: env::var("ORDERS_START_DATE")
                .unwrap_or_else(|_| DEFAULT_START_DATE.to_string()),
            output_file: env::var("ORDERS_OUTPUT_FILE")
                .unwrap_or_else(|_| "../frontend/public/orders.json".to_string())
                .into(),
        })
    }
}

pub fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
