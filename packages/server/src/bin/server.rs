// Main entry point for the orders API server

use std::sync::Arc;

use anyhow::{Context, Result};
use llm_client::ChatClient;
use orders_core::kernel::{GroqSummarizer, OrderStore, ServerDeps};
use orders_core::server::build_app;
use orders_core::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orders_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Executive Orders API");

    // Load configuration
    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        orders_file = %config.orders_file.display(),
        model = %config.summary_model,
        "Configuration loaded"
    );

    let chat_client = ChatClient::new(config.groq_api_key.clone()).with_base_url(&config.groq_base_url);
    let server_deps = ServerDeps::new(
        Arc::new(OrderStore::new(config.orders_file.clone())),
        Arc::new(GroqSummarizer::new(chat_client, config.summary_model.clone())),
    );

    let app = build_app(server_deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
