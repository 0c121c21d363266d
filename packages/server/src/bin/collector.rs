// Collector entry point: refresh the orders file from the Federal Register.
//
// Runs once and exits; scheduling is left to cron or similar.

use anyhow::{Context, Result};
use federal_register_client::FederalRegisterClient;
use orders_core::domains::orders::Collector;
use orders_core::kernel::OrderStore;
use orders_core::CollectorConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orders_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CollectorConfig::from_env().context("Failed to load configuration")?;

    let client = FederalRegisterClient::new().with_base_url(&config.federal_register_base_url);
    let collector = Collector::new(client, OrderStore::new(config.output_file.clone()));

    collector
        .save_orders(&config.start_date)
        .await
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;

    Ok(())
}
