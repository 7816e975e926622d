use anyhow::Context;

use stocksavvy_infra::InMemoryProductStore;
use stocksavvy_service::{InventoryService, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocksavvy_observability::init();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    if config.as_of.is_none() {
        tracing::warn!("STOCKSAVVY_AS_OF not set; classifying the demo catalog against the wall clock");
    }

    let service = InventoryService::from_config(InMemoryProductStore::seeded(), config);
    let snapshot = service.dashboard().await;

    tracing::info!(
        total_products = snapshot.summary.total_products,
        low_stock = snapshot.summary.low_stock_count,
        expiring_soon = snapshot.summary.expiring_soon_count,
        "dashboard snapshot computed"
    );

    let json = serde_json::to_string_pretty(&snapshot).context("failed to encode dashboard snapshot")?;
    println!("{json}");
    Ok(())
}
