//! Query facade: the async boundary the dashboard calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use stocksavvy_core::{Entity, ProductId};
use stocksavvy_infra::ProductStore;
use stocksavvy_inventory::{
    Alert, AlertFeed, DashboardSummary, RECENT_ALERTS_LIMIT, expiring_soon, generate, low_stock, summarize,
};
use stocksavvy_products::{Product, ProductFields};

use crate::clock::Clock;
use crate::config::ServiceConfig;

/// Async query interface for the inventory dashboard.
///
/// Unknown ids are reported as `None` / `false`; no method fails otherwise.
#[async_trait]
pub trait InventoryQueries: Send + Sync {
    async fn list_products(&self) -> Vec<Product>;

    async fn get_product(&self, id: &ProductId) -> Option<Product>;

    async fn add_product(&self, fields: ProductFields) -> Product;

    async fn update_product(&self, id: &ProductId, fields: ProductFields) -> Option<Product>;

    async fn delete_product(&self, id: &ProductId) -> bool;

    /// Products at or below their stock threshold, in catalog order.
    async fn list_low_stock(&self) -> Vec<Product>;

    /// Products expiring within the next 30 days (already expired excluded).
    async fn list_expiring_soon(&self) -> Vec<Product>;

    /// Freshly generated alerts: low-stock first, then expiring-soon, all unread.
    async fn list_alerts(&self) -> Vec<Alert>;
}

/// Everything the dashboard page renders, computed against one `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub summary: DashboardSummary,
    pub recent_alerts: Vec<Alert>,
    pub low_stock: Vec<Product>,
    pub expiring_soon: Vec<Product>,
}

/// Facade over an explicitly constructed product store.
pub struct InventoryService<S> {
    store: S,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl<S> core::fmt::Debug for InventoryService<S>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryService")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: ProductStore> InventoryService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        info!(simulated_latency = ?config.simulated_latency, "inventory service ready");
        Self { store, clock, config }
    }

    /// Build from config alone; the clock follows `config.as_of`.
    pub fn from_config(store: S, config: ServiceConfig) -> Self {
        let clock = config.clock();
        Self::new(store, clock, config)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Alerts wrapped in a feed the UI can mark as read for this session.
    pub async fn alert_feed(&self) -> AlertFeed {
        self.list_alerts().await.into()
    }

    pub async fn dashboard(&self) -> DashboardSnapshot {
        let products = self.store.list();
        let now = self.clock.now();

        let snapshot = DashboardSnapshot {
            summary: summarize(&products, now),
            recent_alerts: generate(&products, now).into_iter().take(RECENT_ALERTS_LIMIT).collect(),
            low_stock: low_stock(&products).cloned().collect(),
            expiring_soon: expiring_soon(&products, now).cloned().collect(),
        };
        self.simulate_latency().await;
        snapshot
    }

    async fn simulate_latency(&self) {
        let latency = self.config.simulated_latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl<S: ProductStore> InventoryQueries for InventoryService<S> {
    async fn list_products(&self) -> Vec<Product> {
        let products = self.store.list();
        self.simulate_latency().await;
        products
    }

    async fn get_product(&self, id: &ProductId) -> Option<Product> {
        let product = self.store.get(id);
        self.simulate_latency().await;
        product
    }

    async fn add_product(&self, fields: ProductFields) -> Product {
        let product = self.store.add(fields);
        info!(product_id = %product.id(), "product created");
        self.simulate_latency().await;
        product
    }

    async fn update_product(&self, id: &ProductId, fields: ProductFields) -> Option<Product> {
        let updated = self.store.update(id, fields);
        self.simulate_latency().await;
        updated
    }

    async fn delete_product(&self, id: &ProductId) -> bool {
        let removed = self.store.delete(id);
        self.simulate_latency().await;
        removed
    }

    async fn list_low_stock(&self) -> Vec<Product> {
        let products = self.store.list();
        let low: Vec<Product> = low_stock(&products).cloned().collect();
        self.simulate_latency().await;
        low
    }

    async fn list_expiring_soon(&self) -> Vec<Product> {
        let products = self.store.list();
        let expiring: Vec<Product> = expiring_soon(&products, self.clock.now()).cloned().collect();
        self.simulate_latency().await;
        expiring
    }

    async fn list_alerts(&self) -> Vec<Alert> {
        let products = self.store.list();
        let alerts = generate(&products, self.clock.now());
        debug!(count = alerts.len(), "alerts generated");
        self.simulate_latency().await;
        alerts
    }
}
