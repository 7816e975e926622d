use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use stocksavvy_core::{Entity, ProductId};
use stocksavvy_products::{Product, ProductFields};

use super::ProductStore;
use crate::seed;

/// In-memory product store.
///
/// Keeps products in a `Vec` so listing preserves insertion order. Contents
/// live for the lifetime of the value; construct a fresh store per test.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with existing records (ids kept as given).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().collect()),
        }
    }

    /// Store preloaded with the demo catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed::demo_catalog())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every write finishes before the guard drops, so a poisoned lock still
    // holds a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(|poisoned| {
            warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(|poisoned| {
            warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl ProductStore for InMemoryProductStore {
    fn add(&self, fields: ProductFields) -> Product {
        let product = Product::from_fields(ProductId::generate(), fields);
        self.write().push(product.clone());
        debug!(product_id = %product.id(), sku = product.sku(), "product added");
        product
    }

    fn update(&self, id: &ProductId, fields: ProductFields) -> Option<Product> {
        let mut products = self.write();
        let Some(slot) = products.iter_mut().find(|p| p.id() == id) else {
            warn!(product_id = %id, "update of unknown product ignored");
            return None;
        };
        *slot = Product::from_fields(id.clone(), fields);
        debug!(product_id = %id, "product updated");
        Some(slot.clone())
    }

    fn delete(&self, id: &ProductId) -> bool {
        let mut products = self.write();
        let before = products.len();
        products.retain(|p| p.id() != id);
        let removed = products.len() < before;
        if removed {
            debug!(product_id = %id, "product deleted");
        } else {
            warn!(product_id = %id, "delete of unknown product ignored");
        }
        removed
    }

    fn get(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id() == id).cloned()
    }

    fn list(&self) -> Vec<Product> {
        self.read().clone()
    }
}
