//! Product store boundary.
//!
//! Defines the CRUD contract the query facade builds on, without making any
//! storage assumptions. Unknown ids are reported through the return types
//! (`None` / `false`), never as errors.

pub mod in_memory;

pub use in_memory::InMemoryProductStore;

use std::sync::Arc;

use stocksavvy_core::ProductId;
use stocksavvy_products::{Product, ProductFields};

/// Product catalog storage.
pub trait ProductStore: Send + Sync {
    /// Store a new product under a freshly generated id and return it.
    fn add(&self, fields: ProductFields) -> Product;

    /// Replace every field of an existing product, keeping its id.
    ///
    /// Returns `None` (store unchanged) when no product has that id.
    fn update(&self, id: &ProductId, fields: ProductFields) -> Option<Product>;

    /// Remove a product. Returns whether anything was removed.
    fn delete(&self, id: &ProductId) -> bool;

    fn get(&self, id: &ProductId) -> Option<Product>;

    /// All products, in insertion order.
    fn list(&self) -> Vec<Product>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn add(&self, fields: ProductFields) -> Product {
        (**self).add(fields)
    }

    fn update(&self, id: &ProductId, fields: ProductFields) -> Option<Product> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: &ProductId) -> bool {
        (**self).delete(id)
    }

    fn get(&self, id: &ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }
}
