//! Infrastructure layer: product storage and demo data.

pub mod product_store;
pub mod seed;

pub use product_store::{InMemoryProductStore, ProductStore};
