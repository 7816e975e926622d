//! Products domain module.
//!
//! This crate contains the product catalog record and its category label set,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Category, Product, ProductFields};
