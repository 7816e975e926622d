//! Dashboard aggregation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocksavvy_products::{Category, Product};

use crate::rules::{expiring_soon, low_stock};

/// How many alerts the dashboard's "recent alerts" panel shows.
pub const RECENT_ALERTS_LIMIT: usize = 5;

/// Per-category stock totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub product_count: usize,
    pub total_quantity: u64,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub expiring_soon_count: usize,
    /// Sum of `price * quantity` over the catalog.
    pub total_value: Decimal,
    /// Categories in the order they first appear in the catalog.
    pub categories: Vec<CategoryBreakdown>,
}

pub fn summarize(products: &[Product], now: DateTime<Utc>) -> DashboardSummary {
    let mut categories: Vec<CategoryBreakdown> = Vec::new();
    for product in products {
        match categories.iter_mut().find(|c| c.category == product.category()) {
            Some(entry) => {
                entry.product_count += 1;
                entry.total_quantity += u64::from(product.quantity());
            }
            None => categories.push(CategoryBreakdown {
                category: product.category(),
                product_count: 1,
                total_quantity: u64::from(product.quantity()),
            }),
        }
    }

    DashboardSummary {
        total_products: products.len(),
        low_stock_count: low_stock(products).count(),
        expiring_soon_count: expiring_soon(products, now).count(),
        total_value: products.iter().map(Product::stock_value).sum(),
        categories,
    }
}
