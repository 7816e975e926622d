//! Demo catalog used by the dashboard binary and the seeded store.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stocksavvy_core::ProductId;
use stocksavvy_products::{Category, Product, ProductFields};

/// The eight sample products the dashboard ships with (ids `"1"`..`"8"`).
pub fn demo_catalog() -> Vec<Product> {
    let rows = [
        (
            "1",
            ProductFields::new("iPhone 14 Pro", "APPL-IP14-128", Category::Electronics)
                .with_stock(25, 10)
                .with_price(Decimal::new(99999, 2))
                .with_image_url("https://source.unsplash.com/photo-1488590528505-98d2b5aba04b"),
        ),
        (
            "2",
            ProductFields::new("Samsung Galaxy S23", "SMSG-S23-256", Category::Electronics)
                .with_stock(18, 15)
                .with_price(Decimal::new(89999, 2)),
        ),
        (
            "3",
            ProductFields::new("MacBook Air M2", "APPL-MBA-M2", Category::Electronics)
                .with_stock(12, 8)
                .with_price(Decimal::new(129999, 2))
                .with_image_url("https://source.unsplash.com/photo-1531297484001-80022131f5a1"),
        ),
        (
            "4",
            ProductFields::new("Organic Apples", "FOOD-APL-ORG", Category::Food)
                .with_stock(45, 20)
                .with_price(Decimal::new(299, 2))
                .with_expiry_date(APPLES_EXPIRY),
        ),
        (
            "5",
            ProductFields::new("Whole Milk", "FOOD-MLK-GAL", Category::Food)
                .with_stock(8, 10)
                .with_price(Decimal::new(349, 2))
                .with_expiry_date(MILK_EXPIRY),
        ),
        (
            "6",
            ProductFields::new("Office Chair", "FURN-CHR-EXC", Category::Furniture)
                .with_stock(5, 3)
                .with_price(Decimal::new(19999, 2)),
        ),
        (
            "7",
            ProductFields::new("Wireless Mouse", "TECH-MOU-WRL", Category::OfficeSupplies)
                .with_stock(3, 5)
                .with_price(Decimal::new(2999, 2))
                .with_image_url("https://source.unsplash.com/photo-1460925895917-afdab827c52f"),
        ),
        (
            "8",
            ProductFields::new("Coffee Pods", "GRCR-COF-POD", Category::Beverages)
                .with_stock(15, 10)
                .with_price(Decimal::new(1499, 2))
                .with_expiry_date(COFFEE_EXPIRY),
        ),
    ];

    rows.into_iter()
        .map(|(id, fields)| Product::from_fields(ProductId::from(id), fields))
        .collect()
}

const APPLES_EXPIRY: NaiveDate = date(2025, 5, 10);
const MILK_EXPIRY: NaiveDate = date(2025, 5, 8);
const COFFEE_EXPIRY: NaiveDate = date(2025, 8, 15);

// Evaluated in const context, so an impossible date fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo catalog date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use stocksavvy_core::Entity;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let catalog = demo_catalog();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn catalog_skus_are_unique_and_records_valid() {
        let catalog = demo_catalog();
        let skus: HashSet<&str> = catalog.iter().map(|p| p.sku()).collect();
        assert_eq!(skus.len(), catalog.len());
        assert!(catalog.iter().all(|p| p.fields().validate().is_ok()));
    }

    #[test]
    fn perishables_carry_expiry_dates() {
        let catalog = demo_catalog();
        let perishable: Vec<&str> = catalog
            .iter()
            .filter(|p| p.expiry_date().is_some())
            .map(|p| p.name())
            .collect();
        assert_eq!(perishable, vec!["Organic Apples", "Whole Milk", "Coffee Pods"]);
    }

    #[test]
    fn expiry_dates_match_the_catalog_calendar() {
        let dates: Vec<String> = demo_catalog()
            .iter()
            .filter_map(|p| p.expiry_date())
            .map(|d| d.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-05-10", "2025-05-08", "2025-08-15"]);
    }
}
