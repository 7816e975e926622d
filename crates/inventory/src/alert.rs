//! Alert derivation.
//!
//! Alerts are computed from the product set on every query and never stored.
//! Identity is synthesized from the kind and the product id, so one query
//! yields at most one alert of each kind per product.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stocksavvy_core::{Entity, ProductId};
use stocksavvy_products::Product;

use crate::rules::{expiring_soon, low_stock};

/// Alert kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    LowStock,
    ExpiringSoon,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::LowStock => "low-stock",
            AlertKind::ExpiringSoon => "expiring-soon",
        }
    }

    /// Prefix of the synthesized alert id.
    pub fn id_prefix(self) -> &'static str {
        match self {
            AlertKind::LowStock => "low",
            AlertKind::ExpiringSoon => "exp",
        }
    }

    /// Alert id for this kind and product (`low-{id}` / `exp-{id}`).
    pub fn alert_id(self, product_id: &ProductId) -> String {
        format!("{}-{}", self.id_prefix(), product_id)
    }
}

impl core::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived notice about one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub product_id: ProductId,
    pub product_name: String,
    pub message: String,
    /// Generation time of the query that produced the alert.
    pub date: DateTime<Utc>,
    pub is_read: bool,
}

impl Alert {
    pub fn low_stock(product: &Product, now: DateTime<Utc>) -> Self {
        Self::new(
            AlertKind::LowStock,
            product,
            format!(
                "Low stock alert: Only {} units remaining (threshold: {})",
                product.quantity(),
                product.threshold()
            ),
            now,
        )
    }

    pub fn expiring_soon(product: &Product, expiry_date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self::new(
            AlertKind::ExpiringSoon,
            product,
            format!("Expiring soon: Product will expire on {}", format_date(expiry_date)),
            now,
        )
    }

    fn new(kind: AlertKind, product: &Product, message: String, now: DateTime<Utc>) -> Self {
        Self {
            id: kind.alert_id(product.id()),
            kind,
            product_id: product.id().clone(),
            product_name: product.name().to_string(),
            message,
            date: now,
            is_read: false,
        }
    }
}

/// Formats a calendar date the way the dashboard displays it (`M/D/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Derive the alert list for a product set.
///
/// All low-stock alerts come first, then all expiring-soon alerts; each group
/// keeps the product order. Every alert is unread and dated `now`.
pub fn generate(products: &[Product], now: DateTime<Utc>) -> Vec<Alert> {
    let low = low_stock(products).map(|p| Alert::low_stock(p, now));
    let expiring = expiring_soon(products, now).filter_map(|p| {
        p.expiry_date()
            .map(|date| Alert::expiring_soon(p, date, now))
    });
    low.chain(expiring).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stocksavvy_products::{Category, ProductFields};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap()
    }

    fn product(id: &str, name: &str, quantity: u32, threshold: u32, expiry_in_days: Option<i64>) -> Product {
        let mut fields = ProductFields::new(name, format!("SKU-{id}"), Category::Food).with_stock(quantity, threshold);
        if let Some(days) = expiry_in_days {
            fields = fields.with_expiry_date((now() + Duration::days(days)).date_naive());
        }
        Product::from_fields(ProductId::from(id), fields)
    }

    #[test]
    fn empty_product_set_yields_no_alerts() {
        assert!(generate(&[], now()).is_empty());
    }

    #[test]
    fn low_stock_alert_carries_exact_message_and_id() {
        let alerts = generate(&[product("5", "Whole Milk", 8, 10, None)], now());

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.id, "low-5");
        assert_eq!(alert.kind, AlertKind::LowStock);
        assert_eq!(alert.product_id, ProductId::from("5"));
        assert_eq!(alert.product_name, "Whole Milk");
        assert_eq!(alert.message, "Low stock alert: Only 8 units remaining (threshold: 10)");
        assert_eq!(alert.date, now());
        assert!(!alert.is_read);
    }

    #[test]
    fn expiring_alert_formats_expiry_date() {
        let alerts = generate(&[product("4", "Organic Apples", 45, 20, Some(10))], now());

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.id, "exp-4");
        assert_eq!(alert.kind, AlertKind::ExpiringSoon);
        assert_eq!(alert.message, "Expiring soon: Product will expire on 5/11/2025");
        assert_eq!(alert.date, now());
    }

    #[test]
    fn product_matching_both_rules_gets_one_alert_of_each_kind() {
        let alerts = generate(&[product("9", "Cream", 2, 5, Some(3))], now());

        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["low-9", "exp-9"]);
    }

    #[test]
    fn low_stock_alerts_precede_expiring_alerts() {
        let products = vec![
            product("1", "Expiring only", 50, 10, Some(5)),
            product("2", "Low only", 1, 10, None),
            product("3", "Both", 0, 10, Some(20)),
            product("4", "Healthy", 50, 10, Some(90)),
            product("5", "Expired", 50, 10, Some(-2)),
        ];

        let alerts = generate(&products, now());
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["low-2", "low-3", "exp-1", "exp-3"]);

        let first_expiring = alerts
            .iter()
            .position(|a| a.kind == AlertKind::ExpiringSoon)
            .unwrap();
        assert!(alerts[..first_expiring].iter().all(|a| a.kind == AlertKind::LowStock));
        assert!(alerts[first_expiring..].iter().all(|a| a.kind == AlertKind::ExpiringSoon));
    }

    #[test]
    fn format_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(format_date(date), "8/5/2025");
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(format_date(date), "12/25/2025");
    }

    #[test]
    fn alert_kind_serializes_kebab_case_under_type() {
        let alerts = generate(&[product("7", "Wireless Mouse", 3, 5, None)], now());
        let value = serde_json::to_value(&alerts[0]).unwrap();
        assert_eq!(value["type"], "low-stock");
        assert_eq!(value["id"], "low-7");
        assert_eq!(value["is_read"], false);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use crate::rules::{is_expiring_soon, is_low_stock};
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (0u32..20, 0u32..20, prop::option::of(-40i64..60)),
                0..25,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (q, t, exp))| product(&i.to_string(), "Item", q, t, exp))
                    .collect()
            })
        }

        proptest! {
            /// Property: alert count equals low-stock count plus expiring-soon count.
            #[test]
            fn alert_count_is_sum_of_classifications(products in arb_products()) {
                let alerts = generate(&products, now());
                let low = products.iter().filter(|p| is_low_stock(p)).count();
                let expiring = products.iter().filter(|p| is_expiring_soon(p, now())).count();
                prop_assert_eq!(alerts.len(), low + expiring);
            }

            /// Property: no expiring-soon alert is ever followed by a low-stock alert.
            #[test]
            fn low_stock_group_comes_first(products in arb_products()) {
                let alerts = generate(&products, now());
                let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
                let boundary = kinds.iter().position(|k| *k == AlertKind::ExpiringSoon).unwrap_or(kinds.len());
                prop_assert!(kinds[boundary..].iter().all(|k| *k == AlertKind::ExpiringSoon));
            }

            /// Property: alert ids are unique within one generation.
            #[test]
            fn alert_ids_are_unique(products in arb_products()) {
                let alerts = generate(&products, now());
                let mut ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), alerts.len());
            }
        }
    }
}
