//! Stock and expiry classification rules.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use stocksavvy_products::Product;

/// Length of the "expiring soon" window, in calendar days after `now`.
pub const EXPIRY_WINDOW_DAYS: u64 = 30;

/// A product is low on stock when its quantity is at or below its threshold.
pub fn is_low_stock(product: &Product) -> bool {
    product.quantity() <= product.threshold()
}

/// A product is expiring soon when `now < expiry <= now + 30 days`.
///
/// The expiry instant is the start of the expiry date in UTC. The upper bound
/// keeps the time of day of `now`. Products already past their expiry instant
/// are not expiring soon.
pub fn is_expiring_soon(product: &Product, now: DateTime<Utc>) -> bool {
    let Some(date) = product.expiry_date() else {
        return false;
    };
    let expiry = expiry_instant(date);
    now < expiry && expiry <= window_end(now)
}

/// Low-stock products, in input order.
pub fn low_stock(products: &[Product]) -> impl Iterator<Item = &Product> {
    products.iter().filter(|p| is_low_stock(p))
}

/// Expiring-soon products, in input order.
pub fn expiring_soon(products: &[Product], now: DateTime<Utc>) -> impl Iterator<Item = &Product> {
    products.iter().filter(move |p| is_expiring_soon(p, now))
}

fn expiry_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn window_end(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_days(Days::new(EXPIRY_WINDOW_DAYS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
