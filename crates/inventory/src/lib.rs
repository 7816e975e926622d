//! Inventory alerting module.
//!
//! Stock and expiry classification, alert derivation and dashboard
//! aggregation over a product set. Everything here is a pure function of the
//! products and the caller-supplied `now` (no IO, no storage, no clock).

pub mod alert;
pub mod feed;
pub mod rules;
pub mod summary;

pub use alert::{Alert, AlertKind, generate};
pub use feed::{AlertFeed, AlertFilter};
pub use rules::{EXPIRY_WINDOW_DAYS, expiring_soon, is_expiring_soon, is_low_stock, low_stock};
pub use summary::{CategoryBreakdown, DashboardSummary, RECENT_ALERTS_LIMIT, summarize};
