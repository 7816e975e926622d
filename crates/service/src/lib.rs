//! `stocksavvy-service`
//!
//! The query boundary the dashboard UI calls: an async facade over an
//! explicitly constructed product store, plus its configuration, clock and the
//! cosmetic login stub.

pub mod clock;
pub mod config;
pub mod facade;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ServiceConfig};
pub use facade::{DashboardSnapshot, InventoryQueries, InventoryService};
pub use session::{Credentials, Role, SessionError, SessionUser, login};
