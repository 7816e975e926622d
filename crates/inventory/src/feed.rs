//! Session-scoped alert feed.
//!
//! Holds one generated alert list for the lifetime of a UI session. Read
//! flags live only here: regenerating alerts from the catalog starts over
//! with every alert unread.

use serde::{Deserialize, Serialize};

use stocksavvy_core::DomainError;

use crate::alert::{Alert, AlertKind};

/// Alert list filter offered by the alerts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertFilter {
    #[default]
    All,
    LowStock,
    ExpiringSoon,
}

impl AlertFilter {
    pub fn matches(self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::LowStock => alert.kind == AlertKind::LowStock,
            AlertFilter::ExpiringSoon => alert.kind == AlertKind::ExpiringSoon,
        }
    }
}

impl core::str::FromStr for AlertFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(AlertFilter::All),
            "low-stock" => Ok(AlertFilter::LowStock),
            "expiring-soon" => Ok(AlertFilter::ExpiringSoon),
            other => Err(DomainError::validation(format!(
                "unknown alert filter '{other}' (expected one of: all, low-stock, expiring-soon)"
            ))),
        }
    }
}

/// A generated alert list plus its per-session read state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Mark one alert as read.
    ///
    /// Returns `false` when no alert has that id. Marking an already-read
    /// alert is a no-op that still returns `true`.
    pub fn mark_as_read(&mut self, alert_id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Alerts matching `filter`, in feed order.
    pub fn filtered(&self, filter: AlertFilter) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |a| filter.matches(a))
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.is_read).count()
    }

    /// The first `limit` alerts (the dashboard's "recent alerts" panel).
    pub fn recent(&self, limit: usize) -> &[Alert] {
        &self.alerts[..limit.min(self.alerts.len())]
    }
}

impl From<Vec<Alert>> for AlertFeed {
    fn from(alerts: Vec<Alert>) -> Self {
        Self::new(alerts)
    }
}
