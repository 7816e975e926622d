//! Service configuration.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::clock::{Clock, FixedClock, SystemClock};

/// Env var holding the simulated latency, in milliseconds.
pub const LATENCY_ENV: &str = "STOCKSAVVY_SIMULATED_LATENCY_MS";

/// Env var pinning "now" to an RFC 3339 instant.
pub const AS_OF_ENV: &str = "STOCKSAVVY_AS_OF";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidLatency { var: &'static str, value: String },

    #[error("{var} must be an RFC 3339 timestamp, got '{value}'")]
    InvalidTimestamp { var: &'static str, value: String },
}

/// Facade configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Artificial delay awaited by every facade call. Zero skips the sleep.
    pub simulated_latency: Duration,
    /// Fixed "now" for classification; `None` uses the wall clock.
    pub as_of: Option<DateTime<Utc>>,
}

impl ServiceConfig {
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (missing keys keep defaults).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LATENCY_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidLatency {
                var: LATENCY_ENV,
                value: raw.clone(),
            })?;
            config.simulated_latency = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(AS_OF_ENV) {
            let as_of = DateTime::parse_from_rfc3339(raw.trim()).map_err(|_| ConfigError::InvalidTimestamp {
                var: AS_OF_ENV,
                value: raw.clone(),
            })?;
            config.as_of = Some(as_of.with_timezone(&Utc));
        }

        Ok(config)
    }

    /// Clock matching `as_of`.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.as_of {
            Some(at) => Arc::new(FixedClock(at)),
            None => Arc::new(SystemClock),
        }
    }
}
