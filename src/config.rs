//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Environment variable for the sweeper period in milliseconds.
const ENV_SWEEP_INTERVAL_MS: &str = "CACHE_SWEEP_INTERVAL_MS";

/// Environment variable for the LRU capacity bound.
const ENV_MAX_ENTRIES: &str = "CACHE_MAX_ENTRIES";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Background sweeper period
    pub sweep_interval: Duration,
    /// Maximum number of entries; `None` disables LRU eviction
    pub capacity: Option<usize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweeper period in milliseconds (default: 1000)
    /// - `CACHE_MAX_ENTRIES` - LRU capacity bound (default: unbounded)
    ///
    /// Absent variables fall back to defaults; a present but invalid value is
    /// an [`CacheError::InvalidConfig`] error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = env::var(ENV_SWEEP_INTERVAL_MS) {
            let millis: u64 = raw.parse().map_err(|_| {
                CacheError::InvalidConfig(format!("{ENV_SWEEP_INTERVAL_MS}: not an integer: {raw:?}"))
            })?;
            if millis == 0 {
                return Err(CacheError::InvalidConfig(format!(
                    "{ENV_SWEEP_INTERVAL_MS}: must be positive"
                )));
            }
            config.sweep_interval = Duration::from_millis(millis);
        }
        if let Ok(raw) = env::var(ENV_MAX_ENTRIES) {
            let capacity: usize = raw.parse().map_err(|_| {
                CacheError::InvalidConfig(format!("{ENV_MAX_ENTRIES}: not an integer: {raw:?}"))
            })?;
            if capacity == 0 {
                return Err(CacheError::InvalidConfig(format!(
                    "{ENV_MAX_ENTRIES}: must be positive"
                )));
            }
            config.capacity = Some(capacity);
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(1),
            capacity: None,
        }
    }
}
