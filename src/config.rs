//! Configuration Module
//!
//! Handles loading runtime configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry lifetime in seconds, also the sweep period
    pub cache_ttl_secs: u64,
    /// Base URL of the remote catalog API
    pub api_base_url: String,
    /// Page size requested for the first location-area page
    pub page_limit: u32,
    /// Suspense pause in milliseconds before a catch roll resolves
    pub throw_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache entry lifetime in seconds (default: 300)
    /// - `API_BASE_URL` - Remote catalog base URL (default: the public API)
    /// - `PAGE_LIMIT` - Location areas per page (default: 20)
    /// - `THROW_DELAY_MS` - Catch suspense pause in milliseconds (default: 2000)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            page_limit: env::var("PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            throw_delay_ms: env::var("THROW_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Catch suspense pause as a `Duration`.
    pub fn throw_delay(&self) -> Duration {
        Duration::from_millis(self.throw_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: 20,
            throw_delay_ms: 2000,
        }
    }
}
