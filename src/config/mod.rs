//! Configuration for the event pipeline
//!
//! This module controls where metadata and prices come from, how long HTTP
//! calls may take, and which fallbacks apply when lookups fail.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use sui_defi_metrics::IndexerConfig;
//!
//! let config = IndexerConfig::default();
//! assert_eq!(config.fallback_decimals.as_u8(), 9);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use sui_defi_metrics::IndexerConfigBuilder;
//! use std::time::Duration;
//!
//! let config = IndexerConfigBuilder::new()
//!     .price_api_key("secret")
//!     .http_timeout(Duration::from_secs(5))
//!     .metadata_cache(false)
//!     .build();
//! assert!(!config.metadata_cache);
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,no_run
//! use sui_defi_metrics::IndexerConfig;
//!
//! let config = IndexerConfig::from_env()?;
//! # Ok::<(), sui_defi_metrics::ConfigError>(())
//! ```

use std::time::Duration;

use url::Url;

use crate::{ConfigError, TokenDecimals};

pub mod constants;

use constants::defaults;

/// Environment variable names read by [`IndexerConfig::from_env`].
pub mod env {
    pub const METADATA_API_URL: &str = "METADATA_API_URL";
    pub const PRICE_API_URL: &str = "PRICE_API_URL";
    pub const PRICE_API_KEY: &str = "PRICE_API_KEY";
    pub const PRICE_NETWORK: &str = "PRICE_NETWORK";
    pub const PRICE_TOLERANCE_DAYS: &str = "PRICE_TOLERANCE_DAYS";
    pub const DEFAULT_DECIMALS: &str = "DEFAULT_DECIMALS";
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    pub const METADATA_CACHE: &str = "METADATA_CACHE";
}

/// Configuration for the metadata resolver, price client and HTTP transport
///
/// Use [`IndexerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexerConfig {
    /// Base URL of the coin metadata service
    /// Default: `https://api.patara.app`
    pub metadata_api_url: String,

    /// Base URL of the historical price service
    /// Default: `https://app.sentio.xyz`
    pub price_api_url: String,

    /// API key sent to the price service, if any
    pub price_api_key: Option<String>,

    /// Network identifier for price lookups
    /// Default: `sui_mainnet`
    pub price_network: String,

    /// Maximum distance between event time and quote time
    /// Default: 1 day
    pub price_tolerance: chrono::Duration,

    /// Decimals used when metadata lookup fails
    /// Default: 9
    pub fallback_decimals: TokenDecimals,

    /// Timeout applied to every HTTP request
    /// Default: 30 seconds
    pub http_timeout: Duration,

    /// Memoize resolved decimals per coin type for the process lifetime
    /// Default: true
    pub metadata_cache: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            metadata_api_url: defaults::METADATA_API_URL.to_string(),
            price_api_url: defaults::PRICE_API_URL.to_string(),
            price_api_key: None,
            price_network: defaults::PRICE_NETWORK.to_string(),
            price_tolerance: chrono::Duration::days(defaults::PRICE_TOLERANCE_DAYS),
            fallback_decimals: defaults::FALLBACK_DECIMALS,
            http_timeout: defaults::HTTP_TIMEOUT,
            metadata_cache: true,
        }
    }
}

impl IndexerConfig {
    /// Load configuration from the process environment
    ///
    /// Reads `.env` first if present. Unset variables keep their defaults;
    /// set but invalid variables fail with [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use sui_defi_metrics::IndexerConfig;
    ///
    /// let vars = HashMap::from([("DEFAULT_DECIMALS", "6")]);
    /// let config = IndexerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()))?;
    /// assert_eq!(config.fallback_decimals.as_u8(), 6);
    /// # Ok::<(), sui_defi_metrics::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = IndexerConfigBuilder::new();

        if let Some(value) = lookup(env::METADATA_API_URL) {
            builder = builder.metadata_api_url(parse_url(env::METADATA_API_URL, &value)?);
        }
        if let Some(value) = lookup(env::PRICE_API_URL) {
            builder = builder.price_api_url(parse_url(env::PRICE_API_URL, &value)?);
        }
        if let Some(value) = lookup(env::PRICE_API_KEY).filter(|v| !v.is_empty()) {
            builder = builder.price_api_key(value);
        }
        if let Some(value) = lookup(env::PRICE_NETWORK) {
            builder = builder.price_network(value);
        }
        if let Some(value) = lookup(env::PRICE_TOLERANCE_DAYS) {
            let days = value
                .parse::<i64>()
                .ok()
                .filter(|d| (0..=MAX_TOLERANCE_DAYS).contains(d))
                .ok_or_else(|| {
                    ConfigError::invalid_value(
                        env::PRICE_TOLERANCE_DAYS,
                        &value,
                        "expected 0-3650 days",
                    )
                })?;
            builder = builder.price_tolerance(chrono::Duration::days(days));
        }
        if let Some(value) = lookup(env::DEFAULT_DECIMALS) {
            let decimals = value.parse::<u8>().map_err(|_| {
                ConfigError::invalid_value(env::DEFAULT_DECIMALS, &value, "expected an integer 0-255")
            })?;
            builder = builder.fallback_decimals(TokenDecimals::new(decimals));
        }
        if let Some(value) = lookup(env::HTTP_TIMEOUT_SECS) {
            let secs = value
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    ConfigError::invalid_value(
                        env::HTTP_TIMEOUT_SECS,
                        &value,
                        "expected a positive number of seconds",
                    )
                })?;
            builder = builder.http_timeout(Duration::from_secs(secs));
        }
        if let Some(value) = lookup(env::METADATA_CACHE) {
            builder = builder.metadata_cache(parse_bool(env::METADATA_CACHE, &value)?);
        }

        Ok(builder.build())
    }
}

const MAX_TOLERANCE_DAYS: i64 = 3650;

fn parse_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid_value(var, value, "expected true or false")),
    }
}

/// Builder for [`IndexerConfig`]
///
/// # Example
///
/// ```rust
/// use sui_defi_metrics::IndexerConfigBuilder;
///
/// let config = IndexerConfigBuilder::new()
///     .price_network("sui_testnet")
///     .build();
/// assert_eq!(config.price_network, "sui_testnet");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexerConfigBuilder {
    config: IndexerConfig,
}

impl IndexerConfigBuilder {
    /// Create a new builder starting from [`IndexerConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.metadata_api_url = url.into();
        self
    }

    pub fn price_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.price_api_url = url.into();
        self
    }

    pub fn price_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.price_api_key = Some(key.into());
        self
    }

    pub fn price_network(mut self, network: impl Into<String>) -> Self {
        self.config.price_network = network.into();
        self
    }

    /// Set the accepted quote distance
    ///
    /// # Example
    ///
    /// ```rust
    /// use sui_defi_metrics::IndexerConfigBuilder;
    ///
    /// let config = IndexerConfigBuilder::new()
    ///     .price_tolerance(chrono::Duration::hours(6))
    ///     .build();
    /// assert_eq!(config.price_tolerance, chrono::Duration::hours(6));
    /// ```
    pub fn price_tolerance(mut self, tolerance: chrono::Duration) -> Self {
        self.config.price_tolerance = tolerance;
        self
    }

    pub fn fallback_decimals(mut self, decimals: TokenDecimals) -> Self {
        self.config.fallback_decimals = decimals;
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// Enable or disable the per-process metadata cache
    pub fn metadata_cache(mut self, enabled: bool) -> Self {
        self.config.metadata_cache = enabled;
        self
    }

    pub fn build(self) -> IndexerConfig {
        self.config
    }
}
