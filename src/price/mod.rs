//! USD pricing of normalized amounts
//!
//! This module provides a trait-based architecture for historical unit prices.
//! Implement [`PriceOracle`] to plug in any price backend; the crate ships an
//! HTTP implementation in [`HttpPriceOracle`].
//!
//! # Architecture
//!
//! 1. **PriceOracleClient** asks the oracle for a quote at the event timestamp
//! 2. Quotes outside the tolerance window are discarded
//! 3. The unit price is multiplied by the normalized amount
//!
//! A missing quote, a failed request or an out-of-window quote all price the
//! amount at zero. Pricing never blocks emission of the on-chain fact.
//!
//! # Example: Implementing PriceOracle
//!
//! ```rust
//! use async_trait::async_trait;
//! use chrono::{DateTime, Utc};
//! use sui_defi_metrics::{PriceError, PriceOracle, PriceQuote, TokenPrice, TokenType};
//!
//! struct FixedPrice(TokenPrice);
//!
//! #[async_trait]
//! impl PriceOracle for FixedPrice {
//!     async fn quote(
//!         &self,
//!         _network: &str,
//!         _token: &TokenType,
//!         at: DateTime<Utc>,
//!         _tolerance: chrono::Duration,
//!     ) -> Result<Option<PriceQuote>, PriceError> {
//!         Ok(Some(PriceQuote::new(self.0.clone(), at)))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "FixedPrice"
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn, Instrument};

use crate::config::constants::defaults;
use crate::{spans, NormalizedAmount, PriceError, TokenPrice, TokenType, UsdValue};

mod http;

pub use http::HttpPriceOracle;

/// A unit price observed at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// USD per whole token
    pub price: TokenPrice,
    /// When the price was observed, if the oracle reports it
    pub timestamp: Option<DateTime<Utc>>,
}

impl PriceQuote {
    pub fn new(price: TokenPrice, timestamp: DateTime<Utc>) -> Self {
        Self {
            price,
            timestamp: Some(timestamp),
        }
    }

    /// A quote without an observation time
    pub fn untimed(price: TokenPrice) -> Self {
        Self {
            price,
            timestamp: None,
        }
    }

    /// Whether the quote lies within `tolerance` of `at`
    ///
    /// Untimed quotes are trusted to honor the tolerance passed to the oracle.
    pub fn is_within(&self, at: DateTime<Utc>, tolerance: chrono::Duration) -> bool {
        match self.timestamp {
            Some(observed) => {
                let delta = observed - at;
                delta <= tolerance && -delta <= tolerance
            }
            None => true,
        }
    }
}

/// Trait for historical price backends
///
/// The choice of quote inside the window (nearest, most recent prior) belongs
/// to the backend.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Looks up a unit price for `token` near `at`
    ///
    /// Returns `Ok(None)` when no quote exists within `tolerance`.
    async fn quote(
        &self,
        network: &str,
        token: &TokenType,
        at: DateTime<Utc>,
        tolerance: chrono::Duration,
    ) -> Result<Option<PriceQuote>, PriceError>;

    /// Returns the name of this oracle (for logging)
    fn name(&self) -> &'static str;
}

/// Prices normalized amounts in USD at a given timestamp
#[derive(Clone)]
pub struct PriceOracleClient {
    oracle: Arc<dyn PriceOracle>,
    network: String,
    tolerance: chrono::Duration,
}

impl std::fmt::Debug for PriceOracleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceOracleClient")
            .field("oracle", &self.oracle.name())
            .field("network", &self.network)
            .field("tolerance", &self.tolerance)
            .finish()
    }
}

impl PriceOracleClient {
    /// Create a client with the default one-day tolerance
    pub fn new(oracle: Arc<dyn PriceOracle>, network: impl Into<String>) -> Self {
        Self {
            oracle,
            network: network.into(),
            tolerance: chrono::Duration::days(defaults::PRICE_TOLERANCE_DAYS),
        }
    }

    pub fn with_tolerance(mut self, tolerance: chrono::Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn tolerance(&self) -> chrono::Duration {
        self.tolerance
    }

    /// Unit price for `token` at `at`, or `None` when unavailable
    ///
    /// Errors are logged and reported as `None`.
    pub async fn unit_price(&self, token: &TokenType, at: DateTime<Utc>) -> Option<TokenPrice> {
        let span = spans::resolve_price(token, at);
        async {
            match self
                .oracle
                .quote(&self.network, token, at, self.tolerance)
                .await
            {
                Ok(Some(quote)) if quote.is_within(at, self.tolerance) => {
                    debug!(price = %quote.price, "Price resolved");
                    Some(quote.price)
                }
                Ok(Some(quote)) => {
                    warn!(
                        quoted_at = ?quote.timestamp,
                        "Price quote outside tolerance window, pricing at zero"
                    );
                    None
                }
                Ok(None) => {
                    warn!("No price found, pricing at zero");
                    None
                }
                Err(error) => {
                    warn!(
                        oracle = self.oracle.name(),
                        error = %error,
                        "Price lookup failed, pricing at zero"
                    );
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    /// USD value of `amount` of `token` at `at`
    ///
    /// Zero when no price is available.
    pub async fn usd_value(
        &self,
        token: &TokenType,
        amount: &NormalizedAmount,
        at: DateTime<Utc>,
    ) -> UsdValue {
        match self.unit_price(token, at).await {
            Some(price) => amount.to_usd(&price),
            None => UsdValue::zero(),
        }
    }
}
