//! Error types for price oracle lookups.
//!
//! A missing quote is not an error: oracles report it as `Ok(None)`. These
//! variants cover the cases where the oracle could not answer at all.

/// Errors that can occur while fetching a unit price.
///
/// [`crate::PriceOracleClient`] absorbs every variant and prices the amount
/// at zero, so pricing trouble never blocks a record.
///
/// # Examples
///
/// ```rust
/// use sui_defi_metrics::PriceError;
///
/// let err = PriceError::invalid_price("0x2::sui::SUI", "-1");
/// assert!(err.to_string().contains("Invalid price"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// The request could not be sent or the connection failed.
    #[error("Price request for {token} failed")]
    Transport {
        /// Coin type being priced
        token: String,
        #[source]
        source: reqwest::Error,
    },

    /// The oracle answered with an unexpected status.
    #[error("Price oracle returned status {status} for {token}")]
    Status {
        /// Coin type being priced
        token: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be parsed.
    #[error("Malformed price response for {token}")]
    Decode {
        /// Coin type being priced
        token: String,
        #[source]
        source: serde_json::Error,
    },

    /// The oracle returned a price that is not a non-negative decimal.
    #[error("Invalid price {value:?} for {token}")]
    InvalidPrice {
        /// Coin type being priced
        token: String,
        /// Raw value as received
        value: String,
    },
}

impl PriceError {
    /// Create an `InvalidPrice` error.
    pub fn invalid_price(token: impl Into<String>, value: impl Into<String>) -> Self {
        PriceError::InvalidPrice {
            token: token.into(),
            value: value.into(),
        }
    }
}
