//! Error types for event processing.
//!
//! These are the only errors the pipeline surfaces: the event is skipped and
//! nothing is emitted for it.

/// Errors that make a single decoded event unprocessable.
///
/// # Examples
///
/// ```rust
/// use sui_defi_metrics::EventError;
///
/// let err = EventError::length_mismatch("amm_add_liquidity", 2, 3);
/// assert!(err.to_string().contains("coin_types=2"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// A multi-asset event's `coin_types` and `amounts` arrays differ in length.
    ///
    /// Truncating to the shorter array would misattribute amounts, so the
    /// whole event is rejected.
    #[error("{kind}: parallel arrays differ in length: coin_types={coin_types}, amounts={amounts}")]
    LengthMismatch {
        /// Event kind name
        kind: &'static str,
        /// Length of the coin type array
        coin_types: usize,
        /// Length of the amount array
        amounts: usize,
    },

    /// The input line was not a decodable event (unknown kind, missing field, bad value).
    #[error("Malformed event")]
    Malformed(#[from] serde_json::Error),
}

impl EventError {
    /// Create a `LengthMismatch` error.
    pub fn length_mismatch(kind: &'static str, coin_types: usize, amounts: usize) -> Self {
        EventError::LengthMismatch {
            kind,
            coin_types,
            amounts,
        }
    }
}
