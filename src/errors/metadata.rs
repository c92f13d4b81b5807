//! Error types for coin metadata lookups.

/// Errors that can occur while fetching coin metadata.
///
/// These never leave [`crate::TokenMetadataResolver`]: the resolver logs them
/// and substitutes the fallback decimals. They are public so custom
/// [`crate::MetadataSource`] implementations can report failures.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The request could not be sent or the connection failed.
    #[error("Metadata request for {token} failed")]
    Transport {
        /// Coin type being looked up
        token: String,
        #[source]
        source: reqwest::Error,
    },

    /// The metadata service answered with a non-success status.
    #[error("Metadata service returned status {status} for {token}")]
    Status {
        /// Coin type being looked up
        token: String,
        /// HTTP status code
        status: u16,
    },

    /// The body was not a `{ "decimals": <u8> }` document.
    #[error("Malformed metadata response for {token}")]
    Decode {
        /// Coin type being looked up
        token: String,
        #[source]
        source: serde_json::Error,
    },

    /// Catch-all for non-HTTP sources.
    #[error("Metadata unavailable for {token}: {details}")]
    Unavailable {
        /// Coin type being looked up
        token: String,
        /// What went wrong
        details: String,
    },
}

impl MetadataError {
    /// Create an `Unavailable` error for a specific token.
    pub fn unavailable(token: impl Into<String>, details: impl Into<String>) -> Self {
        MetadataError::Unavailable {
            token: token.into(),
            details: details.into(),
        }
    }
}
