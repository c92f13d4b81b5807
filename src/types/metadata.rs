//! Coin metadata type

use serde::{Deserialize, Serialize};

use super::tokens::TokenDecimals;

/// Metadata the pipeline needs about a coin type
///
/// Mirrors the body of `GET /metadata/coin-metadata/{type}`; any other fields
/// in the response are ignored. Decimals never change for a published coin
/// type, which is what makes per-process memoization safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub decimals: TokenDecimals,
}

impl TokenMetadata {
    pub const fn new(decimals: TokenDecimals) -> Self {
        Self { decimals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_body_and_ignores_extra_fields() {
        let body = r#"{"decimals":6,"symbol":"USDC","name":"USD Coin"}"#;
        let metadata: TokenMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(metadata.decimals, TokenDecimals::USDC);
    }

    #[test]
    fn rejects_out_of_range_decimals() {
        assert!(serde_json::from_str::<TokenMetadata>(r#"{"decimals":300}"#).is_err());
        assert!(serde_json::from_str::<TokenMetadata>(r#"{"decimals":-1}"#).is_err());
        assert!(serde_json::from_str::<TokenMetadata>(r#"{}"#).is_err());
    }
}
