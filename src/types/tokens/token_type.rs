//! Coin type tag

use serde::{Deserialize, Serialize};

/// Fully qualified Sui coin type, e.g. `0x2::sui::SUI`
///
/// Decoded events carry type names without the leading `0x`; records, gauge
/// tags and both external lookups use the prefixed form. Construction adds the
/// prefix exactly once, so the same coin always maps to the same key.
///
/// # Examples
///
/// ```
/// use sui_defi_metrics::TokenType;
///
/// let a = TokenType::new("0000000000000000000000000000000000000000000000000000000000000002::sui::SUI");
/// let b = TokenType::new("0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI");
/// assert_eq!(a, b);
/// assert!(a.as_str().starts_with("0x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TokenType(String);

impl TokenType {
    pub fn new(type_name: impl AsRef<str>) -> Self {
        let trimmed = type_name.as_ref().trim();
        if trimmed.starts_with("0x") {
            Self(trimmed.to_string())
        } else {
            Self(format!("0x{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TokenType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TokenType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<TokenType> for String {
    fn from(value: TokenType) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
