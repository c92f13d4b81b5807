//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// Sui coin decimal precision
///
/// Represents the number of fractional digits a coin uses on-chain. SUI and
/// most Sui-native coins use 9, bridged stablecoins usually use 6 and some
/// bridged ERC-20 assets keep 8 or 18.
///
/// # Examples
///
/// ```
/// use sui_defi_metrics::TokenDecimals;
///
/// assert_eq!(TokenDecimals::SUI.as_u8(), 9);
/// assert_eq!(TokenDecimals::USDC.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest precision seen in practice for fungible assets
    pub const MAX_REASONABLE: u8 = 18;

    /// SUI and Sui-native coins (9)
    pub const SUI: Self = Self(9);

    /// Native USDC on Sui (6)
    pub const USDC: Self = Self(6);

    /// Bridged WBTC (8)
    pub const WBTC: Self = Self(8);

    /// Bridged ETH-like assets (18)
    pub const STANDARD: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if decimals are in the usual range (0-18)
    ///
    /// Values over 18 are legal but unusual and usually point at bad metadata.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
