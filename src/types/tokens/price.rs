// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token price type (USD per token)

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};
use serde::{Serialize, Serializer};

use super::format::format_decimal;
use super::normalized::NormalizedAmount;
use super::usd::UsdValue;

/// Price of one whole token in USD
///
/// Distinguishes unit prices from amounts or USD totals. Kept as an exact
/// decimal so `amount × price` introduces no rounding.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use sui_defi_metrics::{NormalizedAmount, TokenPrice};
///
/// let sui_price = TokenPrice::from_str("2.50").unwrap();
/// let amount = NormalizedAmount::new("4".parse().unwrap());
/// assert_eq!(sui_price.value_of(&amount).to_string(), "10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TokenPrice(BigDecimal);

impl TokenPrice {
    /// Create a new token price
    pub fn new(price_per_token: BigDecimal) -> Self {
        Self(price_per_token)
    }

    /// Borrow the inner decimal
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Check if price is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Calculate USD value for a given amount of tokens
    pub fn value_of(&self, amount: &NormalizedAmount) -> UsdValue {
        UsdValue::new(amount.as_decimal() * &self.0)
    }
}

impl FromStr for TokenPrice {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim()).map(Self)
    }
}

impl From<BigDecimal> for TokenPrice {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_decimal(&self.0))
    }
}

impl Serialize for TokenPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of() {
        let price = TokenPrice::from_str("2000").unwrap();
        let amount = NormalizedAmount::new(BigDecimal::from_str("2.5").unwrap());
        assert_eq!(price.value_of(&amount).to_string(), "5000");
    }

    #[test]
    fn test_value_of_is_exact() {
        let price = TokenPrice::from_str("1800.75").unwrap();
        let amount = NormalizedAmount::new(BigDecimal::from_str("1.5").unwrap());
        assert_eq!(price.value_of(&amount).to_string(), "2701.125");
    }

    #[test]
    fn test_small_prices() {
        // memecoin-sized price with a million tokens
        let price = TokenPrice::from_str("0.00000123").unwrap();
        let amount = NormalizedAmount::new(BigDecimal::from(1_000_000));
        assert_eq!(price.value_of(&amount).to_string(), "1.23");
    }

    #[test]
    fn test_zero_price() {
        assert!(TokenPrice::default().is_zero());
        assert!(!TokenPrice::from_str("0.1").unwrap().is_zero());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(TokenPrice::from_str("abc").is_err());
    }
}
