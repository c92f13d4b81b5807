//! Normalized (human-readable) token amount type

use bigdecimal::{BigDecimal, Zero};
use serde::{Serialize, Serializer};

use super::format::format_decimal;
use super::price::TokenPrice;
use super::usd::UsdValue;

/// Token amount normalized by decimals (human-readable)
///
/// This is a raw amount after dividing by 10^decimals, e.g. 1.5 SUI rather
/// than 1500000000 MIST. Backed by an arbitrary-precision decimal, so values
/// produced by [`TokenAmount::normalize`](super::TokenAmount::normalize) are
/// exact.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use sui_defi_metrics::{NormalizedAmount, TokenPrice};
///
/// let amount = NormalizedAmount::new(BigDecimal::from_str("1.5").unwrap());
/// let usd = amount.to_usd(&TokenPrice::new(BigDecimal::from(2000)));
/// assert_eq!(usd.to_string(), "3000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct NormalizedAmount(BigDecimal);

impl NormalizedAmount {
    /// Zero normalized amount
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Create a new normalized amount
    pub fn new(amount: BigDecimal) -> Self {
        Self(amount)
    }

    /// Borrow the inner decimal
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Calculate value in USD given a unit price
    pub fn to_usd(&self, price: &TokenPrice) -> UsdValue {
        price.value_of(self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<BigDecimal> for NormalizedAmount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_decimal(&self.0))
    }
}

impl Serialize for NormalizedAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_normalized_amount_to_usd() {
        let amount = NormalizedAmount::new(BigDecimal::from_str("2.5").unwrap());
        let price = TokenPrice::new(BigDecimal::from(1800));
        assert_eq!(amount.to_usd(&price).to_string(), "4500");
    }

    #[test]
    fn test_normalized_amount_zero() {
        assert!(NormalizedAmount::zero().is_zero());
        assert!(NormalizedAmount::new(BigDecimal::from_str("0.000").unwrap()).is_zero());
        assert!(!NormalizedAmount::new(BigDecimal::from_str("0.1").unwrap()).is_zero());
    }

    #[test]
    fn test_display_is_plain_and_trimmed() {
        let normalized = NormalizedAmount::new(BigDecimal::from_str("1.234500000").unwrap());
        assert_eq!(normalized.to_string(), "1.2345");
    }
}
