//! USD value type for financial calculations

use bigdecimal::{BigDecimal, Zero};
use serde::{Serialize, Serializer};

use super::format::format_decimal;

/// A USD-denominated value
///
/// Result of `normalized amount × unit price`. Zero when no price quote was
/// available for the token at the event's time.
///
/// # Examples
///
/// ```
/// use sui_defi_metrics::UsdValue;
///
/// assert!(UsdValue::zero().is_zero());
/// assert_eq!(UsdValue::zero().to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct UsdValue(BigDecimal);

impl UsdValue {
    /// Zero USD value
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Borrow the inner decimal
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<BigDecimal> for UsdValue {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_decimal(&self.0))
    }
}

impl Serialize for UsdValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_usd_value_zero() {
        assert!(UsdValue::zero().is_zero());
        assert!(UsdValue::default().is_zero());
        assert!(!UsdValue::new(BigDecimal::from_str("0.01").unwrap()).is_zero());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let value = UsdValue::new(BigDecimal::from_str("2.50").unwrap());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"2.5\"");
    }
}
