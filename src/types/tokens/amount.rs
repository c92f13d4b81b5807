// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use std::fmt;
use std::str::FromStr;

use bigdecimal::num_bigint::{BigInt, BigUint, ParseBigIntError};
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;

/// Raw token amount (not normalized for decimals)
///
/// This is the integer amount as emitted on-chain in the coin's smallest
/// unit (e.g. MIST for SUI). Move events carry `u64`, `u128` or `u256`
/// amounts, so the value is kept as an arbitrary-precision integer. To convert
/// to a human-readable amount, use [`normalize`](Self::normalize) with the
/// coin's [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use sui_defi_metrics::{TokenAmount, TokenDecimals};
///
/// // 1.5 SUI in MIST (9 decimals)
/// let amount = TokenAmount::from(1_500_000_000u64);
/// assert_eq!(amount.normalize(TokenDecimals::SUI).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(BigUint);

impl TokenAmount {
    /// Zero token amount
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Create a new token amount
    pub fn new(amount: BigUint) -> Self {
        Self(amount)
    }

    /// Get the inner integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// The division is exact: the raw integer becomes the unscaled value of a
    /// decimal with `decimals` fractional digits, so no rounding ever happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sui_defi_metrics::{TokenAmount, TokenDecimals};
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = TokenAmount::from(100_000_000u64);
    /// assert_eq!(raw.normalize(TokenDecimals::USDC).to_string(), "100");
    /// ```
    pub fn normalize(&self, decimals: TokenDecimals) -> NormalizedAmount {
        let unscaled = BigInt::from(self.0.clone());
        NormalizedAmount::new(BigDecimal::new(unscaled, i64::from(decimals.as_u8())))
    }
}

/// Convert an on-chain integer amount into a decimal amount
///
/// Free-function form of [`TokenAmount::normalize`].
pub fn normalize(raw: &TokenAmount, decimals: TokenDecimals) -> NormalizedAmount {
    raw.normalize(decimals)
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for TokenAmount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for TokenAmount {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s.trim()).map(Self)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Decoded amounts arrive either as JSON strings (u128/u256) or plain numbers (u64)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Ok(Self::from(value)),
            RawAmount::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Deserialize a fixed-width integer given as a JSON number or a decimal string
///
/// For non-amount event fields (intervals, scales) that decoders render the
/// same way as amounts.
pub(crate) fn deserialize_integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: fmt::Display,
    <T as TryFrom<u64>>::Error: fmt::Display,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => T::try_from(value).map_err(serde::de::Error::custom),
        RawAmount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
