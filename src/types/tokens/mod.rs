//! Strong types for token-related values
//!
//! Newtype wrappers that keep raw on-chain integers, decimal amounts, unit
//! prices and USD totals from being mixed up.
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (BigUint, raw)
//!     |
//!     | normalize(TokenDecimals)      exact, no rounding
//!     ↓
//! NormalizedAmount (BigDecimal, human-readable)
//!     |
//!     | × TokenPrice
//!     ↓
//! UsdValue (BigDecimal, USD-denominated)
//! ```

mod amount;
mod decimals;
mod format;
mod normalized;
mod price;
mod token_type;
mod usd;

pub use amount::{normalize, TokenAmount};
pub(crate) use amount::deserialize_integer;
pub use decimals::TokenDecimals;
pub use format::format_decimal;
pub use normalized::NormalizedAmount;
pub use price::TokenPrice;
pub use token_type::TokenType;
pub use usd::UsdValue;
