//! HTTP price oracle backed by a historical price REST service
//!
//! `GET {base}/api/v1/prices?timestamp=..&coinId.address.chain=..&coinId.address.address=..`
//! answering `{ "price": <number|string|null>, "timestamp": <rfc3339> }`.
//! A 404, a null price, a missing timestamp or a timestamp outside the
//! tolerance window means no quote. The service picks the quote; the window
//! is enforced here against the timestamp it reports.

use std::str::FromStr;

use async_trait::async_trait;
use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{PriceOracle, PriceQuote};
use crate::{PriceError, TokenPrice, TokenType};

const API_KEY_HEADER: &str = "api-key";

/// Largest accepted number of fractional digits (or trailing zeros) in a price
const MAX_PRICE_SCALE: i64 = 36;
/// Largest accepted number of significant digits in a price
const MAX_PRICE_DIGITS: u64 = 64;

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    price: Option<serde_json::Value>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

/// Price oracle that queries the historical price REST service
#[derive(Debug, Clone)]
pub struct HttpPriceOracle {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpPriceOracle {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: None,
        }
    }

    /// Send `key` in the `api-key` header with every request
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/prices", self.base_url)
    }
}

/// Parse the `price` field of a response body
///
/// Accepts JSON numbers and numeric strings. Negative, non-numeric or
/// out-of-range values (see [`MAX_PRICE_SCALE`], [`MAX_PRICE_DIGITS`]) are
/// errors; `null` or absence is "no quote".
fn parse_price(token: &TokenType, value: Option<serde_json::Value>) -> Result<Option<TokenPrice>, PriceError> {
    let text = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => return Err(PriceError::invalid_price(token.as_str(), other.to_string())),
    };

    let decimal = BigDecimal::from_str(text.trim())
        .map_err(|_| PriceError::invalid_price(token.as_str(), &text))?;
    let decimal = decimal.normalized();
    let (digits, scale) = decimal.as_bigint_and_exponent();
    let in_range = (-MAX_PRICE_SCALE..=MAX_PRICE_SCALE).contains(&scale)
        && decimal.digits() <= MAX_PRICE_DIGITS;
    if !in_range || digits.sign() == Sign::Minus {
        return Err(PriceError::invalid_price(token.as_str(), &text));
    }
    Ok(Some(TokenPrice::new(decimal)))
}

#[async_trait]
impl PriceOracle for HttpPriceOracle {
    async fn quote(
        &self,
        network: &str,
        token: &TokenType,
        at: DateTime<Utc>,
        tolerance: chrono::Duration,
    ) -> Result<Option<PriceQuote>, PriceError> {
        let timestamp = at.to_rfc3339();
        let mut request = self.client.get(self.endpoint()).query(&[
            ("timestamp", timestamp.as_str()),
            ("coinId.address.chain", network),
            ("coinId.address.address", token.as_str()),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        debug!(token = %token, at = %timestamp, "Requesting price");
        let response = request.send().await.map_err(|source| PriceError::Transport {
            token: token.to_string(),
            source,
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PriceError::Status {
                token: token.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| PriceError::Transport {
            token: token.to_string(),
            source,
        })?;
        let parsed: PriceResponse =
            serde_json::from_str(&body).map_err(|source| PriceError::Decode {
                token: token.to_string(),
                source,
            })?;

        let Some(price) = parse_price(token, parsed.price)? else {
            return Ok(None);
        };
        let Some(observed) = parsed.timestamp else {
            debug!(token = %token, "Price response carries no timestamp, treating as no quote");
            return Ok(None);
        };

        let quote = PriceQuote::new(price, observed);
        if !quote.is_within(at, tolerance) {
            debug!(token = %token, observed = %observed, "Price quote outside tolerance window");
            return Ok(None);
        }
        Ok(Some(quote))
    }

    fn name(&self) -> &'static str {
        "HttpPriceOracle"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn token() -> TokenType {
        TokenType::new("0x2::sui::SUI")
    }

    #[test]
    fn test_parse_numeric_and_string_prices() {
        let price = parse_price(&token(), Some(json!(2.5))).unwrap().unwrap();
        assert_eq!(price.to_string(), "2.5");

        let price = parse_price(&token(), Some(json!("0.000001234"))).unwrap().unwrap();
        assert_eq!(price.to_string(), "0.000001234");
    }

    #[test]
    fn test_parse_missing_price() {
        assert!(parse_price(&token(), None).unwrap().is_none());
        assert!(parse_price(&token(), Some(json!(null))).unwrap().is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_price(&token(), Some(json!(-1))),
            Err(PriceError::InvalidPrice { .. })
        ));
        assert!(parse_price(&token(), Some(json!("abc"))).is_err());
        assert!(parse_price(&token(), Some(json!({"usd": 1}))).is_err());
    }

    #[test]
    fn test_parse_rejects_extreme_exponents() {
        for value in ["1E-9000000000000000", "1E+9000000000000000", "1e-37", "5E+40"] {
            assert!(
                matches!(
                    parse_price(&token(), Some(json!(value))),
                    Err(PriceError::InvalidPrice { .. })
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_excessive_digits() {
        let digits = "1".repeat(65);
        assert!(parse_price(&token(), Some(json!(digits))).is_err());
    }

    #[test]
    fn test_parse_accepts_prices_at_the_bounds() {
        let price = parse_price(&token(), Some(json!("1e-36"))).unwrap().unwrap();
        assert_eq!(price.as_decimal().as_bigint_and_exponent().1, 36);

        let price = parse_price(&token(), Some(json!("1.5000000000"))).unwrap().unwrap();
        assert_eq!(price.to_string(), "1.5");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let oracle = HttpPriceOracle::new(reqwest::Client::new(), "https://app.sentio.xyz/");
        assert_eq!(oracle.endpoint(), "https://app.sentio.xyz/api/v1/prices");
    }
}
