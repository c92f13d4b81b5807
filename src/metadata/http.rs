//! HTTP metadata source backed by the coin metadata service
//!
//! `GET {base}/metadata/coin-metadata/{coin_type}` returning
//! `{ "decimals": <u8>, ... }`.

use async_trait::async_trait;
use tracing::debug;

use super::MetadataSource;
use crate::{MetadataError, TokenMetadata, TokenType};

/// Metadata source that queries the coin metadata REST service
///
/// The shared `reqwest::Client` carries the configured timeout; no retries
/// are performed here.
#[derive(Debug, Clone)]
pub struct HttpMetadataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMetadataSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Request URL for a coin type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sui_defi_metrics::{HttpMetadataSource, TokenType};
    ///
    /// let source = HttpMetadataSource::new(reqwest::Client::new(), "https://api.patara.app/");
    /// assert_eq!(
    ///     source.url_for(&TokenType::new("2::sui::SUI")),
    ///     "https://api.patara.app/metadata/coin-metadata/0x2::sui::SUI"
    /// );
    /// ```
    pub fn url_for(&self, token: &TokenType) -> String {
        format!("{}/metadata/coin-metadata/{}", self.base_url, token)
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch(&self, token: &TokenType) -> Result<TokenMetadata, MetadataError> {
        let url = self.url_for(token);
        debug!(url = %url, "Requesting coin metadata");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| MetadataError::Transport {
                token: token.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                token: token.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| MetadataError::Transport {
                token: token.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| MetadataError::Decode {
            token: token.to_string(),
            source,
        })
    }

    fn name(&self) -> &'static str {
        "HttpMetadataSource"
    }
}
