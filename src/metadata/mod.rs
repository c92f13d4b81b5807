//! Coin metadata resolution
//!
//! [`TokenMetadataResolver`] turns a coin type into its decimal precision. It
//! never fails: when the source errors, the configured fallback (9 decimals by
//! default) is returned and a warning is logged. A wrong precision scales the
//! downstream dollar figures, but the record is still emitted.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use sui_defi_metrics::{
//!     MemoryMetadataCache, MetadataError, MetadataSource, TokenDecimals, TokenMetadata,
//!     TokenMetadataResolver, TokenType,
//! };
//!
//! struct Unreachable;
//!
//! #[async_trait]
//! impl MetadataSource for Unreachable {
//!     async fn fetch(&self, token: &TokenType) -> Result<TokenMetadata, MetadataError> {
//!         Err(MetadataError::unavailable(token.as_str(), "offline"))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "Unreachable"
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let resolver = TokenMetadataResolver::new(Arc::new(Unreachable), Arc::new(MemoryMetadataCache::new()));
//! let metadata = resolver.resolve(&TokenType::new("0x2::sui::SUI")).await;
//! assert_eq!(metadata.decimals, TokenDecimals::SUI);
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn, Instrument};

use crate::config::constants::defaults;
use crate::{spans, MetadataError, TokenDecimals, TokenMetadata, TokenType};

pub mod cache;
mod http;

pub use cache::{CacheStats, MemoryMetadataCache, MetadataCache, NoOpMetadataCache};
pub use http::HttpMetadataSource;

/// Trait for coin metadata backends
///
/// Implementations report failures as [`MetadataError`]; the resolver decides
/// how to recover.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetches metadata for one coin type
    async fn fetch(&self, token: &TokenType) -> Result<TokenMetadata, MetadataError>;

    /// Returns the name of this source (for logging)
    fn name(&self) -> &'static str;
}

/// Resolves coin types to metadata with caching and a fallback on failure
#[derive(Clone)]
pub struct TokenMetadataResolver {
    source: Arc<dyn MetadataSource>,
    cache: Arc<dyn MetadataCache>,
    fallback: TokenDecimals,
}

impl std::fmt::Debug for TokenMetadataResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMetadataResolver")
            .field("source", &self.source.name())
            .field("cache", &self.cache.name())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl TokenMetadataResolver {
    /// Create a resolver with the default fallback of 9 decimals
    pub fn new(source: Arc<dyn MetadataSource>, cache: Arc<dyn MetadataCache>) -> Self {
        Self {
            source,
            cache,
            fallback: defaults::FALLBACK_DECIMALS,
        }
    }

    /// Override the decimals substituted when the source fails
    pub fn with_fallback(mut self, fallback: TokenDecimals) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> TokenDecimals {
        self.fallback
    }

    /// Resolve metadata for a coin type
    ///
    /// Cache hits skip the source. Successful lookups are cached; fallback
    /// values are not, so a transient outage does not pin a wrong precision
    /// for the rest of the process.
    pub async fn resolve(&self, token: &TokenType) -> TokenMetadata {
        let span = spans::resolve_metadata(token);
        async {
            if let Some(metadata) = self.cache.get(token).await {
                debug!(decimals = metadata.decimals.as_u8(), "Metadata cache hit");
                return metadata;
            }

            match self.source.fetch(token).await {
                Ok(metadata) => {
                    if !metadata.decimals.is_reasonable() {
                        warn!(
                            decimals = metadata.decimals.as_u8(),
                            "Unusually large decimals reported by metadata source"
                        );
                    }
                    self.cache.insert(token.clone(), metadata).await;
                    metadata
                }
                Err(error) => {
                    warn!(
                        source = self.source.name(),
                        error = %error,
                        fallback = self.fallback.as_u8(),
                        "Metadata lookup failed, using fallback decimals"
                    );
                    TokenMetadata::new(self.fallback)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Current cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingSource {
        calls: AtomicUsize,
        result: Option<TokenDecimals>,
    }

    #[async_trait]
    impl MetadataSource for CountingSource {
        async fn fetch(&self, token: &TokenType) -> Result<TokenMetadata, MetadataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .map(TokenMetadata::new)
                .ok_or_else(|| MetadataError::unavailable(token.as_str(), "down"))
        }

        fn name(&self) -> &'static str {
            "CountingSource"
        }
    }

    fn source(result: Option<TokenDecimals>) -> Arc<CountingSource> {
        Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            result,
        })
    }

    #[tokio::test]
    async fn test_success_is_cached() {
        let src = source(Some(TokenDecimals::USDC));
        let resolver = TokenMetadataResolver::new(src.clone(), Arc::new(MemoryMetadataCache::new()));
        let token = TokenType::new("0xabc::usdc::USDC");

        assert_eq!(resolver.resolve(&token).await.decimals, TokenDecimals::USDC);
        assert_eq!(resolver.resolve(&token).await.decimals, TokenDecimals::USDC);
        assert_eq!(src.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallback_is_not_cached() {
        let src = source(None);
        let resolver = TokenMetadataResolver::new(src.clone(), Arc::new(MemoryMetadataCache::new()));
        let token = TokenType::new("0xabc::x::X");

        assert_eq!(resolver.resolve(&token).await.decimals, TokenDecimals::SUI);
        assert_eq!(resolver.resolve(&token).await.decimals, TokenDecimals::SUI);
        assert_eq!(src.calls.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.cache_stats().await.entries, 0);
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let resolver = TokenMetadataResolver::new(source(None), Arc::new(NoOpMetadataCache))
            .with_fallback(TokenDecimals::STANDARD);

        let metadata = resolver.resolve(&TokenType::new("0x1::a::A")).await;
        assert_eq!(metadata.decimals, TokenDecimals::STANDARD);
    }
}
