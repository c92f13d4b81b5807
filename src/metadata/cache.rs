// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cache backends for resolved coin metadata
//!
//! - [`MemoryMetadataCache`]: process-lifetime map keyed by coin type
//! - [`NoOpMetadataCache`]: disables caching (every event performs a lookup)
//!
//! Coin decimals never change for a given type, so entries have no TTL. The
//! cache is created empty at startup, filled lazily and never torn down.
//! Concurrent inserts for the same key are last-writer-wins, which is safe
//! because the value for a key is deterministic.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{TokenMetadata, TokenType};

/// Statistics about cache performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that fell through to the metadata source
    pub misses: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.entries,
            self.hit_rate()
        )
    }
}

/// Trait for metadata cache backends
///
/// Implementations must be thread-safe; events for different coins may be
/// resolved concurrently.
#[async_trait]
pub trait MetadataCache: Send + Sync {
    /// Returns the cached metadata for a coin type, if any
    async fn get(&self, token: &TokenType) -> Option<TokenMetadata>;

    /// Stores metadata obtained from the source
    ///
    /// Callers must not insert fallback values.
    async fn insert(&self, token: TokenType, metadata: TokenMetadata);

    /// Returns current cache statistics
    async fn stats(&self) -> CacheStats;

    /// Returns the name of this cache backend (for logging)
    fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct MemoryCacheState {
    entries: HashMap<TokenType, TokenMetadata>,
    stats: CacheStats,
}

/// In-memory metadata cache
///
/// # Examples
///
/// ```rust
/// use sui_defi_metrics::{MemoryMetadataCache, MetadataCache, TokenDecimals, TokenMetadata, TokenType};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = MemoryMetadataCache::new();
/// let sui = TokenType::new("0x2::sui::SUI");
///
/// assert!(cache.get(&sui).await.is_none());
/// cache.insert(sui.clone(), TokenMetadata::new(TokenDecimals::SUI)).await;
/// assert_eq!(cache.get(&sui).await.map(|m| m.decimals), Some(TokenDecimals::SUI));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryMetadataCache {
    state: Mutex<MemoryCacheState>,
}

impl MemoryMetadataCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataCache for MemoryMetadataCache {
    async fn get(&self, token: &TokenType) -> Option<TokenMetadata> {
        let mut state = self.state.lock().await;
        match state.entries.get(token).copied() {
            Some(metadata) => {
                state.stats.hits += 1;
                Some(metadata)
            }
            None => {
                state.stats.misses += 1;
                None
            }
        }
    }

    async fn insert(&self, token: TokenType, metadata: TokenMetadata) {
        let mut state = self.state.lock().await;
        state.entries.insert(token, metadata);
        state.stats.entries = state.entries.len();
    }

    async fn stats(&self) -> CacheStats {
        self.state.lock().await.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryMetadataCache"
    }
}

/// A no-operation cache that disables caching entirely
///
/// Every resolution goes to the metadata source. Useful in tests that count
/// source calls, or when the source is itself a cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetadataCache;

#[async_trait]
impl MetadataCache for NoOpMetadataCache {
    async fn get(&self, _token: &TokenType) -> Option<TokenMetadata> {
        None
    }

    async fn insert(&self, _token: TokenType, _metadata: TokenMetadata) {}

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }

    fn name(&self) -> &'static str {
        "NoOpMetadataCache"
    }
}
