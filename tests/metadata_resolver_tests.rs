//! Caching and fallback behavior of TokenMetadataResolver

mod helpers;

use std::sync::Arc;

use helpers::{token, MockMetadataSource, DEEP, SUI, USDC};
use sui_defi_metrics::{
    MemoryMetadataCache, MetadataCache, NoOpMetadataCache, TokenDecimals, TokenMetadataResolver,
};

#[tokio::test]
async fn test_successful_lookups_are_cached() {
    let source = Arc::new(MockMetadataSource::new().with(USDC, 6));
    let cache = Arc::new(MemoryMetadataCache::new());
    let resolver = TokenMetadataResolver::new(source.clone(), cache.clone());

    for _ in 0..3 {
        let metadata = resolver.resolve(&token(USDC)).await;
        assert_eq!(metadata.decimals, TokenDecimals::USDC);
    }

    assert_eq!(source.call_count(), 1);
    let stats = resolver.cache_stats().await;
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
}

#[tokio::test]
async fn test_fallback_is_not_cached() {
    let source = Arc::new(MockMetadataSource::new());
    let cache = Arc::new(MemoryMetadataCache::new());
    let resolver = TokenMetadataResolver::new(source.clone(), cache.clone());

    for _ in 0..2 {
        let metadata = resolver.resolve(&token(DEEP)).await;
        assert_eq!(metadata.decimals, TokenDecimals::new(9));
    }

    assert_eq!(source.call_count(), 2);
    assert!(cache.get(&token(DEEP)).await.is_none());
}

#[tokio::test]
async fn test_custom_fallback() {
    let resolver = TokenMetadataResolver::new(
        Arc::new(MockMetadataSource::new()),
        Arc::new(NoOpMetadataCache),
    )
    .with_fallback(TokenDecimals::new(6));

    assert_eq!(resolver.fallback(), TokenDecimals::new(6));
    assert_eq!(
        resolver.resolve(&token(DEEP)).await.decimals,
        TokenDecimals::new(6)
    );
}

#[tokio::test]
async fn test_noop_cache_always_queries_source() {
    let source = Arc::new(MockMetadataSource::new().with(SUI, 9));
    let resolver = TokenMetadataResolver::new(source.clone(), Arc::new(NoOpMetadataCache));

    resolver.resolve(&token(SUI)).await;
    resolver.resolve(&token(SUI)).await;

    assert_eq!(source.call_count(), 2);
    assert_eq!(resolver.cache_stats().await.entries, 0);
}

#[tokio::test]
async fn test_prefixed_and_bare_types_share_cache_entry() {
    let source = Arc::new(MockMetadataSource::new().with(USDC, 6));
    let resolver =
        TokenMetadataResolver::new(source.clone(), Arc::new(MemoryMetadataCache::new()));

    resolver.resolve(&token(USDC)).await;
    resolver
        .resolve(&token(USDC.trim_start_matches("0x")))
        .await;

    assert_eq!(source.call_count(), 1);
    assert_eq!(source.calls(), vec![token(USDC)]);
}
