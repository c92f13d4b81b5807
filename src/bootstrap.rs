use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncWriteExt, BufReader};
use tracing::info;

use crate::config::constants::packages;
use crate::{
    replay, EventPipeline, HttpMetadataSource, HttpPriceOracle, IndexerConfig,
    MemoryMetadataCache, MetadataCache, NoOpMetadataCache, PriceOracleClient,
    PrometheusMetricsSink, TokenMetadataResolver, TracingRecordSink,
};

/// Main entry point for the application.
///
/// Reads decoded events as NDJSON from `EVENTS_FILE` (or stdin), logs one
/// record per event and prints the Prometheus text exposition to stdout once
/// the input is exhausted.
pub async fn run() -> anyhow::Result<()> {
    let config = IndexerConfig::from_env().context("Invalid configuration")?;

    info!(
        dca_package = packages::DCA,
        dca_start_checkpoint = packages::DCA_START_CHECKPOINT,
        suite_package = packages::SUITE,
        suite_start_checkpoint = packages::SUITE_START_CHECKPOINT,
        metadata_api = %config.metadata_api_url,
        price_api = %config.price_api_url,
        network = %config.price_network,
        "Starting event pipeline"
    );

    let metrics = Arc::new(PrometheusMetricsSink::default());
    let pipeline = build_pipeline(&config, metrics.clone())?;

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match dotenvy::var("EVENTS_FILE") {
        Ok(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open {path}"))?;
            Box::new(BufReader::new(file))
        }
        Err(_) => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let summary = replay(&pipeline, input).await?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        cache = %pipeline.metadata().cache_stats().await,
        "Input exhausted"
    );

    let exposition = metrics.gather_text()?;
    let mut stdout = tokio::io::stdout();
    stdout.write_all(exposition.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}

/// Wire the HTTP-backed resolver and price client into a pipeline.
pub fn build_pipeline(
    config: &IndexerConfig,
    metrics: Arc<PrometheusMetricsSink>,
) -> anyhow::Result<EventPipeline> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let cache: Arc<dyn MetadataCache> = if config.metadata_cache {
        Arc::new(MemoryMetadataCache::new())
    } else {
        Arc::new(NoOpMetadataCache)
    };
    let source = Arc::new(HttpMetadataSource::new(
        client.clone(),
        &config.metadata_api_url,
    ));
    let metadata = TokenMetadataResolver::new(source, cache).with_fallback(config.fallback_decimals);

    let mut oracle = HttpPriceOracle::new(client, &config.price_api_url);
    if let Some(key) = &config.price_api_key {
        oracle = oracle.with_api_key(key);
    }
    let prices = PriceOracleClient::new(Arc::new(oracle), &config.price_network)
        .with_tolerance(config.price_tolerance);

    Ok(EventPipeline::new(
        metadata,
        prices,
        Arc::new(TracingRecordSink),
        metrics,
    ))
}
