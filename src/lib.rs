//! Event-to-metric pipeline for Sui DeFi protocol events.
//!
//! Decoded events from a dollar-cost-averaging package and a multi-module DeFi
//! suite are normalized with exact decimal arithmetic, priced in USD through a
//! historical price oracle, and emitted as one structured record plus named
//! counters and gauges per event.
//!
//! # Components
//!
//! - [`TokenMetadataResolver`] - coin type to decimals, with a fallback of 9
//! - [`PriceOracleClient`] - USD value at an event timestamp, zero when unpriced
//! - [`normalize`] - `raw / 10^decimals` without rounding
//! - [`EventPipeline`] - one declarative path for every event kind
//!
//! # Example
//!
//! ```rust
//! use sui_defi_metrics::{normalize, TokenAmount, TokenDecimals};
//!
//! let amount = normalize(&TokenAmount::from(1_000_000_000u64), TokenDecimals::SUI);
//! assert_eq!(amount.to_string(), "1");
//! ```

pub mod bootstrap;
pub mod config;
mod errors;
pub mod events;
pub mod metadata;
pub mod price;
pub mod sink;
mod spans;
pub mod types;

pub use config::{IndexerConfig, IndexerConfigBuilder};
pub use errors::*;
pub use events::{
    replay, DecodedEvent, EventId, EventKind, EventPayload, EventPipeline, EventRecord,
    FieldValue, ReplaySummary,
};
pub use metadata::{
    CacheStats, HttpMetadataSource, MemoryMetadataCache, MetadataCache, MetadataSource,
    NoOpMetadataCache, TokenMetadataResolver,
};
pub use price::{HttpPriceOracle, PriceOracle, PriceOracleClient, PriceQuote};
pub use sink::{
    InMemorySink, MetricsSink, PrometheusMetricsSink, RecordSink, TracingRecordSink,
};
pub use types::metadata::TokenMetadata;
pub use types::tokens::*;
