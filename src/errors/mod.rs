//! Error types for the sui-defi-metrics library.
//!
//! Same hybrid approach throughout:
//!
//! - **Module-specific errors** for fine-grained handling
//! - **Unified error type** ([`IndexerError`]) when the source doesn't matter
//!
//! # Architecture
//!
//! - [`MetadataError`] - coin metadata lookups (absorbed by the resolver)
//! - [`PriceError`] - price oracle lookups (absorbed by the price client)
//! - [`EventError`] - malformed or inconsistent decoded events
//! - [`ConfigError`] - environment configuration
//!
//! Only [`EventError`] and [`ConfigError`] ever reach a caller of the public
//! pipeline API.

mod config;
mod events;
mod metadata;
mod price;

pub use config::ConfigError;
pub use events::EventError;
pub use metadata::MetadataError;
pub use price::PriceError;

/// Unified error type for all operations.
///
/// All module-specific error types convert into `IndexerError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    /// Error from a metadata lookup.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error from a price lookup.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// Error from event processing.
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
