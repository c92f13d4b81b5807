//! Span creation helpers for pipeline operations.
//!
//! Telemetry stays out of business logic: each instrumented operation has a
//! span helper here, and the operation wraps its future with
//! [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     async { /* business logic */ }.instrument(span).await
//! }
//! ```

use chrono::{DateTime, Utc};
use tracing::{Level, Span};

use crate::{EventId, EventKind, TokenType};

/// Create span for processing one decoded event end to end.
///
/// Parent: None (root span for this operation)
/// Children: resolve_metadata and resolve_price spans (one per leg)
#[inline]
pub(crate) fn process_event(kind: EventKind, id: &EventId) -> Span {
    tracing::span!(
        Level::INFO,
        "sui_defi_metrics.process_event",
        kind = %kind,
        event_seq = %id.event_seq,
        tx_digest = %id.tx_digest,
    )
}

/// Create span for resolving coin metadata.
///
/// Parent: process_event span
#[inline]
pub(crate) fn resolve_metadata(token: &TokenType) -> Span {
    tracing::debug_span!("sui_defi_metrics.resolve_metadata", token = %token)
}

/// Create span for resolving a unit price.
///
/// Parent: process_event span
#[inline]
pub(crate) fn resolve_price(token: &TokenType, at: DateTime<Utc>) -> Span {
    tracing::debug_span!(
        "sui_defi_metrics.resolve_price",
        token = %token,
        at = %at.to_rfc3339(),
    )
}

/// Create span for replaying a stream of decoded events.
///
/// Parent: None
/// Children: process_event spans (one per line)
#[inline]
pub(crate) fn replay() -> Span {
    tracing::info_span!("sui_defi_metrics.replay")
}
