// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single execution path shared by every event kind
//!
//! For one event:
//!
//! 1. Extract the asset legs (rejects malformed list events before anything is counted)
//! 2. Increment the kind's counter
//! 3. Resolve decimals and USD value for every leg
//! 4. Emit the record
//! 5. Record the declared gauges, tagged by coin type
//!
//! Legs of one event are resolved concurrently; results keep input order, so
//! records and gauge sequences are identical to sequential processing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, Instrument};

use super::decoded::{AssetLeg, DecodedEvent};
use super::record::{EventRecord, PricedLeg};
use crate::sink::{MetricsSink, RecordSink};
use crate::{spans, EventError, PriceOracleClient, TokenMetadataResolver};

/// Turns decoded events into records and metrics
#[derive(Clone)]
pub struct EventPipeline {
    metadata: TokenMetadataResolver,
    prices: PriceOracleClient,
    records: Arc<dyn RecordSink>,
    metrics: Arc<dyn MetricsSink>,
}

impl std::fmt::Debug for EventPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPipeline")
            .field("metadata", &self.metadata)
            .field("prices", &self.prices)
            .finish_non_exhaustive()
    }
}

impl EventPipeline {
    pub fn new(
        metadata: TokenMetadataResolver,
        prices: PriceOracleClient,
        records: Arc<dyn RecordSink>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            metadata,
            prices,
            records,
            metrics,
        }
    }

    pub fn metadata(&self) -> &TokenMetadataResolver {
        &self.metadata
    }

    /// Process one decoded event
    ///
    /// Metadata and pricing failures never surface here; the only error is a
    /// malformed event, in which case nothing is counted or emitted.
    pub async fn process(&self, event: &DecodedEvent) -> Result<EventRecord, EventError> {
        let kind = event.kind();
        let span = spans::process_event(kind, &event.id);
        async {
            let spec = kind.spec();
            let legs = event.payload.legs()?;

            self.metrics.increment_counter(spec.counter, 1);

            let priced = join_all(
                legs.into_iter()
                    .map(|leg| self.price_leg(leg, event.timestamp)),
            )
            .await;

            let record = EventRecord::build(event, spec, &priced);
            self.records.emit(&record);

            for gauge in spec.gauges {
                for leg in priced.iter().filter(|leg| leg.role == gauge.role) {
                    self.metrics
                        .record_gauge(gauge.amount, leg.normalized.as_decimal(), &leg.token);
                    self.metrics
                        .record_gauge(gauge.usd, leg.usd.as_decimal(), &leg.token);
                }
            }

            debug!(record = spec.record, legs = priced.len(), "Event processed");
            Ok(record)
        }
        .instrument(span)
        .await
    }

    /// Decode one JSON line and process it
    pub async fn process_json(&self, line: &str) -> Result<EventRecord, EventError> {
        let event: DecodedEvent = serde_json::from_str(line)?;
        self.process(&event).await
    }

    async fn price_leg(&self, leg: AssetLeg, at: DateTime<Utc>) -> PricedLeg {
        let metadata = self.metadata.resolve(&leg.token).await;
        let normalized = leg.raw.normalize(metadata.decimals);
        let usd = self.prices.usd_value(&leg.token, &normalized, at).await;

        PricedLeg {
            role: leg.role,
            token: leg.token,
            raw: leg.raw,
            decimals: metadata.decimals,
            normalized,
            usd,
        }
    }
}
