//! Output sinks for records and metrics
//!
//! The pipeline hands every record to a [`RecordSink`] and every counter
//! increment or gauge observation to a [`MetricsSink`]. Storage and
//! aggregation belong to the sink.
//!
//! - [`TracingRecordSink`]: structured `tracing` events
//! - [`PrometheusMetricsSink`]: counters and gauges in a `prometheus::Registry`
//! - [`InMemorySink`]: both traits, for tests and embedding

use bigdecimal::BigDecimal;

use crate::{EventRecord, TokenType};

mod logging;
mod memory;
mod registry;

pub use logging::TracingRecordSink;
pub use memory::{GaugeObservation, InMemorySink};
pub use registry::PrometheusMetricsSink;

/// Receives one structured record per processed event
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &EventRecord);
}

/// Receives counter increments and gauge observations
pub trait MetricsSink: Send + Sync {
    /// Add `delta` to the counter `name`
    fn increment_counter(&self, name: &'static str, delta: u64);

    /// Record the latest `value` of gauge `name` for `token`
    fn record_gauge(&self, name: &'static str, value: &BigDecimal, token: &TokenType);
}
