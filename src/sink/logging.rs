//! Record sink that logs through `tracing`

use tracing::{info, warn};

use super::RecordSink;
use crate::EventRecord;

/// Emits each record as an `info` event on target `event_record`
///
/// The record body is attached as a JSON string field so any subscriber
/// (plain or JSON formatted) preserves field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecordSink;

impl RecordSink for TracingRecordSink {
    fn emit(&self, record: &EventRecord) {
        match record.to_json() {
            Ok(json) => info!(target: "event_record", record = record.name(), fields = %json),
            Err(error) => warn!(record = record.name(), error = %error, "Failed to serialize record"),
        }
    }
}
