//! In-memory sink implementing both record and metrics traits

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use bigdecimal::BigDecimal;

use super::{MetricsSink, RecordSink};
use crate::{EventRecord, TokenType};

/// One gauge recording, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeObservation {
    pub name: &'static str,
    pub token: TokenType,
    pub value: BigDecimal,
}

#[derive(Debug, Default)]
struct State {
    records: Vec<EventRecord>,
    counters: HashMap<&'static str, u64>,
    observations: Vec<GaugeObservation>,
}

/// Keeps emitted records, counter totals and gauge observations with exact decimals
///
/// # Examples
///
/// ```rust
/// use sui_defi_metrics::{InMemorySink, MetricsSink};
///
/// let sink = InMemorySink::new();
/// sink.increment_counter("events_send_send", 1);
/// assert_eq!(sink.counter("events_send_send"), 1);
/// assert_eq!(sink.counter("events_fee_fee"), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    state: Mutex<State>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All records emitted so far
    pub fn records(&self) -> Vec<EventRecord> {
        self.state().records.clone()
    }

    /// Counter total (zero if never incremented)
    pub fn counter(&self, name: &str) -> u64 {
        self.state().counters.get(name).copied().unwrap_or(0)
    }

    /// Latest value of gauge `name` for `token`
    pub fn gauge(&self, name: &str, token: &TokenType) -> Option<BigDecimal> {
        self.state()
            .observations
            .iter()
            .rev()
            .find(|obs| obs.name == name && &obs.token == token)
            .map(|obs| obs.value.clone())
    }

    /// Every gauge recording in arrival order
    pub fn observations(&self) -> Vec<GaugeObservation> {
        self.state().observations.clone()
    }
}

impl RecordSink for InMemorySink {
    fn emit(&self, record: &EventRecord) {
        self.state().records.push(record.clone());
    }
}

impl MetricsSink for InMemorySink {
    fn increment_counter(&self, name: &'static str, delta: u64) {
        *self.state().counters.entry(name).or_insert(0) += delta;
    }

    fn record_gauge(&self, name: &'static str, value: &BigDecimal, token: &TokenType) {
        self.state().observations.push(GaugeObservation {
            name,
            token: token.clone(),
            value: value.clone(),
        });
    }
}
