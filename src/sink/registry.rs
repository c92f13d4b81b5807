//! Metrics sink backed by a `prometheus::Registry`

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use bigdecimal::{BigDecimal, ToPrimitive};
use prometheus::{Encoder, GaugeVec, IntCounter, Opts, Registry, TextEncoder};
use tracing::warn;

use super::MetricsSink;
use crate::TokenType;

const TOKEN_LABEL: &str = "token";

#[derive(Default)]
struct Collectors {
    counters: HashMap<&'static str, IntCounter>,
    gauges: HashMap<&'static str, GaugeVec>,
}

/// Registers counters and gauges lazily, the first time each name is seen
///
/// Gauges carry a single `token` label. Prometheus stores `f64`, so gauge
/// values lose precision here; records keep the exact decimals.
pub struct PrometheusMetricsSink {
    registry: Registry,
    collectors: Mutex<Collectors>,
}

impl std::fmt::Debug for PrometheusMetricsSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrometheusMetricsSink").finish_non_exhaustive()
    }
}

impl Default for PrometheusMetricsSink {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl PrometheusMetricsSink {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            collectors: Mutex::new(Collectors::default()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Text exposition of everything registered so far
    pub fn gather_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    fn collectors(&self) -> MutexGuard<'_, Collectors> {
        self.collectors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn counter(&self, name: &'static str) -> Option<IntCounter> {
        let mut collectors = self.collectors();
        if let Some(counter) = collectors.counters.get(name) {
            return Some(counter.clone());
        }

        let counter = IntCounter::new(name, format!("Number of {name} events processed"))
            .and_then(|counter| {
                self.registry.register(Box::new(counter.clone()))?;
                Ok(counter)
            });
        match counter {
            Ok(counter) => {
                collectors.counters.insert(name, counter.clone());
                Some(counter)
            }
            Err(error) => {
                warn!(counter = name, error = %error, "Failed to register counter");
                None
            }
        }
    }

    fn gauge(&self, name: &'static str) -> Option<GaugeVec> {
        let mut collectors = self.collectors();
        if let Some(gauge) = collectors.gauges.get(name) {
            return Some(gauge.clone());
        }

        let gauge = GaugeVec::new(Opts::new(name, format!("Latest {name} per token")), &[TOKEN_LABEL])
            .and_then(|gauge| {
                self.registry.register(Box::new(gauge.clone()))?;
                Ok(gauge)
            });
        match gauge {
            Ok(gauge) => {
                collectors.gauges.insert(name, gauge.clone());
                Some(gauge)
            }
            Err(error) => {
                warn!(gauge = name, error = %error, "Failed to register gauge");
                None
            }
        }
    }
}

impl MetricsSink for PrometheusMetricsSink {
    fn increment_counter(&self, name: &'static str, delta: u64) {
        if let Some(counter) = self.counter(name) {
            counter.inc_by(delta);
        }
    }

    fn record_gauge(&self, name: &'static str, value: &BigDecimal, token: &TokenType) {
        let Some(gauge) = self.gauge(name) else {
            return;
        };
        match value.to_f64() {
            Some(value) => gauge.with_label_values(&[token.as_str()]).set(value),
            None => warn!(gauge = name, value = %value, "Gauge value not representable as f64"),
        }
    }
}
