//! Prometheus metrics for instrumented cache calls
//!
//! Two metric families, both labeled by `method`, `status` and `error`:
//! a call counter and a latency distribution in milliseconds. These are the
//! aggregation views every tracked operation reports into.

use crate::config::TelemetryConfig;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

/// Label keys attached to every measurement
pub const LABEL_KEYS: [&str; 3] = ["method", "status", "error"];

/// Outcome of one tracked call, as it appears in the `status`/`error` labels.
///
/// Exactly one of the two labels is non-empty: `"ok"` in `status` on success,
/// the error description in `error` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Ok,
    Error(String),
}

impl CallOutcome {
    /// Value for the `status` label
    pub fn status(&self) -> &str {
        match self {
            CallOutcome::Ok => "ok",
            CallOutcome::Error(_) => "",
        }
    }

    /// Value for the `error` label
    pub fn error(&self) -> &str {
        match self {
            CallOutcome::Ok => "",
            CallOutcome::Error(desc) => desc,
        }
    }
}

/// Metrics registry for one instrumented client
///
/// Each instance owns its own Prometheus registry, so tests and multiple
/// clients in one process stay isolated. The namespace must be a valid
/// Prometheus metric name prefix.
pub struct Metrics {
    pub registry: Registry,

    /// Number of calls made, per method and outcome
    pub calls: IntCounterVec,

    /// Distribution of per-call latencies in milliseconds
    pub latency_ms: HistogramVec,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new(config: &TelemetryConfig) -> Self {
        let registry = Registry::new();

        let calls = IntCounterVec::new(
            Opts::new("calls_total", "The number of calls made").namespace(&config.namespace),
            &LABEL_KEYS,
        )
        .unwrap();

        let latency_ms = HistogramVec::new(
            HistogramOpts::new("latency_ms", "The distribution of call latencies in milliseconds")
                .namespace(&config.namespace)
                .buckets(config.latency_buckets_ms.clone()),
            &LABEL_KEYS,
        )
        .unwrap();

        registry.register(Box::new(calls.clone())).unwrap();
        registry.register(Box::new(latency_ms.clone())).unwrap();

        Self {
            registry,
            calls,
            latency_ms,
        }
    }

    /// Commit one measurement: a latency observation plus a call-count
    /// increment of 1, both carrying the same labels.
    pub fn record(&self, method: &str, outcome: &CallOutcome, latency_ms: f64) {
        let labels = [method, outcome.status(), outcome.error()];
        self.latency_ms.with_label_values(&labels).observe(latency_ms);
        self.calls.with_label_values(&labels).inc();
    }

    /// Get Prometheus formatted metrics
    pub fn gather(&self) -> String {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(&TelemetryConfig::default())
    }
}
