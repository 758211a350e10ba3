//! Span and latency tracking around individual client calls
//!
//! [`TrackingOperation`] is the single place where observability happens: it
//! wraps one invocation of an underlying client method in a tracing span,
//! classifies the outcome, and commits exactly one measurement (latency plus
//! call count) to the metrics registry. The facade in
//! [`crate::instrumented`] routes every remote operation through here.

use crate::metrics::{CallOutcome, Metrics};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::field;

/// Millisecond clock, injectable so tests can pin latencies
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed on some fixed monotonic timeline
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock anchored at construction time
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually driven clock for tests
pub struct ManualClock {
    // f64 milliseconds stored as bits
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(ms: f64) -> Self {
        Self {
            now_ms: AtomicU64::new(ms.to_bits()),
        }
    }

    /// Move the clock to an absolute time in milliseconds
    pub fn set(&self, ms: f64) {
        self.now_ms.store(ms.to_bits(), Ordering::SeqCst);
    }

    /// Advance the clock by the given number of milliseconds
    pub fn advance(&self, delta_ms: f64) {
        self.set(self.now_ms() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.now_ms.load(Ordering::SeqCst))
    }
}

/// Wraps individual client calls with a span and a measurement
///
/// Holds handles to the shared metrics registry and clock; cloning is cheap
/// and clones report into the same registry.
#[derive(Clone)]
pub struct TrackingOperation {
    metrics: Arc<Metrics>,
    clock: Arc<dyn Clock>,
}

impl TrackingOperation {
    /// Create a tracker reporting into the given metrics registry
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self::with_clock(metrics, Arc::new(SystemClock::new()))
    }

    /// Create a tracker with an explicit clock (used by tests)
    pub fn with_clock(metrics: Arc<Metrics>, clock: Arc<dyn Clock>) -> Self {
        Self { metrics, clock }
    }

    /// Handle to the metrics registry this tracker reports into
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Run `invoke` inside a span named after `method`, then record its
    /// latency and outcome.
    ///
    /// The span is entered for the duration of the call and closed on every
    /// exit path. On success the span and measurement carry `status = "ok"`;
    /// on failure they carry the error's description, and the error itself is
    /// returned to the caller unchanged. Exactly one measurement is committed
    /// per invocation either way.
    pub fn trace_and_record_stats<T, E: fmt::Display>(
        &self,
        method: &'static str,
        invoke: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start_ms = self.clock.now_ms();

        let span = tracing::info_span!(
            "memcache.call",
            method,
            status = field::Empty,
            error = field::Empty
        );
        let result = span.in_scope(invoke);

        let outcome = match &result {
            Ok(_) => {
                span.record("status", "ok");
                CallOutcome::Ok
            }
            Err(e) => {
                let desc = e.to_string();
                span.record("error", desc.as_str());
                CallOutcome::Error(desc)
            }
        };

        let latency_ms = self.clock.now_ms() - start_ms;
        self.metrics.record(method, &outcome, latency_ms);

        result
    }
}
