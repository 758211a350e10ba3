//! # cachetrace
//!
//! Tracing and Prometheus metrics instrumentation for memcached clients.
//!
//! Wraps any client implementing [`CacheClient`] so that every remote
//! operation is executed inside a tracing span and reported as a latency
//! observation plus a call-count increment, labeled by method and outcome.
//! Results and errors pass through unchanged, so swapping a bare client for
//! an instrumented one is a one-line change at construction time.
//!
//! ## Example
//!
//! ```ignore
//! use cachetrace::prelude::*;
//!
//! let config = TelemetryConfig::default();
//! let metrics = Arc::new(Metrics::new(&config));
//! let mut client = InstrumentedClient::new(my_memcache_client, Arc::clone(&metrics));
//!
//! client.set(b"greeting", b"hello", 0)?;
//! let value = client.get(b"greeting")?;
//!
//! // Prometheus text exposition, e.g. for a /metrics endpoint
//! let exposition = metrics.gather();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌────────────────────┐     ┌───────────────────┐
//! │ caller   │────▶│ InstrumentedClient │────▶│ underlying client │
//! └──────────┘     │  └─ TrackingOp ────┼──┐  │ (wire protocol,   │
//!                  └────────────────────┘  │  │  pooling, sharding)│
//!                                          │  └───────────────────┘
//!                                          ▼
//!                       span (tracing) + latency/count (prometheus)
//! ```
//!
//! The wrapper adds no retries, no locks and no failure modes of its own;
//! concurrency and cancellation semantics are those of the wrapped client.

// Modules
pub mod client;
pub mod config;
pub mod error;
pub mod instrumented;
pub mod metrics;
pub mod prelude;
pub mod tracking;

// Re-exports for convenience
pub use client::{CacheClient, ServerStats};
pub use config::TelemetryConfig;
pub use error::{ClientError, Result};
pub use instrumented::InstrumentedClient;
pub use metrics::{CallOutcome, Metrics};
pub use tracking::TrackingOperation;
