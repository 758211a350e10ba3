//! Prelude module for common imports.
//!
//! ```ignore
//! use cachetrace::prelude::*;
//! ```

// Error types
pub use crate::error::{ClientError, Result};

// Configuration
pub use crate::config::TelemetryConfig;

// Client contract and facade
pub use crate::client::{CacheClient, ServerStats};
pub use crate::instrumented::InstrumentedClient;

// Metrics and tracking
pub use crate::metrics::{CallOutcome, Metrics};
pub use crate::tracking::{Clock, SystemClock, TrackingOperation};

// Common external crates
pub use bytes::Bytes;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, trace, warn};
