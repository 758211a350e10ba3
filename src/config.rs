//! Configuration for cachetrace

use serde::Deserialize;

/// Default latency histogram bucket bounds in milliseconds.
///
/// Covers sub-millisecond cache hits up to multi-second timeouts:
/// [>=0ms, >=5ms, >=10ms, >=25ms, >=40ms, >=50ms, >=75ms, >=100ms,
///  >=200ms, >=400ms, >=600ms, >=800ms, >=1s, >=2s, >=4s, >=6s, >=10s, >=20s]
pub const DEFAULT_LATENCY_BUCKETS_MS: &[f64] = &[
    0.0, 5.0, 10.0, 25.0, 40.0, 50.0, 75.0, 100.0, 200.0, 400.0, 600.0, 800.0, 1000.0, 2000.0,
    4000.0, 6000.0, 10000.0, 20000.0,
];

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Prefix for exported metric names (e.g. `cachetrace_calls_total`)
    pub namespace: String,

    /// Latency histogram bucket upper bounds, in milliseconds.
    /// Must be strictly increasing.
    pub latency_buckets_ms: Vec<f64>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            namespace: "cachetrace".to_string(),
            latency_buckets_ms: DEFAULT_LATENCY_BUCKETS_MS.to_vec(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::ClientError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| crate::ClientError::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from environment variables or use defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(ns) = std::env::var("CACHETRACE_NAMESPACE") {
            config.namespace = ns;
        }

        if let Ok(buckets) = std::env::var("CACHETRACE_LATENCY_BUCKETS_MS") {
            let parsed: Vec<f64> = buckets
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if !parsed.is_empty() {
                config.latency_buckets_ms = parsed;
            }
        }

        config
    }
}
