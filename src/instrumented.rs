//! Instrumented client facade
//!
//! [`InstrumentedClient`] wraps any [`CacheClient`] and re-exposes its full
//! surface method-for-method, routing every remote operation through
//! [`TrackingOperation`]. Callers switch from the bare client to the
//! instrumented one by changing only the construction call; results and
//! errors pass through unchanged.
//!
//! The delegating impl is generated by a macro from a table of operation
//! names and signatures rather than hand-written twenty times. Because the
//! facade is generic, it covers single-endpoint and hash-routed clients
//! alike, and instrumented clients nest wherever a `CacheClient` is
//! expected.

use crate::client::{CacheClient, ServerStats};
use crate::metrics::Metrics;
use crate::tracking::TrackingOperation;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;

/// A [`CacheClient`] that reports a span and a latency/count measurement
/// for every remote operation.
pub struct InstrumentedClient<C> {
    inner: C,
    tracker: TrackingOperation,
}

impl<C: CacheClient> InstrumentedClient<C> {
    /// Wrap a client, reporting into the given metrics registry
    pub fn new(inner: C, metrics: Arc<Metrics>) -> Self {
        Self::with_tracker(inner, TrackingOperation::new(metrics))
    }

    /// Wrap a client with an explicit tracker (shared clock/registry)
    pub fn with_tracker(inner: C, tracker: TrackingOperation) -> Self {
        Self { inner, tracker }
    }

    /// Handle to the metrics registry this client reports into
    pub fn metrics(&self) -> &Arc<Metrics> {
        self.tracker.metrics()
    }

    /// Unwrap, returning the underlying client
    pub fn into_inner(self) -> C {
        self.inner
    }
}

/// Generates the delegating `CacheClient` impl from a table of
/// `operation name => signature` entries. Every generated method forwards
/// its arguments to the wrapped client through the tracker; `check_key`
/// stays outside the table because it never touches the server and has no
/// latency or error profile worth measuring.
macro_rules! delegate_tracked {
    ($( $op:literal => fn $method:ident( $($arg:ident : $ty:ty),* ) -> $ret:ty; )+) => {
        impl<C: CacheClient> CacheClient for InstrumentedClient<C> {
            type Error = C::Error;

            $(
                fn $method(&mut self, $($arg: $ty),*) -> Result<$ret, Self::Error> {
                    let inner = &mut self.inner;
                    self.tracker
                        .trace_and_record_stats($op, move || inner.$method($($arg),*))
                }
            )+

            fn check_key(&self, key: &[u8]) -> Result<(), Self::Error> {
                self.inner.check_key(key)
            }
        }
    };
}

delegate_tracked! {
    "memcache.get" => fn get(key: &[u8]) -> Option<Bytes>;
    "memcache.gets" => fn gets(key: &[u8]) -> Option<(Bytes, u64)>;
    "memcache.get_many" => fn get_many(keys: &[&[u8]]) -> HashMap<Vec<u8>, Bytes>;
    "memcache.gets_many" => fn gets_many(keys: &[&[u8]]) -> HashMap<Vec<u8>, (Bytes, u64)>;
    "memcache.set" => fn set(key: &[u8], value: &[u8], expire: u32) -> bool;
    "memcache.set_many" => fn set_many(values: &[(&[u8], &[u8])], expire: u32) -> Vec<Vec<u8>>;
    "memcache.add" => fn add(key: &[u8], value: &[u8], expire: u32) -> bool;
    "memcache.replace" => fn replace(key: &[u8], value: &[u8], expire: u32) -> bool;
    "memcache.append" => fn append(key: &[u8], value: &[u8]) -> bool;
    "memcache.prepend" => fn prepend(key: &[u8], value: &[u8]) -> bool;
    "memcache.cas" => fn cas(key: &[u8], value: &[u8], cas: u64, expire: u32) -> Option<bool>;
    "memcache.delete" => fn delete(key: &[u8]) -> bool;
    "memcache.delete_many" => fn delete_many(keys: &[&[u8]]) -> bool;
    "memcache.incr" => fn incr(key: &[u8], delta: u64) -> Option<u64>;
    "memcache.decr" => fn decr(key: &[u8], delta: u64) -> Option<u64>;
    "memcache.touch" => fn touch(key: &[u8], expire: u32) -> bool;
    "memcache.stats" => fn stats() -> ServerStats;
    "memcache.version" => fn version() -> String;
    "memcache.flush_all" => fn flush_all(delay: u32) -> ();
    "memcache.quit" => fn quit() -> ();
    "memcache.close" => fn close() -> ();
}
