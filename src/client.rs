//! The memcached client contract
//!
//! [`CacheClient`] is the surface an underlying client must expose to be
//! wrapped by [`crate::InstrumentedClient`]. It mirrors the operation set of
//! common memcached clients: every operation is synchronous and fallible, and
//! the wrapper forwards arguments and results opaquely. Implementations own
//! the wire protocol, pooling and server selection; none of that lives here.

use bytes::Bytes;
use std::collections::HashMap;

/// Maximum key length (memcached spec)
pub const MAX_KEY_LENGTH: usize = 250;

/// Statistics as returned by the `stats` command, name to raw value
pub type ServerStats = HashMap<String, String>;

/// A synchronous memcached client
///
/// All remote operations take `&mut self` since client implementations
/// typically carry connection state. `check_key` is the one purely local
/// operation: it validates a key without touching the server.
pub trait CacheClient {
    type Error: std::error::Error;

    /// Fetch a single value
    fn get(&mut self, key: &[u8]) -> Result<Option<Bytes>, Self::Error>;

    /// Fetch a single value together with its CAS token
    fn gets(&mut self, key: &[u8]) -> Result<Option<(Bytes, u64)>, Self::Error>;

    /// Fetch multiple values; missing keys are absent from the result
    fn get_many(&mut self, keys: &[&[u8]]) -> Result<HashMap<Vec<u8>, Bytes>, Self::Error>;

    /// Fetch multiple values with CAS tokens
    fn gets_many(
        &mut self,
        keys: &[&[u8]],
    ) -> Result<HashMap<Vec<u8>, (Bytes, u64)>, Self::Error>;

    /// Store a value unconditionally; returns whether it was stored
    fn set(&mut self, key: &[u8], value: &[u8], expire: u32) -> Result<bool, Self::Error>;

    /// Store multiple values; returns the keys that failed to store
    fn set_many(
        &mut self,
        values: &[(&[u8], &[u8])],
        expire: u32,
    ) -> Result<Vec<Vec<u8>>, Self::Error>;

    /// Store only if the key does not exist
    fn add(&mut self, key: &[u8], value: &[u8], expire: u32) -> Result<bool, Self::Error>;

    /// Store only if the key already exists
    fn replace(&mut self, key: &[u8], value: &[u8], expire: u32) -> Result<bool, Self::Error>;

    /// Append to an existing value
    fn append(&mut self, key: &[u8], value: &[u8]) -> Result<bool, Self::Error>;

    /// Prepend to an existing value
    fn prepend(&mut self, key: &[u8], value: &[u8]) -> Result<bool, Self::Error>;

    /// Compare-and-swap: store only if the CAS token still matches.
    /// `Ok(None)` means the key did not exist.
    fn cas(
        &mut self,
        key: &[u8],
        value: &[u8],
        cas: u64,
        expire: u32,
    ) -> Result<Option<bool>, Self::Error>;

    /// Delete a key; returns whether it existed
    fn delete(&mut self, key: &[u8]) -> Result<bool, Self::Error>;

    /// Delete multiple keys
    fn delete_many(&mut self, keys: &[&[u8]]) -> Result<bool, Self::Error>;

    /// Increment a numeric value; `Ok(None)` if the key does not exist
    fn incr(&mut self, key: &[u8], delta: u64) -> Result<Option<u64>, Self::Error>;

    /// Decrement a numeric value; `Ok(None)` if the key does not exist
    fn decr(&mut self, key: &[u8], delta: u64) -> Result<Option<u64>, Self::Error>;

    /// Update a key's expiration without touching its value
    fn touch(&mut self, key: &[u8], expire: u32) -> Result<bool, Self::Error>;

    /// Fetch server statistics
    fn stats(&mut self) -> Result<ServerStats, Self::Error>;

    /// Fetch the server version string
    fn version(&mut self) -> Result<String, Self::Error>;

    /// Expire all keys, optionally after a delay in seconds
    fn flush_all(&mut self, delay: u32) -> Result<(), Self::Error>;

    /// Send `quit` to the server
    fn quit(&mut self) -> Result<(), Self::Error>;

    /// Close the connection
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Validate a key locally, without any network effect
    fn check_key(&self, key: &[u8]) -> Result<(), Self::Error>;
}

/// Check if a key is valid per the memcached spec: non-empty, at most 250
/// bytes, printable ASCII with no whitespace or control characters.
pub fn is_valid_key(key: &[u8]) -> bool {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return false;
    }
    key.iter().all(|&b| b > 32 && b < 127)
}

/// Describe why a key is invalid, for use in error messages.
/// Returns `None` for valid keys.
pub fn key_violation(key: &[u8]) -> Option<&'static str> {
    if key.is_empty() {
        Some("key is empty")
    } else if key.len() > MAX_KEY_LENGTH {
        Some("key too long (max 250 bytes)")
    } else if !key.iter().all(|&b| b > 32 && b < 127) {
        Some("key contains whitespace or control characters")
    } else {
        None
    }
}
