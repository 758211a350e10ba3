//! Error types for cachetrace
//!
//! The tracking wrapper itself never produces errors of its own: whatever the
//! underlying client returns is recorded and then propagated unchanged. The
//! types here exist for client implementations (and the test doubles) that
//! need a concrete error to fail with.

use thiserror::Error;

/// Errors a memcached client implementation may surface, plus this crate's
/// own configuration errors.
///
/// The client variants are modeled on the failure modes of typical memcached
/// clients: transport failures, input the server would reject, and the
/// server's own error responses.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("client error: {0}")]
    Client(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("unknown error: {0}")]
    Unknown(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
