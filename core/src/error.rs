//! Error types for the OpenSecrets client.
//!
//! # Design
//! Four failure kinds cover every operation: a request that fails local
//! validation, a transport failure, an upstream status >= 400, and a body
//! that cannot be decoded. `Decode` carries no detail: malformed JSON, a
//! wrong shape and a bad numeric string all look the same to the caller.

use thiserror::Error;

/// Message carried by every [`ApiError::Decode`].
pub const DECODE_FAILURE_MESSAGE: &str = "unable to parse OpenSecrets response body";

/// Errors returned by `OpenSecretsClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field was empty. Raised before any network I/O.
    #[error("missing required request field: {field}")]
    Validation { field: &'static str },

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with a status code >= 400.
    #[error("received {status} status code calling OpenSecrets API")]
    Status { status: u16 },

    /// The response body could not be mapped onto the expected records.
    #[error("{}", DECODE_FAILURE_MESSAGE)]
    Decode,
}

/// Failures raised by a [`Transport`](crate::http::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The caller's deadline passed before the response completed.
    #[error("deadline exceeded before the response completed")]
    DeadlineExceeded,

    /// The transport's own timeout fired. Keeps the transport's report.
    #[error("request timed out")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connection, DNS, TLS or I/O failure.
    #[error("HTTP request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while loading a [`ClientConfig`](crate::config::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load client configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("no API key configured (set OPENSECRETS_API_KEY)")]
    MissingApiKey,
}
