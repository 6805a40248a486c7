//! Error types for the task API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the
//! task does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging. `Transport` carries failures from the I/O layer so
//! the store can treat a refused connection and a 500 the same way.

use thiserror::Error;

/// Errors returned by `TaskClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the referenced task does not exist.
    #[error("task not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never completed: DNS, connect, or read failure.
    #[error("transport failed: {0}")]
    Transport(String),
}
