//! Error types for the todo client and store.
//!
//! # Design
//! `ApiError` covers everything that can go wrong once a remote call has been
//! decided on: the request never completed (`Transport`), the server answered
//! with a non-2xx status (`NotFound`, `Http`), or a payload would not
//! (de)serialize. `Rejected` is raised by the store before any request is
//! built, so a rejected operation never reaches the network.

use crate::types::TodoId;

/// Errors produced while executing or interpreting a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete (DNS, connect, I/O). Filled in by the
    /// host that executes the `HttpRequest`.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
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
}

/// Local validation failures. No remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("title is empty")]
    EmptyTitle,

    #[error("no todo with id {0}")]
    UnknownId(TodoId),
}
