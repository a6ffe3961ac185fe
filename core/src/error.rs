//! Error types for the catalog API client.
//!
//! # Design
//! Every failure class the client can observe is a variant of one enum, so
//! hosts match on a single type: non-success HTTP statuses (carrying the
//! server's `message` when the body has one), transport failures reported
//! by the host executor, body (de)serialization failures, and the translate
//! precondition. None of these are fatal; all surface as user-visible text.

use std::fmt;

/// Errors returned by `CatalogClient` parse methods and `Session` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status. `message` holds the body's
    /// `message` field when the body parses as one.
    HttpError { status: u16, message: Option<String> },

    /// The host executor could not complete the round-trip (connect, DNS,
    /// or read failure). The core never constructs this variant itself.
    TransportError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// Translate was requested before any search succeeded.
    NoBookSelected,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::HttpError {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            ApiError::HttpError {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            ApiError::TransportError(msg) => write!(f, "transport failed: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::NoBookSelected => write!(f, "search for a book first"),
        }
    }
}

impl std::error::Error for ApiError {}
