//! Error types for the REST controller.
//!
//! # Design
//! `RestError` keeps the cause of every failure: a non-2xx status (with the
//! body for debugging), a transport failure, or a codec failure. The
//! contract-preserving `*_object` calls collapse it: `get_object` into the
//! two fixed-message variants of `GetObjectError`, the other verbs into
//! `None` / `false`.

use thiserror::Error;

/// Errors returned by the typed `RestController` operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection,
    /// malformed URI, broken stream).
    #[error("network error: {0}")]
    Network(String),

    /// The transport gave up waiting for the response.
    #[error("request timed out")]
    Timeout,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl RestError {
    /// The HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, RestError::Status { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, RestError::Network(_) | RestError::Timeout)
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_decode() {
            RestError::Deserialization(err.to_string())
        } else {
            RestError::Network(err.to_string())
        }
    }
}

/// Failure of `RestController::get_object`.
///
/// Only distinguishes "the server said no" from "we never got a usable
/// answer"; the underlying cause is logged, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetObjectError {
    #[error("The server failed to return a successful response.")]
    ServerFailure,

    #[error("The REST controller failed to complete the GET call.  There may not be an internet connection.")]
    Unreachable,
}

impl From<RestError> for GetObjectError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Status { .. } => GetObjectError::ServerFailure,
            _ => GetObjectError::Unreachable,
        }
    }
}
