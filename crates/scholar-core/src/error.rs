//! Error types for the scholar client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, backend, storage, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for scholar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Durable session storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (bad URL, bad header value).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the human-readable message the backend attached, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api(err) => err.message.as_deref(),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// An error response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Message extracted from the error payload, if present.
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The stored blob could not be parsed.
    #[error("corrupt session blob: {message}")]
    Corrupt { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Token contains characters that cannot appear in a header.
    #[error("invalid header value: {reason}")]
    Header { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_message() {
        let err = ApiError::new(400, Some("bad password".to_string()));
        assert_eq!(err.to_string(), "HTTP 400: bad password");
        assert_eq!(ApiError::new(500, None).to_string(), "HTTP 500");
    }

    #[test]
    fn api_message_only_for_api_errors() {
        let err = Error::from(ApiError::new(401, Some("expired".to_string())));
        assert_eq!(err.api_message(), Some("expired"));

        let err = Error::from(TransportError::Connection {
            message: "refused".to_string(),
        });
        assert_eq!(err.api_message(), None);
    }
}
