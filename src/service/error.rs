//! Failures talking to the address service.

use thiserror::Error;

/// Longest upstream error body kept in a [`ServiceError::Status`] message.
const MAX_MESSAGE_LEN: usize = 200;

/// Errors that can occur during address service calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Base URL could not be turned into a request target
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Request could not be sent or the connection dropped
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status
    #[error("Service error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body was not what the contract promises
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn status(status: u16, body: &str) -> Self {
        let mut message: String = body.trim().chars().take(MAX_MESSAGE_LEN).collect();
        if message.is_empty() {
            message = "no details".to_string();
        }
        ServiceError::Status { status, message }
    }

    /// Short message for the status line and form footers.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::InvalidBaseUrl { .. } => "Address service URL is invalid".to_string(),
            ServiceError::Connection { .. } => "Could not reach the address service".to_string(),
            ServiceError::Timeout { duration } => {
                format!("Address service did not answer within {}s", duration)
            }
            ServiceError::Status { status, .. } => {
                format!("Address service rejected the request ({})", status)
            }
            ServiceError::Decode(_) => "Address service sent an unreadable response".to_string(),
        }
    }

    /// Error type string for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::InvalidBaseUrl { .. } => "invalid_base_url",
            ServiceError::Connection { .. } => "connection_error",
            ServiceError::Timeout { .. } => "timeout",
            ServiceError::Status { .. } => "status_error",
            ServiceError::Decode(_) => "decode_error",
        }
    }
}
