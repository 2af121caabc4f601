//! Error types for oto-link.
//!
//! Every fallible operation in the crate returns [`Result`]. The taxonomy is
//! deliberately small: callers branch on "did the request reach the server"
//! ([`OtoLinkError::NetworkError`]), "did the server reject it"
//! ([`OtoLinkError::ApiError`]) and "is the session dead"
//! ([`OtoLinkError::AuthError`]). The remaining variants cover local
//! configuration and storage failures.

use thiserror::Error;

/// Result type for oto-link operations
pub type Result<T> = std::result::Result<T, OtoLinkError>;

/// Errors that can occur when talking to the OtoPOS backend.
#[derive(Debug, Error)]
pub enum OtoLinkError {
    /// The request never produced a response: connection refused, DNS
    /// failure, or the request timeout elapsed.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The server responded but the envelope carried no data. Covers
    /// validation failures, not-found and server-side errors; `message` is
    /// the backend's human-readable reason.
    #[error("Server error ({status_code}): {message}")]
    ApiError {
        /// HTTP status code of the failed response
        status_code: u16,
        /// Reason reported by the backend envelope
        message: String,
    },

    /// The server answered 401. The client has already cleared the stored
    /// credential and emitted the session-invalidated event by the time this
    /// error reaches the caller.
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Invalid client configuration (bad base URL, malformed config file)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A response body could not be decoded into the expected shape
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Credential storage backend failure (file permissions, disk I/O)
    #[error("Credential storage error: {0}")]
    StorageError(String),
}

impl OtoLinkError {
    /// `true` when this error is the 401 session-invalidation case.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, OtoLinkError::AuthError(_))
    }

    /// `true` when the request never reached the server.
    pub fn is_network_error(&self) -> bool {
        matches!(self, OtoLinkError::NetworkError(_))
    }
}

impl From<reqwest::Error> for OtoLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OtoLinkError::SerializationError(err.to_string())
        } else if err.is_timeout() {
            OtoLinkError::NetworkError(format!("request timed out: {}", err))
        } else {
            OtoLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OtoLinkError {
    fn from(err: serde_json::Error) -> Self {
        OtoLinkError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for OtoLinkError {
    fn from(err: toml::de::Error) -> Self {
        OtoLinkError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OtoLinkError::ApiError {
            status_code: 422,
            message: "license plate already registered".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server error (422): license plate already registered"
        );

        let err = OtoLinkError::AuthError("invalid credentials".into());
        assert_eq!(err.to_string(), "Authentication error: invalid credentials");
    }

    #[test]
    fn test_error_classification() {
        assert!(OtoLinkError::AuthError("x".into()).is_auth_error());
        assert!(!OtoLinkError::NetworkError("x".into()).is_auth_error());
        assert!(OtoLinkError::NetworkError("x".into()).is_network_error());
    }
}
