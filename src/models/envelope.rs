//! The uniform response envelope used by every backend endpoint.

use crate::error::{OtoLinkError, Result};
use serde::{Deserialize, Serialize};

/// Uniform response wrapper: `{ "data": <payload> }` on success,
/// `{ "message": "<reason>" }` on failure.
///
/// Presence of `data` is the sole success discriminant. Older backend
/// builds additionally emit a `success` boolean; it is accepted during
/// deserialization but never consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Legacy success flag, ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Payload; present iff the call succeeded. A missing field
    /// deserializes as `None` without requiring `T: Default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable reason, populated on failure (and sometimes on
    /// success, where it is informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope: `data` present yields the payload, otherwise an
    /// [`OtoLinkError::ApiError`] carrying the envelope's `message` (or a
    /// generic fallback when the backend sent none).
    pub fn into_data(self, status_code: u16) -> Result<T> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(OtoLinkError::ApiError {
                status_code,
                message: self
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            }),
        }
    }

    /// The envelope's message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_with_data() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_value(json!({ "data": { "id": 7 } })).unwrap();
        let data = envelope.into_data(200).unwrap();
        assert_eq!(data, json!({ "id": 7 }));
    }

    #[test]
    fn test_unwrap_without_data_uses_message() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_value(json!({ "message": "customer not found" })).unwrap();
        match envelope.into_data(404) {
            Err(OtoLinkError::ApiError {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, 404);
                assert_eq!(message, "customer not found");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_without_data_or_message_falls_back() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(json!({})).unwrap();
        match envelope.into_data(500) {
            Err(OtoLinkError::ApiError { message, .. }) => {
                assert_eq!(message, "Request failed");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_type_needs_no_default() {
        // Payload types are plain wire shapes without Default impls; the
        // envelope must decode them (and their absence) regardless.
        #[derive(Debug, Deserialize, PartialEq)]
        struct Opaque {
            id: i64,
        }

        let envelope: ApiEnvelope<Opaque> =
            serde_json::from_value(json!({ "data": { "id": 3 } })).unwrap();
        assert_eq!(envelope.into_data(200).unwrap(), Opaque { id: 3 });

        let empty: ApiEnvelope<Opaque> =
            serde_json::from_value(json!({ "message": "nope" })).unwrap();
        assert!(empty.into_data(400).is_err());
    }

    #[test]
    fn test_legacy_success_flag_is_ignored() {
        // `success: false` with data present still succeeds: data presence
        // is the only discriminant.
        let envelope: ApiEnvelope<i64> =
            serde_json::from_value(json!({ "success": false, "data": 42 })).unwrap();
        assert_eq!(envelope.into_data(200).unwrap(), 42);
    }
}
