use serde::{Deserialize, Serialize};

/// Health check response from the unauthenticated liveness endpoint.
///
/// Not enveloped: the endpoint lives outside the `/api/v1` prefix and
/// answers with a bare JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Health status (e.g. "ok")
    pub status: String,

    /// Server version, when reported
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthCheckResponse {
    /// `true` when the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy")
    }
}
