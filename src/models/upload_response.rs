use serde::{Deserialize, Serialize};

/// Response of the multipart file-upload endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL of the stored file
    pub url: String,
}
