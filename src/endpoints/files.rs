//! Multipart file upload endpoints.
//!
//! Uploads go through the same dispatch path as every other call, so token
//! attachment, envelope unwrapping and 401 handling apply unchanged.

use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::UploadResponse;

impl OtoLinkClient {
    /// Upload a vehicle photo. Returns the stored file's URL.
    pub async fn upload_vehicle_photo(
        &self,
        vehicle_id: i64,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        self.upload(
            &format!("/files/vehicles/{}/photo", vehicle_id),
            "photo",
            file_name.into(),
            bytes,
        )
        .await
    }

    /// Upload a transfer proof for a sales invoice. Returns the stored
    /// file's URL.
    pub async fn upload_transfer_proof(
        &self,
        sale_id: i64,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        self.upload(
            &format!("/files/sales/{}/transfer-proof", sale_id),
            "proof",
            file_name.into(),
            bytes,
        )
        .await
    }
}
