//! Vehicle inventory endpoints.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, Vehicle, VehicleDraft, VehicleStatus};
use reqwest::Method;
use serde_json::json;

impl OtoLinkClient {
    /// List vehicles, paginated, optionally filtered by status.
    pub async fn list_vehicles(
        &self,
        page: u32,
        limit: u32,
        status: Option<VehicleStatus>,
    ) -> Result<Paginated<Vehicle>> {
        let mut query = page_query(page, limit);
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        self.get("/vehicles", Some(&query)).await
    }

    /// Fetch one vehicle by ID.
    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle> {
        self.get(&format!("/vehicles/{}", id), None).await
    }

    /// Add a vehicle to inventory.
    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle> {
        self.post("/vehicles", draft).await
    }

    /// Update an existing vehicle.
    pub async fn update_vehicle(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle> {
        self.put(&format!("/vehicles/{}", id), draft).await
    }

    /// Remove a vehicle from inventory.
    pub async fn delete_vehicle(&self, id: i64) -> Result<()> {
        self.ack(Method::DELETE, &format!("/vehicles/{}", id), None)
            .await
    }

    /// Flip a vehicle's inventory status.
    pub async fn update_vehicle_status(&self, id: i64, status: VehicleStatus) -> Result<()> {
        self.ack(
            Method::PUT,
            &format!("/vehicles/{}/status", id),
            Some(json!({ "status": status })),
        )
        .await
    }
}
