//! Workshop work order endpoints.
//!
//! `my_work_orders` is the mechanic's view: the backend scopes it to work
//! orders assigned to the authenticated user.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, WorkOrder, WorkOrderDraft};
use reqwest::Method;
use serde_json::json;

impl OtoLinkClient {
    /// List all work orders, paginated.
    pub async fn list_work_orders(&self, page: u32, limit: u32) -> Result<Paginated<WorkOrder>> {
        self.get("/work-orders", Some(&page_query(page, limit)))
            .await
    }

    /// List work orders assigned to the authenticated mechanic.
    pub async fn my_work_orders(&self, page: u32, limit: u32) -> Result<Paginated<WorkOrder>> {
        self.get("/work-orders/my", Some(&page_query(page, limit)))
            .await
    }

    /// Fetch one work order by ID.
    pub async fn get_work_order(&self, id: i64) -> Result<WorkOrder> {
        self.get(&format!("/work-orders/{}", id), None).await
    }

    /// Open a new work order.
    pub async fn create_work_order(&self, draft: &WorkOrderDraft) -> Result<WorkOrder> {
        self.post("/work-orders", draft).await
    }

    /// Mark a work order as started.
    pub async fn start_work_order(&self, id: i64) -> Result<()> {
        self.ack(Method::PUT, &format!("/work-orders/{}/start", id), None)
            .await
    }

    /// Mark a work order as completed, recording the actual cost.
    pub async fn complete_work_order(&self, id: i64, actual_cost: Option<f64>) -> Result<()> {
        let body = actual_cost.map(|cost| json!({ "actualCost": cost }));
        self.ack(Method::PUT, &format!("/work-orders/{}/complete", id), body)
            .await
    }

    /// Assign a mechanic to a work order.
    pub async fn assign_work_order(&self, id: i64, mechanic_id: i64) -> Result<()> {
        self.ack(
            Method::PUT,
            &format!("/work-orders/{}/assign", id),
            Some(json!({ "mechanicId": mechanic_id })),
        )
        .await
    }
}
