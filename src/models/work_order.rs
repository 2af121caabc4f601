//! Workshop work orders.

use super::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    /// Created, not yet started
    Pending,
    /// A mechanic is working on it
    InProgress,
    /// Work finished
    Completed,
    /// Abandoned
    Cancelled,
}

/// A work order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    /// Work order ID
    pub id: i64,
    /// Vehicle being serviced
    #[serde(alias = "vehicle_id")]
    pub vehicle_id: i64,
    /// Assigned mechanic, when any
    #[serde(default, alias = "mechanic_id")]
    pub mechanic_id: Option<i64>,
    /// What the customer reported / what needs doing
    pub description: String,
    /// Lifecycle status
    pub status: WorkOrderStatus,
    /// Estimated repair cost
    #[serde(default, alias = "estimated_cost")]
    pub estimated_cost: Option<f64>,
    /// Actual cost, filled on completion
    #[serde(default, alias = "actual_cost")]
    pub actual_cost: Option<f64>,
    /// When work started, RFC3339
    #[serde(default, alias = "started_at")]
    pub started_at: Option<String>,
    /// When work completed, RFC3339
    #[serde(default, alias = "completed_at")]
    pub completed_at: Option<String>,
    /// Creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Last update time, RFC3339
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
    /// Joined vehicle record
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
}

/// Payload for opening a work order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    /// Vehicle to service
    pub vehicle_id: i64,
    /// What needs doing
    pub description: String,
    /// Estimated repair cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}
