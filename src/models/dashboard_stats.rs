//! Dashboard statistics.

use serde::{Deserialize, Serialize};

/// Aggregate numbers shown on the role-specific dashboards.
///
/// Every field is defaulted: each role's dashboard endpoint reports only
/// the subset relevant to that role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Vehicles currently sellable
    #[serde(default, alias = "available_vehicles")]
    pub available_vehicles: u64,
    /// Sales recorded today
    #[serde(default, alias = "today_sales")]
    pub today_sales: u64,
    /// Work orders not yet completed
    #[serde(default, alias = "pending_repairs")]
    pub pending_repairs: u64,
    /// Revenue across all settled sales
    #[serde(default, alias = "total_revenue")]
    pub total_revenue: f64,
    /// Registered customers
    #[serde(default, alias = "total_customers")]
    pub total_customers: u64,
    /// Vehicles in inventory, any status
    #[serde(default, alias = "total_vehicles")]
    pub total_vehicles: u64,
    /// Invoices awaiting payment
    #[serde(default, alias = "pending_payments")]
    pub pending_payments: u64,
    /// Fully settled sales
    #[serde(default, alias = "completed_sales")]
    pub completed_sales: u64,
}
