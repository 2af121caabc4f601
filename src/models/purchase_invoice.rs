//! Purchase invoices (vehicle acquisition).

use super::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// A purchase invoice as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    /// Invoice ID
    pub id: i64,
    /// Human-readable invoice number
    #[serde(alias = "invoice_number")]
    pub invoice_number: String,
    /// Acquired vehicle
    #[serde(alias = "vehicle_id")]
    pub vehicle_id: i64,
    /// Supplier or previous owner, free-form
    #[serde(default, alias = "supplier_name")]
    pub supplier_name: Option<String>,
    /// Agreed purchase price
    #[serde(alias = "purchase_price")]
    pub purchase_price: f64,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
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

/// Payload for recording a purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoiceDraft {
    /// Acquired vehicle
    pub vehicle_id: i64,
    /// Supplier or previous owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    /// Agreed purchase price
    pub purchase_price: f64,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
