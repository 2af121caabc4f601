//! Sales invoices.

use super::customer::Customer;
use super::user::User;
use super::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on handover
    Cash,
    /// Bank transfer (proof upload expected)
    Transfer,
    /// Credit / installments
    Credit,
}

/// Settlement state of a sales invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment received yet
    Pending,
    /// Partially paid
    Partial,
    /// Fully settled
    Paid,
    /// Past due date
    Overdue,
}

/// A sales invoice as returned by the backend.
///
/// The nested `vehicle`/`customer`/`user` records are populated by list and
/// detail endpoints that join them in; they are absent on create responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoice {
    /// Invoice ID
    pub id: i64,
    /// Human-readable invoice number
    #[serde(alias = "invoice_number")]
    pub invoice_number: String,
    /// Sold vehicle
    #[serde(alias = "vehicle_id")]
    pub vehicle_id: i64,
    /// Buying customer
    #[serde(alias = "customer_id")]
    pub customer_id: i64,
    /// Cashier who recorded the sale
    #[serde(alias = "user_id")]
    pub user_id: i64,
    /// Agreed sell price
    #[serde(alias = "selling_price")]
    pub sell_price: f64,
    /// Payment method
    #[serde(alias = "payment_method")]
    pub payment_method: PaymentMethod,
    /// Settlement state
    #[serde(alias = "payment_status")]
    pub payment_status: PaymentStatus,
    /// URL of the uploaded transfer proof, when any
    #[serde(default, alias = "transfer_proof")]
    pub transfer_proof_url: Option<String>,
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
    /// Joined customer record
    #[serde(default)]
    pub customer: Option<Customer>,
    /// Joined cashier record
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for creating or updating a sales invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoiceDraft {
    /// Sold vehicle
    pub vehicle_id: i64,
    /// Buying customer
    pub customer_id: i64,
    /// Agreed sell price
    pub sell_price: f64,
    /// Payment method
    pub payment_method: PaymentMethod,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
