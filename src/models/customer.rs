//! Customer records.

use serde::{Deserialize, Serialize};

/// A customer as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer ID
    pub id: i64,
    /// Customer name
    pub name: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Last update time, RFC3339
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    /// Customer name (required by the backend)
    pub name: String,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
