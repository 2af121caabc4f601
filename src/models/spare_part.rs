//! Spare parts stock.

use serde::{Deserialize, Serialize};

/// A spare part as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    /// Part ID
    pub id: i64,
    /// Part name
    pub name: String,
    /// Internal part code
    #[serde(default, alias = "part_code")]
    pub part_code: Option<String>,
    /// Units in stock
    pub stock: i64,
    /// Reorder threshold; at or below this the part is low-stock
    #[serde(alias = "minimum_stock")]
    pub minimum_stock: i64,
    /// Price per unit
    #[serde(alias = "unit_price")]
    pub unit_price: f64,
    /// Creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Last update time, RFC3339
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

impl SparePart {
    /// `true` when stock is at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.minimum_stock
    }
}

/// Payload for registering a spare part.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePartDraft {
    /// Part name
    pub name: String,
    /// Internal part code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_code: Option<String>,
    /// Initial stock
    pub stock: i64,
    /// Reorder threshold
    pub minimum_stock: i64,
    /// Price per unit
    pub unit_price: f64,
}
