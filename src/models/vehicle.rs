//! Vehicle inventory records.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a vehicle in inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// On the lot and sellable
    Available,
    /// Held for a customer
    Reserved,
    /// Sold and awaiting handover
    Sold,
    /// Undergoing repair in the workshop
    #[serde(alias = "in_repair")]
    InWorkshop,
}

impl VehicleStatus {
    /// Wire representation of the status, as used in query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::Sold => "sold",
            VehicleStatus::InWorkshop => "in_workshop",
        }
    }
}

/// A vehicle as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle ID
    pub id: i64,
    /// Registration plate
    #[serde(alias = "plate_number")]
    pub license_plate: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Body colour
    #[serde(default)]
    pub color: Option<String>,
    /// Engine serial number
    #[serde(default, alias = "engine_number")]
    pub engine_number: Option<String>,
    /// Chassis serial number
    #[serde(default, alias = "chassis_number")]
    pub chassis_number: Option<String>,
    /// Inventory status
    pub status: VehicleStatus,
    /// Acquisition price
    #[serde(default, alias = "purchase_price")]
    pub purchase_price: Option<f64>,
    /// Asking price
    #[serde(default, alias = "selling_price")]
    pub sell_price: Option<f64>,
    /// Condition notes
    #[serde(default, alias = "condition_notes")]
    pub condition: Option<String>,
    /// Odometer reading
    #[serde(default)]
    pub mileage: Option<i64>,
    /// Fuel type
    #[serde(default, alias = "fuel_type")]
    pub fuel_type: Option<String>,
    /// Transmission type
    #[serde(default)]
    pub transmission: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// URL of the primary photo, when uploaded
    #[serde(default, alias = "primary_photo")]
    pub photo_url: Option<String>,
    /// Creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Last update time, RFC3339
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a vehicle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    /// Registration plate
    pub license_plate: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Body colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Acquisition price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Asking price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    /// Condition notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::InWorkshop).unwrap(),
            "\"in_workshop\""
        );
        // Legacy backend builds report "in_repair" for the same state.
        let s: VehicleStatus = serde_json::from_str("\"in_repair\"").unwrap();
        assert_eq!(s, VehicleStatus::InWorkshop);
    }
}
