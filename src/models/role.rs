//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of user roles known to the backend.
///
/// Roles arrive as lowercase strings on the wire; an unknown role is a
/// deserialization error rather than a silently denied session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user administration
    Admin,
    /// Cashier: sales and purchase invoicing
    Kasir,
    /// Mechanic: work orders assigned to them
    Mekanik,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Kasir => "kasir",
            Role::Mekanik => "mekanik",
        }
    }

    /// Endpoint path of the role-specific dashboard, e.g. `/kasir/dashboard`.
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "kasir" => Ok(Role::Kasir),
            "mekanik" => Ok(Role::Mekanik),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}
