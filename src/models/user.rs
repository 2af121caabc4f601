//! User identity and account management shapes.

use super::role::Role;
use serde::{Deserialize, Serialize};

/// A user account as reported by the profile and admin endpoints.
///
/// Immutable snapshot: the session holds it until the next profile fetch or
/// logout. Timestamps are RFC3339 strings as emitted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: i64,
    /// Login name
    pub username: String,
    /// Role driving route authorization
    pub role: Role,
    /// Display name (optional)
    #[serde(default, alias = "full_name")]
    pub name: Option<String>,
    /// Email address (optional)
    #[serde(default)]
    pub email: Option<String>,
    /// Deactivated accounts cannot log in
    #[serde(alias = "is_active")]
    pub is_active: bool,
    /// Account creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    /// Last account update time, RFC3339
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a user through the admin endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Login name
    pub username: String,
    /// Initial password (create only; ignored on update when empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Role to assign
    pub role: Role,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for `POST /auth/change-password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password
    pub old_password: String,
    /// Replacement password
    pub new_password: String,
}
