//! User notifications.

use serde::{Deserialize, Serialize};

/// A notification as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification ID
    pub id: i64,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Whether the user has opened it
    #[serde(alias = "is_read")]
    pub is_read: bool,
    /// Creation time, RFC3339
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}
