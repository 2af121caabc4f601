use serde::{Deserialize, Serialize};

use super::user::User;

/// Login response from the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent API calls
    pub token: String,
    /// Authenticated user information
    pub user: User,
}
