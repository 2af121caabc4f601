//! User administration endpoints. Admin-only server-side.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, User, UserDraft};
use reqwest::Method;
use serde_json::json;

impl OtoLinkClient {
    /// List user accounts, paginated.
    pub async fn list_users(&self, page: u32, limit: u32) -> Result<Paginated<User>> {
        self.get("/admin/users", Some(&page_query(page, limit)))
            .await
    }

    /// Create a user account.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        self.post("/admin/users", draft).await
    }

    /// Update a user account.
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User> {
        self.put(&format!("/admin/users/{}", id), draft).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.ack(Method::DELETE, &format!("/admin/users/{}", id), None)
            .await
    }

    /// Activate or deactivate a user account.
    pub async fn activate_user(&self, id: i64, is_active: bool) -> Result<()> {
        self.ack(
            Method::PUT,
            &format!("/admin/users/{}/activate", id),
            Some(json!({ "isActive": is_active })),
        )
        .await
    }
}
