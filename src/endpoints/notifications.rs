//! Notification endpoints.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Notification, Paginated};
use reqwest::Method;

impl OtoLinkClient {
    /// List the user's notifications, paginated.
    pub async fn list_notifications(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<Notification>> {
        self.get("/notifications", Some(&page_query(page, limit)))
            .await
    }

    /// Mark a notification as read.
    pub async fn mark_notification_read(&self, id: i64) -> Result<()> {
        self.ack(Method::PUT, &format!("/notifications/{}/read", id), None)
            .await
    }
}
