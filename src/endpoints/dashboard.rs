//! Role-specific dashboard endpoints.

use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{DashboardStats, Role};

impl OtoLinkClient {
    /// Fetch the dashboard statistics for the given role
    /// (`/{admin|kasir|mekanik}/dashboard`).
    pub async fn dashboard_stats(&self, role: Role) -> Result<DashboardStats> {
        self.get(&role.dashboard_path(), None).await
    }
}
