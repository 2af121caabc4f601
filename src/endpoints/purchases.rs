//! Purchase invoice endpoints (vehicle acquisition).

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, PurchaseInvoice, PurchaseInvoiceDraft};

impl OtoLinkClient {
    /// List purchase invoices, paginated.
    pub async fn list_purchases(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<PurchaseInvoice>> {
        self.get("/purchases", Some(&page_query(page, limit))).await
    }

    /// Fetch one purchase invoice by ID.
    pub async fn get_purchase(&self, id: i64) -> Result<PurchaseInvoice> {
        self.get(&format!("/purchases/{}", id), None).await
    }

    /// Record an acquisition.
    pub async fn create_purchase(&self, draft: &PurchaseInvoiceDraft) -> Result<PurchaseInvoice> {
        self.post("/purchases", draft).await
    }
}
