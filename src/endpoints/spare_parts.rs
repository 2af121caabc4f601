//! Spare parts stock endpoints.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, SparePart, SparePartDraft};

impl OtoLinkClient {
    /// List spare parts, paginated.
    pub async fn list_spare_parts(&self, page: u32, limit: u32) -> Result<Paginated<SparePart>> {
        self.get("/spare-parts", Some(&page_query(page, limit)))
            .await
    }

    /// Register a spare part.
    pub async fn create_spare_part(&self, draft: &SparePartDraft) -> Result<SparePart> {
        self.post("/spare-parts", draft).await
    }

    /// List parts at or below their reorder threshold.
    pub async fn low_stock_spare_parts(&self) -> Result<Vec<SparePart>> {
        self.get("/spare-parts/low-stock", None).await
    }
}
