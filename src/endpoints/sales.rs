//! Sales invoice endpoints. Restricted to admin and kasir roles
//! server-side; the route table mirrors that client-side.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Paginated, SalesInvoice, SalesInvoiceDraft};
use reqwest::Method;

impl OtoLinkClient {
    /// List sales invoices, paginated.
    pub async fn list_sales(&self, page: u32, limit: u32) -> Result<Paginated<SalesInvoice>> {
        self.get("/sales", Some(&page_query(page, limit))).await
    }

    /// Fetch one sales invoice by ID.
    pub async fn get_sale(&self, id: i64) -> Result<SalesInvoice> {
        self.get(&format!("/sales/{}", id), None).await
    }

    /// Record a sale.
    pub async fn create_sale(&self, draft: &SalesInvoiceDraft) -> Result<SalesInvoice> {
        self.post("/sales", draft).await
    }

    /// Update a sales invoice.
    pub async fn update_sale(&self, id: i64, draft: &SalesInvoiceDraft) -> Result<SalesInvoice> {
        self.put(&format!("/sales/{}", id), draft).await
    }

    /// Delete a sales invoice.
    pub async fn delete_sale(&self, id: i64) -> Result<()> {
        self.ack(Method::DELETE, &format!("/sales/{}", id), None).await
    }
}
