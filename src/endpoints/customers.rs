//! Customer CRUD endpoints.

use super::page_query;
use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{Customer, CustomerDraft, Paginated};
use reqwest::Method;

impl OtoLinkClient {
    /// List customers, paginated, optionally filtered by a search term
    /// (name or phone, matched server-side).
    pub async fn list_customers(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<Paginated<Customer>> {
        let mut query = page_query(page, limit);
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        self.get("/customers", Some(&query)).await
    }

    /// Fetch one customer by ID.
    pub async fn get_customer(&self, id: i64) -> Result<Customer> {
        self.get(&format!("/customers/{}", id), None).await
    }

    /// Register a new customer.
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer> {
        self.post("/customers", draft).await
    }

    /// Update an existing customer.
    pub async fn update_customer(&self, id: i64, draft: &CustomerDraft) -> Result<Customer> {
        self.put(&format!("/customers/{}", id), draft).await
    }

    /// Delete a customer. The backend acknowledges without a payload.
    pub async fn delete_customer(&self, id: i64) -> Result<()> {
        self.ack(Method::DELETE, &format!("/customers/{}", id), None)
            .await
    }
}
