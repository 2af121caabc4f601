//! Pagination wrapper for list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination information attached to every list response.
///
/// `total_pages` is authoritative for rendering page controls; an empty
/// `data` page is legal (e.g. page beyond the end after a delete).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based
    pub page: u32,
    /// Page size requested by the caller
    pub limit: u32,
    /// Total number of rows across all pages
    pub total: u64,
    /// Total number of pages for the given limit
    #[serde(alias = "total_pages")]
    pub total_pages: u32,
}

impl Pagination {
    /// `true` when a page after the current one exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `true` when a page before the current one exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// A page of results: the rows plus pagination metadata.
///
/// Always delivered through [`ApiEnvelope`](super::ApiEnvelope), i.e. the
/// wire shape is `{ "data": { "data": [...], "pagination": {...} } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Rows for the current page; may be empty
    pub data: Vec<T>,
    /// Page metadata
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_navigation() {
        let p = Pagination {
            page: 2,
            limit: 10,
            total: 45,
            total_pages: 5,
        };
        assert!(p.has_next());
        assert!(p.has_prev());

        let last = Pagination {
            page: 5,
            ..p
        };
        assert!(!last.has_next());
    }

    #[test]
    fn test_snake_case_alias() {
        // Older backend builds emit snake_case pagination keys.
        let p: Pagination = serde_json::from_value(json!({
            "page": 1, "limit": 20, "total": 3, "total_pages": 1
        }))
        .unwrap();
        assert_eq!(p.total_pages, 1);
    }
}
