//! Typed endpoint methods, grouped per backend resource.
//!
//! Every method funnels through the client's single dispatch path; none
//! bypasses token attachment or envelope unwrapping. List endpoints follow
//! the pagination convention: 1-based `page`, `limit` page size,
//! `totalPages` authoritative.

pub mod customers;
pub mod dashboard;
pub mod files;
pub mod notifications;
pub mod purchases;
pub mod sales;
pub mod spare_parts;
pub mod users;
pub mod vehicles;
pub mod work_orders;

/// Standard pagination query parameters.
pub(crate) fn page_query(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("limit", limit.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_shape() {
        let q = page_query(2, 10);
        assert_eq!(q, vec![("page", "2".to_string()), ("limit", "10".to_string())]);
    }
}
