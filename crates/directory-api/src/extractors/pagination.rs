//! List query parameter extractor.

use serde::{Deserialize, Serialize};

use directory_core::types::PageRequest;

/// Query parameters of `GET /api/users`.
///
/// Kept as raw strings so bad values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based).
    pub page: Option<String>,
    /// Items per page.
    pub limit: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
}

/// Positive integer or `None`.
fn positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|v| *v >= 1)
}

impl ListQuery {
    /// Page window; missing, zero, negative or unparsable values fall back
    /// to page 1 and `default_limit`.
    pub fn page_request(&self, default_limit: u64) -> PageRequest {
        PageRequest::new(
            positive(self.page.as_deref()).unwrap_or(1),
            positive(self.limit.as_deref()).unwrap_or(default_limit),
        )
    }

    /// Search term, empty when absent.
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: &str, limit: &str) -> ListQuery {
        ListQuery {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
            search: None,
        }
    }

    #[test]
    fn test_defaults() {
        let request = ListQuery::default().page_request(10);
        assert_eq!((request.page, request.limit), (1, 10));
    }

    #[test]
    fn test_bad_values_fall_back() {
        for (page, limit) in [("0", "0"), ("-3", "-1"), ("abc", ""), ("1.5", "x")] {
            let request = query(page, limit).page_request(10);
            assert_eq!((request.page, request.limit), (1, 10), "{page}/{limit}");
        }
    }

    #[test]
    fn test_valid_values_used() {
        let request = query("3", " 25 ").page_request(10);
        assert_eq!((request.page, request.limit), (3, 25));
    }
}
