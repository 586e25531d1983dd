//! Pagination extractor.

use menuboard_core::{MenuSort, MenuboardResult, PageRequest};
use serde::Deserialize;

/// Query parameters for the catalog listing.
///
/// The external page number is 1-based; zero and negative values fall back
/// to the first page.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl PaginationQuery {
    /// Normalizes the 1-based external page number into a 0-based request.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        let page = match self.page {
            Some(p) if p > 0 => (p - 1) as usize,
            _ => 0,
        };
        PageRequest::new(page, self.size.unwrap_or(PageRequest::DEFAULT_SIZE))
    }

    /// Parses the sort expression, defaulting to the listing order.
    pub fn sort(&self) -> MenuboardResult<MenuSort> {
        match self.sort.as_deref() {
            Some(s) => s.parse(),
            None => Ok(MenuSort::default_listing()),
        }
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            size: Some(PageRequest::DEFAULT_SIZE),
            sort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuboard_core::{SortDirection, SortField};

    fn query(page: Option<i64>) -> PaginationQuery {
        PaginationQuery {
            page,
            size: None,
            sort: None,
        }
    }

    #[test]
    fn test_external_page_is_one_based() {
        assert_eq!(query(Some(1)).page_request().page, 0);
        assert_eq!(query(Some(7)).page_request().page, 6);
    }

    #[test]
    fn test_zero_and_negative_pages_clamp_to_first() {
        assert_eq!(query(Some(0)).page_request().page, 0);
        assert_eq!(query(Some(-3)).page_request().page, 0);
        assert_eq!(query(None).page_request().page, 0);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(query(None).page_request().size, PageRequest::DEFAULT_SIZE);
    }

    #[test]
    fn test_sort_defaults_to_listing_order() {
        let sort = query(None).sort().unwrap();
        assert_eq!(sort, MenuSort::default_listing());
    }

    #[test]
    fn test_sort_expression_parsed() {
        let q = PaginationQuery {
            page: None,
            size: None,
            sort: Some("menuPrice,asc".to_string()),
        };
        let sort = q.sort().unwrap();
        assert_eq!(sort.field, SortField::MenuPrice);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let q = PaginationQuery {
            page: None,
            size: None,
            sort: Some("menuOwner".to_string()),
        };
        assert!(q.sort().is_err());
    }
}
