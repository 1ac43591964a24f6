//! Paging parameters and paged results for list queries.

use serde::{Deserialize, Serialize};

/// Page size used when the caller asks for zero or a negative size.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A normalized one-based page request.
///
/// Construct with [`PageRequest::normalize`]; the fields are always in range
/// afterwards (`page_number >= 1`, `1 <= page_size <= MAX_PAGE_SIZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
}

impl PageRequest {
    /// Clamp raw query values into a valid page request.
    ///
    /// Missing or non-positive page numbers become 1, missing or
    /// non-positive page sizes become [`DEFAULT_PAGE_SIZE`], and sizes above
    /// [`MAX_PAGE_SIZE`] are capped.
    #[must_use]
    pub fn normalize(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = match page_number {
            Some(n) if n > 0 => n,
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if s > 0 => s.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Number of rows in a full page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

/// One page of items plus the information needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// Number of matching items before slicing.
    pub total_count: i64,
    pub total_pages: i64,
    pub page_number: i64,
    pub page_size: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PagedResult<T> {
    /// Assemble a page from the sliced items and the pre-slice total.
    pub fn new(items: Vec<T>, total_count: i64, page: PageRequest) -> Self {
        let page_size = page.page_size();
        let total_pages = if total_count > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            items,
            total_count,
            total_pages,
            page_number: page.page_number(),
            page_size,
            has_next_page: page.page_number() < total_pages,
            has_previous_page: page.page_number() > 1,
        }
    }

    /// Convert every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page_number: self.page_number,
            page_size: self.page_size,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let page = PageRequest::normalize(None, None);
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_normalize_non_positive_page_number_resets_number_only() {
        let page = PageRequest::normalize(Some(0), Some(25));
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.page_size(), 25);

        let page = PageRequest::normalize(Some(-3), Some(5));
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.page_size(), 5);
    }

    #[test]
    fn test_normalize_non_positive_page_size() {
        assert_eq!(PageRequest::normalize(Some(2), Some(0)).page_size(), 10);
        assert_eq!(PageRequest::normalize(Some(2), Some(-1)).page_size(), 10);
    }

    #[test]
    fn test_normalize_caps_page_size() {
        assert_eq!(
            PageRequest::normalize(Some(1), Some(10_000)).page_size(),
            MAX_PAGE_SIZE
        );
    }

    #[test]
    fn test_offset() {
        let page = PageRequest::normalize(Some(2), Some(5));
        assert_eq!(page.offset(), 5);
        assert_eq!(page.limit(), 5);
    }

    #[test]
    fn test_paged_result_navigation() {
        let page = PageRequest::normalize(Some(2), Some(5));
        let result = PagedResult::new(vec![1, 2, 3, 4, 5], 15, page);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next_page);
        assert!(result.has_previous_page);

        let last = PagedResult::new(vec![11], 11, PageRequest::normalize(Some(3), Some(5)));
        assert_eq!(last.total_pages, 3);
        assert!(!last.has_next_page);
    }

    #[test]
    fn test_paged_result_empty() {
        let result: PagedResult<u8> = PagedResult::new(Vec::new(), 0, PageRequest::default());
        assert_eq!(result.total_pages, 0);
        assert!(!result.has_next_page);
        assert!(!result.has_previous_page);
    }

    #[test]
    fn test_paged_result_map_keeps_metadata() {
        let result = PagedResult::new(vec![1, 2], 7, PageRequest::normalize(Some(1), Some(2)));
        let mapped = result.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total_count, 7);
        assert_eq!(mapped.total_pages, 4);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = PagedResult::new(vec!["a"], 1, PageRequest::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["hasNextPage"], false);
    }
}
