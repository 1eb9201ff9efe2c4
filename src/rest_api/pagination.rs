//! # Pagination
//!
//! Turns the `page` query parameter into an offset/limit window over
//! id-ordered questions.

use std::collections::HashMap;

use super::errors::{ApiError, ApiResult};

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A page of the question listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub page: u32,

    /// Number of records to skip
    pub offset: u64,

    /// Maximum number of records to return
    pub limit: u32,
}

impl PageWindow {
    /// Window for a 1-based page number
    pub fn for_page(page: u32) -> ApiResult<Self> {
        if page == 0 {
            return Err(ApiError::BadRequest("page must be >= 1".to_string()));
        }

        Ok(Self {
            page,
            offset: u64::from(page - 1) * u64::from(QUESTIONS_PER_PAGE),
            limit: QUESTIONS_PER_PAGE,
        })
    }

    /// Read `page` from query parameters (default 1)
    pub fn from_query(params: &HashMap<String, String>) -> ApiResult<Self> {
        match params.get("page") {
            None => Self::for_page(1),
            Some(raw) => {
                let page = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid page: {}", raw)))?;
                Self::for_page(page)
            }
        }
    }

    /// True if this window lies entirely past the last of `total` records.
    ///
    /// The first page is never past the end, so an empty store still lists.
    pub fn is_past_end(&self, total: u64) -> bool {
        self.page > 1 && self.offset >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("page".to_string(), page.to_string());
        params
    }

    #[test]
    fn test_default_page() {
        let window = PageWindow::from_query(&HashMap::new()).unwrap();
        assert_eq!(window.page, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, QUESTIONS_PER_PAGE);
    }

    #[test]
    fn test_offset_calculation() {
        let window = PageWindow::from_query(&query("3")).unwrap();
        assert_eq!(window.offset, 20);
    }

    #[test]
    fn test_invalid_pages() {
        assert!(matches!(
            PageWindow::from_query(&query("0")),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            PageWindow::from_query(&query("-2")),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            PageWindow::from_query(&query("abc")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_past_end() {
        let first = PageWindow::for_page(1).unwrap();
        assert!(!first.is_past_end(0));

        let second = PageWindow::for_page(2).unwrap();
        assert!(!second.is_past_end(11));
        assert!(second.is_past_end(10));
        assert!(second.is_past_end(3));
    }

    #[test]
    fn test_large_page_does_not_overflow() {
        let window = PageWindow::for_page(u32::MAX).unwrap();
        assert_eq!(
            window.offset,
            u64::from(u32::MAX - 1) * u64::from(QUESTIONS_PER_PAGE)
        );
        assert!(window.is_past_end(1_000));
    }
}
