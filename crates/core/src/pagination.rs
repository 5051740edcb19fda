//! Page-number pagination (`?page=&size=`).
//!
//! Pages are 1-based. A listing returns a [`Page`] envelope with the items of
//! the requested page plus the total number of matching rows.

use serde::Serialize;

use crate::error::CoreError;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Validate raw query parameters.
    ///
    /// `page` defaults to 1 and must be at least 1. `size` defaults to
    /// [`DEFAULT_PAGE_SIZE`] and must lie in `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be greater than or equal to 1, got {page}"
            )));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(CoreError::Validation(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            )));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the query across all pages.
    pub total: i64,
    pub page: i64,
    pub size: i64,
    /// Number of pages needed to hold `total` rows.
    pub pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + request.size - 1) / request.size
        };

        Self {
            items,
            total,
            page: request.page,
            size: request.size,
            pages,
        }
    }
}
