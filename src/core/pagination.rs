//! Paginator and page metadata

use crate::core::error::QueryError;
use serde::Serialize;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of results
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,

    /// Pagination metadata
    pub info: PageInfo,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// 1-based index of the first item shown, 0 when nothing is shown
    pub first_index: usize,

    /// 1-based index of the last item shown, 0 when nothing is shown
    pub last_index: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

/// Number of pages for a result set. An empty set still has one page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

impl PageInfo {
    /// Compute metadata for a page, rejecting invalid requests
    pub fn new(page: usize, page_size: usize, total: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }

        let total_pages = total_pages(total, page_size);
        if page == 0 || page > total_pages {
            return Err(QueryError::PageOutOfRange { page, total_pages });
        }

        let start = (page - 1) * page_size;
        let end = (page * page_size).min(total);
        let (first_index, last_index) = if start < end {
            (start + 1, end)
        } else {
            (0, 0)
        };

        Ok(Self {
            page,
            page_size,
            total,
            total_pages,
            first_index,
            last_index,
            has_next: page < total_pages,
            has_prev: page > 1,
        })
    }

    /// Whether the result set has no items (the empty state)
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Zero-based half-open range of the page within the result set
    pub fn range(&self) -> std::ops::Range<usize> {
        if self.first_index == 0 {
            0..0
        } else {
            (self.first_index - 1)..self.last_index
        }
    }

    /// "Showing X-Y of Z" footer text
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.first_index, self.last_index, self.total
        )
    }
}

/// Slice `items` into the requested page.
///
/// The page number is never clamped; the caller must only request pages in
/// `1..=total_pages`.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>, QueryError> {
    let info = PageInfo::new(page, page_size, items.len())?;

    Ok(Page {
        items: items[info.range()].to_vec(),
        info,
    })
}

/// First page of `items`. Always valid: a zero page size is treated as 1.
pub fn first_page<T: Clone>(items: &[T], page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let end = page_size.min(items.len());
    let info = PageInfo {
        page: 1,
        page_size,
        total: items.len(),
        total_pages: total_pages(items.len(), page_size),
        first_index: if end > 0 { 1 } else { 0 },
        last_index: end,
        has_next: items.len() > page_size,
        has_prev: false,
    };

    Page {
        items: items[..end].to_vec(),
        info,
    }
}
