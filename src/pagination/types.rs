//! Page window calculation and the per-request pagination value

use super::links::build_link;
use super::{DEFAULT_PAGE_LEN, NO_PAGE};
use crate::error::InvalidPageNumber;
use crate::types::QueryParams;
use serde::Serialize;

/// Replace a non-positive page length with [`DEFAULT_PAGE_LEN`]
pub fn effective_page_len(page_len: i64) -> i64 {
    if page_len > 0 {
        page_len
    } else {
        tracing::debug!(page_len, default = DEFAULT_PAGE_LEN, "using default page length");
        DEFAULT_PAGE_LEN
    }
}

/// The numeric part of a pagination result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Current page, 1-based
    pub page_no: i64,
    /// Total number of pages, at least 1
    pub pages: i64,
    /// Next page, or `0` on the last page
    pub next: i64,
    /// Previous page, or `0` on the first page
    pub previous: i64,
}

/// Compute the page window for a result set
///
/// A page length of zero or less falls back to [`DEFAULT_PAGE_LEN`]. An empty
/// result set still has one (empty) page. A `current_page` below 1 is read
/// as "no page supplied" and becomes page 1; a page past the end is rejected.
pub fn compute(
    page_len: i64,
    total_records: i64,
    current_page: i64,
) -> Result<PageWindow, InvalidPageNumber> {
    let page_len = effective_page_len(page_len);
    let total_records = total_records.max(0);

    let pages = (total_records / page_len + i64::from(total_records % page_len != 0)).max(1);

    let page_no = if current_page < 1 {
        tracing::debug!(current_page, "page number below 1, using first page");
        1
    } else {
        current_page
    };

    if page_no > pages {
        return Err(InvalidPageNumber::new(page_no, pages));
    }

    let next = if page_no < pages { page_no + 1 } else { NO_PAGE };
    let previous = if page_no > 1 { page_no - 1 } else { NO_PAGE };

    Ok(PageWindow {
        page_no,
        pages,
        next,
        previous,
    })
}

/// Pagination for one list request
///
/// Holds the computed window together with a copy of the request's query
/// parameters, which are only used to build link strings. Equality and
/// serialization look at the window fields alone.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    /// Current page, 1-based
    pub page_no: i64,
    /// Total number of pages, at least 1
    pub pages: i64,
    /// Next page, or `0` on the last page
    pub next: i64,
    /// Previous page, or `0` on the first page
    pub previous: i64,
    #[serde(skip)]
    params: QueryParams,
}

impl Pagination {
    /// Create pagination for a request
    ///
    /// `params` is the full query of the incoming request, filters and page
    /// key included.
    pub fn new(
        page_len: i64,
        total_records: i64,
        current_page: i64,
        params: QueryParams,
    ) -> Result<Self, InvalidPageNumber> {
        let window = compute(page_len, total_records, current_page)?;
        Ok(Self {
            page_no: window.page_no,
            pages: window.pages,
            next: window.next,
            previous: window.previous,
            params,
        })
    }

    /// The numeric window without the query parameters
    pub fn window(&self) -> PageWindow {
        PageWindow {
            page_no: self.page_no,
            pages: self.pages,
            next: self.next,
            previous: self.previous,
        }
    }

    /// Check if there is a page after this one
    pub fn has_next(&self) -> bool {
        self.next != NO_PAGE
    }

    /// Check if there is a page before this one
    pub fn has_previous(&self) -> bool {
        self.previous != NO_PAGE
    }

    /// Query string for the next page, or `""` on the last page
    pub fn next_url(&self) -> String {
        build_link(self.next, &self.params)
    }

    /// Query string for the previous page, or `""` on the first page
    pub fn previous_url(&self) -> String {
        build_link(self.previous, &self.params)
    }
}

impl PartialEq for Pagination {
    fn eq(&self, other: &Self) -> bool {
        self.window() == other.window()
    }
}

impl Eq for Pagination {}
