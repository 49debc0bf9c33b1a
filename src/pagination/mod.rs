//! Pagination module
//!
//! Turns a page length, a total record count and a requested page into a
//! page window, and rewrites the request's query string into "next" and
//! "previous" links.
//!
//! # Overview
//!
//! - [`compute`] is the pure calculator: total pages plus the neighbouring
//!   page numbers, with `0` meaning "no such page".
//! - [`build_link`] copies the caller's query parameters, replaces only the
//!   `page` key and serializes with keys in sorted order.
//! - [`Pagination`] bundles both for a single request.
//!
//! ```rust
//! use recon_view::pagination::Pagination;
//! use recon_view::QueryParams;
//!
//! let params = QueryParams::parse("status=ok&page=2&something=there");
//! let pg = Pagination::new(5, 13, 2, params).unwrap();
//!
//! assert_eq!(pg.pages, 3);
//! assert_eq!(pg.next_url(), "page=3&something=there&status=ok");
//! assert_eq!(pg.previous_url(), "page=1&something=there&status=ok");
//! ```

mod links;
mod types;

pub use links::build_link;
pub use types::{compute, effective_page_len, PageWindow, Pagination};

/// Page length used when the configured one is zero or negative
///
/// One row per page, so a misconfigured list still shows every record.
pub const DEFAULT_PAGE_LEN: i64 = 1;

/// Reserved query parameter carrying the page number
pub const PAGE_KEY: &str = "page";

/// Sentinel for "no such page" in `next`/`previous`
pub const NO_PAGE: i64 = 0;
