//! # recon-view
//!
//! Filtered, paginated list view over records synced from accounting and
//! CRM APIs into a local store.
//!
//! ## Features
//!
//! - **Page windows**: total pages plus next/previous page numbers from a
//!   page length, a record count and a requested page
//! - **Pager links**: query strings that keep every search filter verbatim
//!   and change only `page`, with keys in a stable order
//! - **Search forms**: status, date range and free-text filters decoded
//!   from the query and validated per field
//! - **List server**: an axum endpoint tying the pieces together
//!
//! ## Quick Start
//!
//! ```rust
//! use recon_view::pagination::Pagination;
//! use recon_view::{InvalidPageNumber, QueryParams};
//!
//! let params = QueryParams::parse("?status=ok&page=2&something=there");
//! let pg = Pagination::new(5, 13, 2, params.clone()).unwrap();
//! assert_eq!(pg.next_url(), "page=3&something=there&status=ok");
//!
//! let err = Pagination::new(5, 14, 4, params).unwrap_err();
//! assert_eq!(err, InvalidPageNumber { requested: 4, max: 3 });
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   request query ──► QueryParams ──► SearchForm ──► RecordSource::count
//!        │                                                  │
//!        └──────────────► Pagination::new ◄─────────────────┘
//!                              │
//!                  next_url / previous_url ──► response
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page windows and pager links
pub mod pagination;

/// Search form decoding and validation
pub mod forms;

/// Record sources for the list view
pub mod listing;

/// Application configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, InvalidPageNumber, Result};
pub use pagination::{build_link, Pagination};
pub use types::QueryParams;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
