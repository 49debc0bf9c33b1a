//! Search form module
//!
//! Decodes the list view's filter parameters (`status`, `date-from`,
//! `date-to`, `search`, `page`) from a request query and validates them.
//! The pagination module never looks at these; it only carries them along
//! in its links.

mod search;
mod validator;

pub use search::{default_date_range, ReconciliationStatus, SearchForm, DATE_FORMAT};
pub use validator::Validator;

#[cfg(test)]
mod tests;
