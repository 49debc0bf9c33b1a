//! Query-string rewriting for pager links

use super::{NO_PAGE, PAGE_KEY};
use crate::types::QueryParams;

/// Build the query string that points at `target_page`
///
/// Every parameter of `params` is kept verbatim except `page`, which is set
/// to `target_page` as a single value. Keys come out sorted, without a
/// leading `?`. Returns an empty string when `target_page` is [`NO_PAGE`]
/// (or any other non-positive number), meaning "render no link".
///
/// `params` is never modified; the rewrite happens on a copy.
pub fn build_link(target_page: i64, params: &QueryParams) -> String {
    if target_page <= NO_PAGE {
        return String::new();
    }

    let mut rewritten = params.clone();
    rewritten.set(PAGE_KEY, target_page.to_string());
    rewritten.encode()
}
