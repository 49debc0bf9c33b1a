//! Record types

use crate::forms::SearchForm;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A synced transaction row as shown in the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Upstream identifier
    pub id: String,
    /// Transaction date
    pub date: NaiveDate,
    /// Counterparty name
    #[serde(default)]
    pub contact: String,
    /// Invoice number or bank reference
    #[serde(default)]
    pub reference: String,
    /// Amount in the account currency
    pub amount: f64,
    /// Whether the record has been reconciled
    #[serde(default)]
    pub reconciled: bool,
}

impl Record {
    /// Check if this record passes the form's filters
    ///
    /// Missing dates leave that side of the range open. The search text is
    /// matched case-insensitively against contact and reference.
    pub fn matches(&self, form: &SearchForm) -> bool {
        if !form.reconciliation_status().matches(self.reconciled) {
            return false;
        }
        if form.date_from.is_some_and(|from| self.date < from) {
            return false;
        }
        if form.date_to.is_some_and(|to| self.date > to) {
            return false;
        }

        let needle = form.search.trim().to_lowercase();
        needle.is_empty()
            || self.contact.to_lowercase().contains(&needle)
            || self.reference.to_lowercase().contains(&needle)
    }
}
