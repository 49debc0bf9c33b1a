//! Search form decoding, defaults and validation

use super::validator::Validator;
use crate::error::{Error, Result};
use crate::pagination::{effective_page_len, PAGE_KEY};
use crate::types::QueryParams;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the `date-from` and `date-to` parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const STATUS_KEY: &str = "status";
const DATE_FROM_KEY: &str = "date-from";
const DATE_TO_KEY: &str = "date-to";
const SEARCH_KEY: &str = "search";

// ============================================================================
// Reconciliation Status
// ============================================================================

/// Reconciliation filter for listed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReconciliationStatus {
    /// Every record
    All,
    /// Only reconciled records
    Reconciled,
    /// Only records still waiting to be reconciled
    #[default]
    NotReconciled,
}

impl ReconciliationStatus {
    /// Name as it appears in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Reconciled => "Reconciled",
            Self::NotReconciled => "NotReconciled",
        }
    }

    /// Check if a record with the given reconciled flag passes this filter
    pub fn matches(&self, reconciled: bool) -> bool {
        match self {
            Self::All => true,
            Self::Reconciled => reconciled,
            Self::NotReconciled => !reconciled,
        }
    }
}

impl fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReconciliationStatus {
    type Err = Error;

    /// Spaces are ignored, so "Not Reconciled" parses
    fn from_str(s: &str) -> Result<Self> {
        match s.replace(' ', "").as_str() {
            "All" => Ok(Self::All),
            "Reconciled" => Ok(Self::Reconciled),
            "NotReconciled" => Ok(Self::NotReconciled),
            _ => Err(Error::invalid_param(STATUS_KEY, s)),
        }
    }
}

// ============================================================================
// Search Form
// ============================================================================

/// Default filter dates: the UK fiscal year (1 April to 31 March) containing `today`
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = if today.month() < 4 {
        today.year() - 1
    } else {
        today.year()
    };

    // April 1st and March 31st exist in every year
    let from = NaiveDate::from_ymd_opt(year, 4, 1).unwrap_or(today);
    let to = NaiveDate::from_ymd_opt(year + 1, 3, 31).unwrap_or(today);
    (from, to)
}

/// Filters for the record list, as submitted in the query string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchForm {
    /// Raw status value; checked by [`SearchForm::validate`]
    pub status: String,
    /// First date to include, `None` if missing or unparseable
    pub date_from: Option<NaiveDate>,
    /// Last date to include, `None` if missing or unparseable
    pub date_to: Option<NaiveDate>,
    /// Free text matched against contact and reference
    pub search: String,
    /// Requested page, 1-based
    pub page: i64,
}

impl SearchForm {
    /// Create a form with default filters for the given day
    pub fn new(today: NaiveDate) -> Self {
        let (date_from, date_to) = default_date_range(today);
        Self {
            status: ReconciliationStatus::default().to_string(),
            date_from: Some(date_from),
            date_to: Some(date_to),
            search: String::new(),
            page: 1,
        }
    }

    /// Create a form with default filters for the current UTC day
    pub fn with_defaults() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }

    /// Overlay query parameters on the defaults for `today`
    ///
    /// Only the first value of each key is read. Unknown keys are ignored, and
    /// blank values (as sent for untouched form inputs) keep the default.
    /// Unparseable dates decode to `None`; a non-numeric page is an error.
    pub fn decode(params: &QueryParams, today: NaiveDate) -> Result<Self> {
        let mut form = Self::new(today);

        if let Some(status) = field(params, STATUS_KEY) {
            form.status = status.to_string();
        }
        if let Some(value) = field(params, DATE_FROM_KEY) {
            form.date_from = parse_date(value);
        }
        if let Some(value) = field(params, DATE_TO_KEY) {
            form.date_to = parse_date(value);
        }
        if let Some(search) = field(params, SEARCH_KEY) {
            form.search = search.to_string();
        }
        if let Some(page) = field(params, PAGE_KEY) {
            form.page = page
                .trim()
                .parse()
                .map_err(|_| Error::invalid_param(PAGE_KEY, page))?;
        }

        Ok(form)
    }

    /// Check fields, recording problems in `validator`
    ///
    /// Also normalizes the form: spaces are removed from the status and a
    /// page below 1 becomes 1.
    pub fn validate(&mut self, validator: &mut Validator) {
        self.status = self.status.replace(' ', "");
        validator.check(
            self.status.parse::<ReconciliationStatus>().is_ok(),
            STATUS_KEY,
            "Invalid status value provided.",
        );

        // a missing date sorts before any real one
        validator.check(
            self.date_to >= self.date_from,
            DATE_TO_KEY,
            "End date cannot be before the start date.",
        );
        validator.check(
            self.date_from.is_some(),
            DATE_FROM_KEY,
            "From date must be provided.",
        );

        if self.page < 1 {
            self.page = 1;
        }
    }

    /// Parsed status filter, falling back to the default for invalid values
    pub fn reconciliation_status(&self) -> ReconciliationStatus {
        self.status.parse().unwrap_or_default()
    }

    /// Row offset of the first record on the current page
    pub fn offset(&self, page_len: i64) -> i64 {
        (self.page.max(1) - 1).saturating_mul(effective_page_len(page_len))
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// First value of a key, treating a blank value as absent
fn field<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params.get(key).filter(|value| !value.trim().is_empty())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
