//! Tests for search form module

use super::*;
use crate::error::Error;
use crate::types::QueryParams;
use chrono::NaiveDate;
use test_case::test_case;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 8, 14)
}

fn decode_and_validate(query: &str) -> (SearchForm, Validator) {
    let params = QueryParams::parse(query);
    let mut form = SearchForm::decode(&params, today()).unwrap();
    let mut validator = Validator::new();
    form.validate(&mut validator);
    (form, validator)
}

fn errors(pairs: &[(&str, &str)]) -> Validator {
    let mut validator = Validator::new();
    for (key, message) in pairs {
        validator.add_error(*key, *message);
    }
    validator
}

// ============================================================================
// Default Date Range Tests
// ============================================================================

#[test_case(date(2025, 8, 14) => (date(2025, 4, 1), date(2026, 3, 31)) ; "mid year")]
#[test_case(date(2025, 4, 1) => (date(2025, 4, 1), date(2026, 3, 31)) ; "first day of year")]
#[test_case(date(2025, 3, 31) => (date(2024, 4, 1), date(2025, 3, 31)) ; "last day of year")]
#[test_case(date(2026, 1, 5) => (date(2025, 4, 1), date(2026, 3, 31)) ; "january")]
fn test_default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    default_date_range(today)
}

// ============================================================================
// Status Tests
// ============================================================================

#[test]
fn test_status_parse() {
    assert_eq!("All".parse::<ReconciliationStatus>().unwrap(), ReconciliationStatus::All);
    assert_eq!(
        "Not Reconciled".parse::<ReconciliationStatus>().unwrap(),
        ReconciliationStatus::NotReconciled
    );
    assert!("XXXXX".parse::<ReconciliationStatus>().is_err());
    assert!("reconciled".parse::<ReconciliationStatus>().is_err());
}

#[test]
fn test_status_matches() {
    assert!(ReconciliationStatus::All.matches(true));
    assert!(ReconciliationStatus::All.matches(false));
    assert!(ReconciliationStatus::Reconciled.matches(true));
    assert!(!ReconciliationStatus::Reconciled.matches(false));
    assert!(ReconciliationStatus::NotReconciled.matches(false));
    assert!(!ReconciliationStatus::NotReconciled.matches(true));
}

// ============================================================================
// Search Form Tests
// ============================================================================

#[test]
fn test_defaults() {
    let (form, validator) = decode_and_validate("");

    pretty_assertions::assert_eq!(
        form,
        SearchForm {
            status: "NotReconciled".to_string(),
            date_from: Some(date(2025, 4, 1)),
            date_to: Some(date(2026, 3, 31)),
            search: String::new(),
            page: 1,
        }
    );
    assert!(validator.is_valid());
}

#[test]
fn test_defaults_with_page_and_reversed_dates() {
    let (form, validator) =
        decode_and_validate("date-from=2025-06-01&date-to=2025-05-01&search=search+string&page=2");

    assert_eq!(form.status, "NotReconciled");
    assert_eq!(form.date_from, Some(date(2025, 6, 1)));
    assert_eq!(form.date_to, Some(date(2025, 5, 1)));
    assert_eq!(form.search, "search string");
    assert_eq!(form.page, 2);
    assert_eq!(
        validator,
        errors(&[("date-to", "End date cannot be before the start date.")])
    );
}

#[test]
fn test_all_fields_specified() {
    let (form, validator) = decode_and_validate(
        "status=NotReconciled&date-from=2025-06-01&date-to=2025-07-01&search=search%20string",
    );

    pretty_assertions::assert_eq!(
        form,
        SearchForm {
            status: "NotReconciled".to_string(),
            date_from: Some(date(2025, 6, 1)),
            date_to: Some(date(2025, 7, 1)),
            search: "search string".to_string(),
            page: 1,
        }
    );
    assert!(validator.is_valid());
}

#[test]
fn test_invalid_date_from() {
    let (form, validator) = decode_and_validate(
        "status=Reconciled&date-from=INVALID-06-01&date-to=2026-05-01&search=x",
    );

    assert_eq!(form.status, "Reconciled");
    assert_eq!(form.date_from, None);
    assert_eq!(
        validator,
        errors(&[("date-from", "From date must be provided.")])
    );
}

#[test]
fn test_invalid_date_to_sorts_first() {
    let (form, validator) = decode_and_validate("date-from=2025-06-01&date-to=garbage");

    assert_eq!(form.date_to, None);
    assert_eq!(
        validator,
        errors(&[("date-to", "End date cannot be before the start date.")])
    );
}

#[test]
fn test_invalid_status() {
    let (form, validator) = decode_and_validate("status=XXXXX");

    assert_eq!(form.status, "XXXXX");
    assert_eq!(form.reconciliation_status(), ReconciliationStatus::NotReconciled);
    assert_eq!(
        validator,
        errors(&[("status", "Invalid status value provided.")])
    );
}

#[test]
fn test_status_spaces_removed() {
    let (form, validator) = decode_and_validate("status=Not+Reconciled");

    assert_eq!(form.status, "NotReconciled");
    assert!(validator.is_valid());
}

#[test]
fn test_page_below_one_normalized() {
    let (form, validator) = decode_and_validate("page=-3");
    assert_eq!(form.page, 1);
    assert!(validator.is_valid());

    let (form, _) = decode_and_validate("page=0");
    assert_eq!(form.page, 1);
}

#[test]
fn test_non_numeric_page_is_decode_error() {
    let params = QueryParams::parse("page=two");
    let err = SearchForm::decode(&params, today()).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidQueryParam { ref field, ref value } if field == "page" && value == "two"
    ));
}

#[test]
fn test_blank_page_keeps_default() {
    let params = QueryParams::parse("page=&status=All");
    let form = SearchForm::decode(&params, today()).unwrap();

    assert_eq!(form.page, 1);
    assert_eq!(form.reconciliation_status(), ReconciliationStatus::All);
}

#[test]
fn test_blank_fields_keep_defaults() {
    let (form, validator) = decode_and_validate("date-from=&date-to=&status=All&search=&page=+");

    pretty_assertions::assert_eq!(
        form,
        SearchForm {
            status: "All".to_string(),
            date_from: Some(date(2025, 4, 1)),
            date_to: Some(date(2026, 3, 31)),
            search: String::new(),
            page: 1,
        }
    );
    assert!(validator.is_valid());
}

#[test]
fn test_blank_status_keeps_default() {
    let (form, validator) = decode_and_validate("status=");

    assert_eq!(form.status, "NotReconciled");
    assert!(validator.is_valid());
}

#[test]
fn test_unknown_keys_ignored() {
    let params = QueryParams::parse("something=there&status=All");
    let form = SearchForm::decode(&params, today()).unwrap();
    assert_eq!(form.reconciliation_status(), ReconciliationStatus::All);
}

#[test_case(1, 5 => 0 ; "first page")]
#[test_case(3, 5 => 10 ; "third page")]
#[test_case(2, 0 => 1 ; "default page length")]
#[test_case(-1, 5 => 0 ; "page below one")]
fn test_offset(page: i64, page_len: i64) -> i64 {
    let mut form = SearchForm::new(today());
    form.page = page;
    form.offset(page_len)
}

// ============================================================================
// Validator Tests
// ============================================================================

#[test]
fn test_validator_first_error_wins() {
    let mut validator = Validator::new();
    validator.add_error("status", "first");
    validator.add_error("status", "second");
    assert_eq!(validator.errors.get("status"), Some(&"first".to_string()));
}

#[test]
fn test_validator_check() {
    let mut validator = Validator::new();
    validator.check(true, "a", "never");
    assert!(validator.is_valid());

    validator.check(false, "b", "message");
    assert!(!validator.is_valid());
    assert_eq!(validator.errors.len(), 1);
}

#[test]
fn test_validator_into_result() {
    assert!(Validator::new().into_result().is_ok());

    let err = errors(&[("status", "bad")]).into_result().unwrap_err();
    match err {
        Error::Validation { errors } => {
            assert_eq!(errors.get("status"), Some(&"bad".to_string()));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}
