//! Error types for recon-view
//!
//! Two layers live here. `InvalidPageNumber` is the one failure the
//! pagination calculator can produce; it is a plain value compared with `==`.
//! `Error` is the crate-wide enum used by everything around it (config,
//! form decoding, record sources, the server).

use std::collections::BTreeMap;
use thiserror::Error;

/// A requested page lies beyond the last page of the result set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid page number {requested}: last page is {max}")]
pub struct InvalidPageNumber {
    /// Page number the caller asked for
    pub requested: i64,
    /// Last valid page for the current filters
    pub max: i64,
}

impl InvalidPageNumber {
    /// Create a new invalid page number error
    pub fn new(requested: i64, max: i64) -> Self {
        Self { requested, max }
    }
}

/// The main error type for recon-view
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error(transparent)]
    InvalidPageNumber(#[from] InvalidPageNumber),

    #[error("Invalid value for query parameter '{field}': {value:?}")]
    InvalidQueryParam { field: String, value: String },

    #[error("Validation failed: {}", format_field_errors(.errors))]
    Validation { errors: BTreeMap<String, String> },

    // ============================================================================
    // Record Source Errors
    // ============================================================================
    #[error("Record source error: {message}")]
    Source { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid query parameter error
    pub fn invalid_param(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidQueryParam {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a record source error
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPageNumber(_) | Error::InvalidQueryParam { .. } | Error::Validation { .. }
        )
    }
}

fn format_field_errors(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for recon-view
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
