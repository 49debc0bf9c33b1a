//! Common types used throughout recon-view
//!
//! This module contains the query parameter multimap shared by the form
//! layer, the pagination link builder and the server, plus small enums
//! used by configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;

// ============================================================================
// Query Parameters
// ============================================================================

/// Multi-valued query string parameters
///
/// Keys are opaque strings; each key holds one or more values in the order
/// they appeared. Iteration order of keys is unspecified, but [`encode`]
/// always sorts keys so the output is stable.
///
/// [`encode`]: QueryParams::encode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (with or without a leading `?`)
    ///
    /// Percent-escapes and `+` are decoded. Pairs without `=` get an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// First value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Replace every value of a key with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Add a value to a key, keeping existing values
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Encode as a query string without a leading `?`
    ///
    /// Keys are sorted lexicographically; values of a key keep their order.
    pub fn encode(&self) -> String {
        let mut keys: Vec<&String> = self.inner.keys().collect();
        keys.sort();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in keys {
            for value in &self.inner[key] {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

impl From<HashMap<String, Vec<String>>> for QueryParams {
    fn from(inner: HashMap<String, Vec<String>>) -> Self {
        Self { inner }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the binary's default tracing directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
