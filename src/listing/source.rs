//! Record source trait and the in-memory implementation

use super::types::Record;
use crate::error::{Error, Result};
use crate::forms::SearchForm;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Supplies matching row counts and row windows for the list view
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Number of records matching the form's filters
    async fn count(&self, form: &SearchForm) -> Result<i64>;

    /// Up to `limit` matching records, skipping the first `offset`
    async fn fetch(&self, form: &SearchForm, limit: i64, offset: i64) -> Result<Vec<Record>>;
}

/// Records held in memory, sorted by date then id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Record>,
}

impl MemorySource {
    /// Create a source from records in any order
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Self { records }
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load a JSON array of records from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let source = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} records from {}", source.len(), path.display());
        Ok(source)
    }

    /// Total number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching<'a>(&'a self, form: &'a SearchForm) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.matches(form))
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn count(&self, form: &SearchForm) -> Result<i64> {
        Ok(self.matching(form).count() as i64)
    }

    async fn fetch(&self, form: &SearchForm, limit: i64, offset: i64) -> Result<Vec<Record>> {
        if limit < 0 || offset < 0 {
            return Err(Error::source(format!(
                "negative window: limit {limit}, offset {offset}"
            )));
        }

        Ok(self
            .matching(form)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
