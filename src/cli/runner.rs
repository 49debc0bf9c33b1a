//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::serve;
use crate::config::AppConfig;
use crate::error::{Result, ResultExt};
use crate::listing::{MemorySource, RecordSource};
use crate::pagination::Pagination;
use crate::types::{LogLevel, QueryParams};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the configuration file given with `--config`, or defaults
    pub fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => AppConfig::load(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Log level to install: `--verbose` wins over the config file
    pub fn log_level(&self, config: &AppConfig) -> LogLevel {
        if self.cli.verbose {
            LogLevel::Debug
        } else {
            config.log_level
        }
    }

    /// Run the CLI command
    pub async fn run(&self, config: AppConfig) -> Result<()> {
        match &self.cli.command {
            Commands::Page {
                page_len,
                total,
                page,
                query,
            } => {
                let page_len = page_len.unwrap_or(config.list.page_len);
                let output = self.page(page_len, *total, *page, query)?;
                self.emit(&output)
            }
            Commands::Serve { port, records } => {
                let mut config = config;
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(records) = records {
                    config.records = Some(records.clone());
                }
                let source = load_source(config.records.as_ref())?;
                serve(&config, source).await
            }
        }
    }

    /// Compute pagination for the `page` command
    pub fn page(&self, page_len: i64, total: i64, page: i64, query: &str) -> Result<Value> {
        let params = QueryParams::parse(query);
        let pagination = Pagination::new(page_len, total, page, params)?;

        Ok(json!({
            "type": "PAGINATION",
            "pagination": pagination,
            "next_url": pagination.next_url(),
            "previous_url": pagination.previous_url(),
        }))
    }

    /// Print a value in the selected output format
    fn emit(&self, value: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Open the configured record file, or an empty source when none is set
fn load_source(path: Option<&PathBuf>) -> Result<Arc<dyn RecordSource>> {
    match path {
        Some(path) => {
            let source = MemorySource::load(path)
                .with_context(|| format!("Failed to load records from {}", path.display()))?;
            Ok(Arc::new(source))
        }
        None => {
            tracing::warn!("No records file configured, serving an empty list");
            Ok(Arc::new(MemorySource::default()))
        }
    }
}
