//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Filtered, paginated list view over synced records
#[derive(Parser, Debug)]
#[command(name = "recon-view")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute pagination and next/previous links
    Page {
        /// Rows per page (zero or negative = one row per page; default from config)
        #[arg(long, allow_negative_numbers = true)]
        page_len: Option<i64>,

        /// Number of records matching the filters
        #[arg(long)]
        total: i64,

        /// Requested page, 1-based
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Query string of the request, e.g. "status=ok&page=2"
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Start the HTTP list view
    Serve {
        /// Port to listen on (default from config)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON file with records to serve (default from config)
        #[arg(long)]
        records: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
