//! CLI module
//!
//! Command-line interface for the list view.
//!
//! # Commands
//!
//! - `page` - Compute a page window and its links for given numbers
//! - `serve` - Start the HTTP list view

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, AppState};
