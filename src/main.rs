//! recon-view CLI
//!
//! Command-line interface for the paginated record list

use clap::Parser;
use recon_view::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let config = match runner.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level: tracing::Level = runner.log_level(&config).into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = runner.run(config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
