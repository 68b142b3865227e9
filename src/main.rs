// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]

//! chartfeed CLI
//!
//! Command-line interface for fetching Datawrapper charts

use chartfeed::cli::{credential_help, Cli, Runner};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        if e.is_missing_credential() {
            eprintln!("{}", credential_help());
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
