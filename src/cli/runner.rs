//! CLI runner - executes commands

use crate::api::{ChartSource, DatawrapperClient};
use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::error::{Result, TOKEN_ENV};
use crate::identity::lookup_identity;
use crate::options::{resolve_options_blocking, TerminalPrompt};
use crate::pipeline::{run_pipeline, RunReport};
use crate::validate::HttpThumbnailProbe;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// Where API tokens are issued
pub const TOKEN_URL: &str = "https://app.datawrapper.de/account/api-tokens";

/// Setup guidance shown when the API token is missing
pub fn credential_help() -> String {
    format!(
        "Error: {TOKEN_ENV} environment variable is required\n\n\
         To set it up:\n\
         1. Go to {TOKEN_URL}\n\
         2. Create a new token with chart:read scope\n\
         3. Add it to your shell profile:\n\
         \x20  export {TOKEN_ENV}=your_token_here"
    )
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch { all } => self.fetch(*all).await,
            Commands::Whoami => self.whoami().await,
        }
    }

    /// Load configuration, applying the `--output` override
    fn load_config(&self) -> Result<Config> {
        let config = Config::load(self.cli.config.as_deref())?;
        Ok(match &self.cli.output {
            Some(path) => config.with_output_path(path),
            None => config,
        })
    }

    /// Fetch, validate and write the dataset
    async fn fetch(&self, all: bool) -> Result<()> {
        let config = self.load_config()?;
        debug!(?config, "Starting fetch");

        // Prompts finish before any request is made
        let options =
            resolve_options_blocking(all, config.clone(), TerminalPrompt::stdio).await?;

        let source: Arc<dyn ChartSource> = Arc::new(DatawrapperClient::new(&config)?);
        let probe = HttpThumbnailProbe::new(config.request_timeout)?;

        let report = run_pipeline(source, &probe, &config, &options).await?;
        println!("{}", render_summary(&report));
        Ok(())
    }

    /// Print account and team ids
    async fn whoami(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = DatawrapperClient::new(&config)?;

        println!("Fetching your Datawrapper account info...\n");
        let identity = lookup_identity(&client).await?;
        println!("{}", identity.render());
        Ok(())
    }
}

/// Save location and per-category counts
fn render_summary(report: &RunReport) -> String {
    let mut out = format!(
        "\nSaved {} charts to {}",
        report.saved,
        report.output_path.display()
    );
    if !report.categories.is_empty() {
        out.push_str("\n\nBy category:");
        for (category, count) in &report.categories {
            let _ = write!(out, "\n  {category}: {count}");
        }
    }
    out
}
