//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch Datawrapper charts into a static dataset
#[derive(Parser, Debug)]
#[command(name = "chartfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); defaults to ./chartfeed.yaml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset destination, overriding the configured output path
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch charts, validate thumbnails and write the dataset
    Fetch {
        /// Ignore configured filters and skip prompts
        #[arg(long)]
        all: bool,
    },

    /// Show your author id and team ids
    Whoami,
}
