//! CLI module
//!
//! Command-line interface for the chart fetcher.
//!
//! # Commands
//!
//! - `fetch` - Fetch charts and write the dataset (`--all` skips filters)
//! - `whoami` - Show account and team ids for configuring filters

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{credential_help, Runner};
