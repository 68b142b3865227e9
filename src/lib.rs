// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # chartfeed
//!
//! Fetches chart metadata from the Datawrapper API and writes a sorted,
//! deduplicated dataset for a static site to render.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartfeed::{Config, FetchOptions, run_pipeline};
//! use chartfeed::api::DatawrapperClient;
//! use chartfeed::validate::HttpThumbnailProbe;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> chartfeed::Result<()> {
//!     let config = Config::load(None)?;
//!     let options = FetchOptions::unfiltered(config.max_charts)?;
//!     let source = Arc::new(DatawrapperClient::new(&config)?);
//!     let probe = HttpThumbnailProbe::new(config.request_timeout)?;
//!
//!     let report = run_pipeline(source, &probe, &config, &options).await?;
//!     println!("Saved {} charts", report.saved);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌───────────┐   ┌──────────┐   ┌────────┐
//! │ Options  │ → │  Fetcher   │ → │ Transform │ → │ Validate │ → │ Output │
//! ├──────────┤   ├────────────┤   ├───────────┤   ├──────────┤   ├────────┤
//! │ --all    │   │ Offset     │   │ Defaults  │   │ HEAD     │   │ Sort   │
//! │ Config   │   │ Per author │   │ Category  │   │ probe    │   │ Atomic │
//! │ Prompts  │   │ Dedup      │   │ Thumbnail │   │          │   │ write  │
//! └──────────┘   └────────────┘   └───────────┘   └──────────┘   └────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Configuration loading
pub mod config;

/// HTTP client
pub mod http;

/// Remote API types and client
pub mod api;

/// Fetch option resolution
pub mod options;

/// Offset pagination
pub mod pagination;

/// Paginated, multi-author fetching
pub mod engine;

/// Chart normalization
pub mod transform;

/// Thumbnail validation
pub mod validate;

/// Dataset document and writer
pub mod output;

/// End-to-end fetch run
pub mod pipeline;

/// Account identity lookup
pub mod identity;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use error::{Error, Result};
pub use options::FetchOptions;
pub use pipeline::{run_pipeline, RunReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
