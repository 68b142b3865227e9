//! Engine types
//!
//! Configuration and statistics for the chart fetcher.

use crate::config::{Config, MAX_PAGE_SIZE};
use std::time::Duration;

/// Configuration for fetch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Records requested per page
    pub page_size: usize,
    /// Pause between successive pages of one author
    pub page_delay: Duration,
    /// Restrict the listing to published charts
    pub published_only: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            page_delay: Duration::from_millis(100),
            published_only: true,
        }
    }
}

impl FetchConfig {
    /// Take page size, delay and publication filter from the run config
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            page_delay: config.page_delay,
            published_only: config.published_only,
        }
    }
}

/// Statistics from a fetch operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Records received, before deduplication
    pub records_fetched: usize,
    /// Pages requested
    pub pages_fetched: usize,
    /// Pagination sequences run (one per author, or one unfiltered)
    pub sequences: usize,
    /// Records dropped as duplicates of an earlier author's
    pub duplicates: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl FetchStats {
    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_fetched += count;
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add a pagination sequence
    pub fn add_sequence(&mut self) {
        self.sequences += 1;
    }

    /// Add a duplicate
    pub fn add_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
