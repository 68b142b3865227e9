//! Fetch engine
//!
//! Drives the charts listing page by page and merges per-author results.
//!
//! # Overview
//!
//! - `ChartFetcher::fetch_for_author` - one pagination sequence, capped at a limit
//! - `ChartFetcher::fetch_all` - one sequence per author (or one unfiltered),
//!   deduplicated by chart id with the first author winning
//!
//! Requests are strictly sequential. Any API error aborts the fetch.

mod types;

pub use types::{FetchConfig, FetchStats};

use crate::api::{ChartQuery, ChartSource, RawChart};
use crate::error::Result;
use crate::options::FetchOptions;
use crate::pagination::{NextPage, OffsetPaginator, PaginationState};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Fetches chart listings from a [`ChartSource`]
pub struct ChartFetcher {
    /// Remote API
    source: Arc<dyn ChartSource>,
    /// Fetch configuration
    config: FetchConfig,
    /// Statistics
    stats: FetchStats,
}

impl ChartFetcher {
    /// Create a new fetcher
    pub fn new(source: Arc<dyn ChartSource>) -> Self {
        Self {
            source,
            config: FetchConfig::default(),
            stats: FetchStats::default(),
        }
    }

    /// Set fetch configuration
    #[must_use]
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Fetch up to `limit` records for one author/organization filter, in
    /// server order
    pub async fn fetch_for_author(
        &mut self,
        author: Option<&str>,
        organization: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RawChart>> {
        let paginator = OffsetPaginator::new(self.config.page_size, limit);
        let mut state = PaginationState::new();
        let mut charts = Vec::new();

        self.stats.add_sequence();

        loop {
            let query = ChartQuery {
                offset: state.offset,
                limit: self.config.page_size,
                author_id: author.map(String::from),
                team_id: organization.map(String::from),
                published_only: self.config.published_only,
            };

            let page = self.source.fetch_charts_page(&query).await?;
            let record_count = page.list.len();

            self.stats.add_page();
            self.stats.add_records(record_count);
            charts.extend(page.list);

            debug!("Fetched {} charts...", charts.len());

            match paginator.process_page(record_count, page.total, &mut state) {
                NextPage::Continue { .. } => {
                    tokio::time::sleep(self.config.page_delay).await;
                }
                NextPage::Done(reason) => {
                    debug!(?reason, pages = state.pages, "Pagination finished");
                    break;
                }
            }
        }

        charts.truncate(limit);
        Ok(charts)
    }

    /// Fetch records for every requested author, or once unfiltered,
    /// keeping the first occurrence of each chart id
    pub async fn fetch_all(&mut self, options: &FetchOptions) -> Result<Vec<RawChart>> {
        let start = Instant::now();
        let organization = options.organization.as_deref();

        info!("Fetching charts from Datawrapper API...");
        if !options.authors.is_empty() {
            info!("  Authors: {}", options.authors.join(", "));
        }
        if let Some(org) = organization {
            info!("  Organization: {org}");
        }
        info!("  Limit: {}", options.limit);

        let charts = if options.authors.is_empty() {
            self.fetch_for_author(None, organization, options.limit)
                .await?
        } else {
            let mut seen = HashSet::new();
            let mut merged = Vec::new();

            for author in &options.authors {
                info!("Fetching for author {author}...");
                let charts = self
                    .fetch_for_author(Some(author), organization, options.limit)
                    .await?;

                for chart in charts {
                    if seen.insert(chart.key().to_string()) {
                        merged.push(chart);
                    } else {
                        self.stats.add_duplicate();
                    }
                }
            }
            merged
        };

        self.stats.set_duration(start.elapsed().as_millis() as u64);
        info!("Total unique charts: {}", charts.len());
        Ok(charts)
    }
}
