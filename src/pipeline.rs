//! Fetch pipeline
//!
//! fetch → transform → validate thumbnails → sort → write. The dataset file
//! is only touched once every earlier stage has succeeded.

use crate::api::ChartSource;
use crate::config::Config;
use crate::engine::{ChartFetcher, FetchConfig, FetchStats};
use crate::error::Result;
use crate::options::FetchOptions;
use crate::output::{build_document, category_breakdown, write_document};
use crate::transform::{ChartCategory, ChartTransformer};
use crate::validate::{validate_thumbnails, ThumbnailProbe};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Where the dataset was written
    pub output_path: PathBuf,
    /// Unique records received from the API
    pub fetched: usize,
    /// Records dropped for having no timestamp
    pub undated: usize,
    /// Records dropped for an unreachable thumbnail
    pub skipped: usize,
    /// Records written
    pub saved: usize,
    /// Saved records per category, largest first
    pub categories: Vec<(ChartCategory, usize)>,
    /// Fetch statistics
    pub stats: FetchStats,
}

/// Run one fetch and replace the dataset at `config.output_path`
pub async fn run_pipeline(
    source: Arc<dyn ChartSource>,
    probe: &dyn ThumbnailProbe,
    config: &Config,
    options: &FetchOptions,
) -> Result<RunReport> {
    let mut fetcher = ChartFetcher::new(source).with_config(FetchConfig::from_config(config));
    let raw = fetcher.fetch_all(options).await?;

    let transformer = ChartTransformer::from_config(config);
    let dated = transformer.transform_dated(&raw);
    let undated = raw.len() - dated.len();

    info!("Validating thumbnails for {} charts...", dated.len());
    let outcome = validate_thumbnails(dated, probe).await;

    let document = build_document(outcome.valid, options, Utc::now());
    write_document(&config.output_path, &document).await?;
    info!(
        "Saved {} charts to {}",
        document.meta.total,
        config.output_path.display()
    );

    Ok(RunReport {
        output_path: config.output_path.clone(),
        fetched: raw.len(),
        undated,
        skipped: outcome.skipped,
        saved: document.meta.total,
        categories: category_breakdown(&document.charts),
        stats: fetcher.stats().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Account, ChartPage, ChartQuery, RawChart, Team};
    use crate::error::Error;
    use crate::output::read_document;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    struct StaticSource {
        charts: Vec<RawChart>,
        fail: bool,
    }

    #[async_trait]
    impl ChartSource for StaticSource {
        async fn fetch_charts_page(&self, query: &ChartQuery) -> Result<ChartPage> {
            if self.fail {
                return Err(Error::http_status(403, "forbidden"));
            }
            let list = self
                .charts
                .iter()
                .skip(query.offset)
                .take(query.limit)
                .cloned()
                .collect();
            Ok(ChartPage::new(list, Some(self.charts.len() as u64)))
        }

        async fn fetch_me(&self) -> Result<Account> {
            Ok(Account::default())
        }

        async fn fetch_teams(&self) -> Result<Vec<Team>> {
            Ok(Vec::new())
        }
    }

    /// Rejects every thumbnail whose URL contains "broken"
    struct PatternProbe;

    #[async_trait]
    impl ThumbnailProbe for PatternProbe {
        async fn exists(&self, url: &str) -> bool {
            !url.contains("broken")
        }
    }

    fn raw(id: &str, published_at: Option<&str>, chart_type: &str) -> RawChart {
        RawChart {
            public_id: Some(id.to_string()),
            title: Some(id.to_uppercase()),
            chart_type: Some(chart_type.to_string()),
            published_at: published_at.map(String::from),
            public_version: Some(1),
            ..RawChart::default()
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::new("https://api.example.com/v3", "token")
            .with_output_path(dir.path().join("out/charts.json"));
        config.page_delay = Duration::ZERO;
        config
    }

    #[tokio::test]
    async fn test_run_pipeline_filters_sorts_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let source = Arc::new(StaticSource {
            charts: vec![
                raw("old", Some("2023-01-01T00:00:00.000Z"), "d3-lines"),
                raw("broken", Some("2024-01-01T00:00:00.000Z"), "d3-bars"),
                raw("undated", None, "d3-bars"),
                raw("new", Some("2024-05-01T00:00:00.000Z"), "d3-maps-choropleth"),
            ],
            fail: false,
        });
        let options = FetchOptions::unfiltered(500).unwrap();

        let report = run_pipeline(source, &PatternProbe, &config, &options)
            .await
            .unwrap();

        assert_eq!(report.fetched, 4);
        assert_eq!(report.undated, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.saved, 2);
        assert_eq!(
            report.categories,
            vec![(ChartCategory::Map, 1), (ChartCategory::Line, 1)]
        );

        let document = read_document(&config.output_path).await.unwrap();
        let ids: Vec<&str> = document.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert_eq!(document.meta.total, 2);
        assert_eq!(document.meta.author_ids, None);
    }

    #[tokio::test]
    async fn test_run_pipeline_api_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let source = Arc::new(StaticSource {
            charts: Vec::new(),
            fail: true,
        });
        let options = FetchOptions::unfiltered(10).unwrap();

        let err = run_pipeline(source, &PatternProbe, &config, &options)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert!(!config.output_path.exists());
    }
}
