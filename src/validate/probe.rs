//! Thumbnail existence probes

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::transform::NormalizedChart;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Checks whether a thumbnail URL serves an image
#[async_trait]
pub trait ThumbnailProbe: Send + Sync {
    /// True when the URL answers with a success status
    async fn exists(&self, url: &str) -> bool;
}

/// [`ThumbnailProbe`] issuing unauthenticated HEAD requests
#[derive(Debug, Clone)]
pub struct HttpThumbnailProbe {
    http: HttpClient,
}

impl HttpThumbnailProbe {
    /// Create a probe with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let config = HttpClientConfig::builder().timeout(timeout).build();
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }
}

#[async_trait]
impl ThumbnailProbe for HttpThumbnailProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.http.head(url).await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!(url, status = response.status().as_u16(), "Thumbnail missing");
                false
            }
            Err(e) => {
                debug!(url, error = %e, "Thumbnail probe failed");
                false
            }
        }
    }
}

/// Charts that passed validation and how many were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Charts with a reachable thumbnail, in input order
    pub valid: Vec<NormalizedChart>,
    /// Charts dropped for an unreachable thumbnail
    pub skipped: usize,
}

/// Probe each chart's thumbnail in turn and keep the reachable ones
pub async fn validate_thumbnails(
    charts: Vec<NormalizedChart>,
    probe: &dyn ThumbnailProbe,
) -> ValidationOutcome {
    let total = charts.len();
    let mut outcome = ValidationOutcome::default();

    for (index, chart) in charts.into_iter().enumerate() {
        debug!("Checking {}/{}: {}", index + 1, total, chart.thumbnail_url);
        if probe.exists(&chart.thumbnail_url).await {
            outcome.valid.push(chart);
        } else {
            outcome.skipped += 1;
        }
    }

    info!(
        "Skipped {} charts without valid thumbnails",
        outcome.skipped
    );
    outcome
}
