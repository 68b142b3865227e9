//! Raw record to normalized record mapping

use super::category::category_for_type;
use super::thumbnail::{public_url, thumbnail_url};
use super::types::{NormalizedChart, UNKNOWN_TYPE, UNTITLED};
use crate::api::{non_empty, RawChart};
use crate::config::Config;
use tracing::debug;

/// Maps remote records to output records.
///
/// Holds only the CDN base, so the same input always yields the same output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTransformer {
    cdn_base: String,
}

impl ChartTransformer {
    /// Create a transformer building fallback URLs on `cdn_base`
    pub fn new(cdn_base: impl Into<String>) -> Self {
        Self {
            cdn_base: cdn_base.into(),
        }
    }

    /// Create a transformer from the run config
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.cdn_base)
    }

    /// Normalize one record
    pub fn transform(&self, chart: &RawChart) -> NormalizedChart {
        let id = chart.key().to_string();
        let owned = |value: Option<&str>| non_empty(value).map(String::from);

        NormalizedChart {
            title: owned(chart.title.as_deref()).unwrap_or_else(|| UNTITLED.to_string()),
            chart_type: owned(chart.chart_type.as_deref())
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            category: category_for_type(chart.chart_type.as_deref()),
            published_at: owned(chart.last_modified_at.as_deref())
                .or_else(|| owned(chart.published_at.as_deref()))
                .or_else(|| owned(chart.created_at.as_deref())),
            public_url: public_url(chart, &id, &self.cdn_base),
            thumbnail_url: thumbnail_url(chart, &id, &self.cdn_base),
            description: describe(chart, "intro"),
            source: describe(chart, "source-name"),
            byline: describe(chart, "byline"),
            author_id: owned(chart.author_id.as_deref()),
            organization_id: owned(chart.organization_id.as_deref())
                .or_else(|| owned(chart.team_id.as_deref())),
            id,
        }
    }

    /// Normalize records and drop those without any timestamp
    pub fn transform_dated(&self, charts: &[RawChart]) -> Vec<NormalizedChart> {
        let transformed: Vec<NormalizedChart> = charts
            .iter()
            .map(|chart| self.transform(chart))
            .filter(|chart| chart.published_at.is_some())
            .collect();

        let undated = charts.len() - transformed.len();
        if undated > 0 {
            debug!(undated, "Dropped charts without timestamps");
        }
        transformed
    }
}

fn describe(chart: &RawChart, field: &str) -> String {
    chart
        .metadata_str(&format!("/describe/{field}"))
        .unwrap_or_default()
        .to_string()
}
