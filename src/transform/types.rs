//! Normalized chart record

use super::category::ChartCategory;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Title used when a chart has none
pub const UNTITLED: &str = "Untitled";

/// Type used when a chart has none
pub const UNKNOWN_TYPE: &str = "unknown";

/// A chart as written to the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedChart {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub category: ChartCategory,
    /// Most recent of last-modified, published and created timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub public_url: String,
    pub thumbnail_url: String,
    pub description: String,
    pub source: String,
    pub byline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl NormalizedChart {
    /// Parsed `published_at`, if present and RFC 3339
    pub fn published_time(&self) -> Option<DateTime<FixedOffset>> {
        self.published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
    }
}
