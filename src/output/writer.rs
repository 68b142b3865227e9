//! Dataset document and writer
//!
//! The document is pretty-printed JSON written to a temporary file and then
//! renamed over the destination, so readers never see a partial file.

use crate::error::{Error, Result};
use crate::options::FetchOptions;
use crate::transform::{ChartCategory, NormalizedChart};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// The dataset consumed by the static site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    /// Charts, most recent first
    pub charts: Vec<NormalizedChart>,
    /// Generation time, ISO-8601 UTC with milliseconds
    pub last_updated: String,
    /// Summary of the run
    pub meta: OutputMeta,
}

/// Summary metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputMeta {
    /// Number of charts in the document
    pub total: usize,
    /// Author filter used, or null
    pub author_ids: Option<Vec<String>>,
    /// Organization filter used, or null
    pub organization_id: Option<String>,
}

/// Sort charts by `published_at`, newest first; unparseable timestamps last
pub fn sort_by_recency(charts: &mut [NormalizedChart]) {
    charts.sort_by_cached_key(|chart| Reverse(chart.published_time()));
}

/// Assemble the document from validated charts
pub fn build_document(
    mut charts: Vec<NormalizedChart>,
    options: &FetchOptions,
    generated_at: DateTime<Utc>,
) -> OutputDocument {
    sort_by_recency(&mut charts);

    OutputDocument {
        meta: OutputMeta {
            total: charts.len(),
            author_ids: Some(options.authors.clone()).filter(|a| !a.is_empty()),
            organization_id: options.organization.clone(),
        },
        last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        charts,
    }
}

/// Write the document, replacing any previous file
pub async fn write_document(path: impl AsRef<Path>, document: &OutputDocument) -> Result<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(document)
        .map_err(|e| Error::output(format!("Failed to serialize dataset: {e}")))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            Error::output(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, &contents)
        .await
        .map_err(|e| Error::output(format!("Failed to write dataset: {e}")))?;

    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| Error::output(format!("Failed to rename dataset: {e}")))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote dataset");
    Ok(())
}

/// Read a previously written document
pub async fn read_document(path: impl AsRef<Path>) -> Result<OutputDocument> {
    let contents = tokio::fs::read_to_string(path.as_ref()).await?;
    Ok(serde_json::from_str(&contents)?)
}

/// Chart count per category, largest first
pub fn category_breakdown(charts: &[NormalizedChart]) -> Vec<(ChartCategory, usize)> {
    let mut counts: HashMap<ChartCategory, usize> = HashMap::new();
    for chart in charts {
        *counts.entry(chart.category).or_default() += 1;
    }

    let mut breakdown: Vec<_> = counts.into_iter().collect();
    breakdown.sort_by(|(a_cat, a_n), (b_cat, b_n)| b_n.cmp(a_n).then(a_cat.cmp(b_cat)));
    breakdown
}
