//! Thumbnail URL derivation
//!
//! Published charts live under one of two URL shapes:
//! - `{origin}/charts/{id}/{version}/` with the image at `{origin}/charts/{id}/full.png`
//! - `{cdn}/{id}/{version}/` with the image at `{cdn}/{id}/{version}/full.png`

use crate::api::{non_empty, RawChart};
use url::Url;

/// Image file served next to every published chart
pub const THUMBNAIL_FILE: &str = "full.png";

/// Derive the thumbnail URL for a chart with the given output id
pub fn thumbnail_url(chart: &RawChart, id: &str, cdn_base: &str) -> String {
    if let Some(public_url) = non_empty(chart.public_url.as_deref()) {
        if let Ok(url) = Url::parse(public_url) {
            if url.path().contains("/charts/") {
                return format!(
                    "{}/charts/{id}/{THUMBNAIL_FILE}",
                    url.origin().ascii_serialization()
                );
            }
            let base = public_url.strip_suffix('/').unwrap_or(public_url);
            return format!("{base}/{THUMBNAIL_FILE}");
        }
    }

    let version = chart.public_version.filter(|v| *v > 0).unwrap_or(1);
    format!(
        "{}/{id}/{version}/{THUMBNAIL_FILE}",
        cdn_base.trim_end_matches('/')
    )
}

/// Public URL of a chart, or the CDN location built from its id
pub fn public_url(chart: &RawChart, id: &str, cdn_base: &str) -> String {
    match non_empty(chart.public_url.as_deref()) {
        Some(url) => url.to_string(),
        None => format!("{}/{id}/", cdn_base.trim_end_matches('/')),
    }
}
