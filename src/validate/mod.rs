//! Thumbnail validation
//!
//! Charts whose preview image cannot be fetched are dropped from the
//! dataset. A failed probe is never an error; it only removes one chart.

mod probe;

pub use probe::{validate_thumbnails, HttpThumbnailProbe, ThumbnailProbe, ValidationOutcome};

#[cfg(test)]
mod tests;
