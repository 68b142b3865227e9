//! Chart normalization
//!
//! Turns remote chart records into the flat shape the static site renders:
//! defaults for missing fields, a coarse category, the most recent
//! timestamp and a derived thumbnail URL.

mod category;
mod thumbnail;
mod transformer;
mod types;

pub use category::{category_for_type, ChartCategory, CATEGORY_TABLE};
pub use thumbnail::{public_url, thumbnail_url, THUMBNAIL_FILE};
pub use transformer::ChartTransformer;
pub use types::{NormalizedChart, UNKNOWN_TYPE, UNTITLED};

#[cfg(test)]
mod tests;
