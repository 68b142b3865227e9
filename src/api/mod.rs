//! Remote API module
//!
//! Payload types for the charts, profile and teams endpoints, and the
//! [`ChartSource`] trait the rest of the pipeline depends on.

mod client;
mod types;

pub use client::{ChartSource, DatawrapperClient};
pub use types::{non_empty, Account, ChartPage, ChartQuery, RawChart, Team, TeamList};
