//! Pagination module
//!
//! # Overview
//!
//! The charts listing is paged by offset. [`OffsetPaginator`] decides after
//! each page whether another request is needed; [`PaginationState`] carries
//! the running offset and counts between requests.

mod offset;
mod types;

pub use offset::OffsetPaginator;
pub use types::{NextPage, PaginationState, StopReason};
