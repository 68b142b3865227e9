//! Offset pagination
//!
//! Requests fixed-size windows `[offset, offset + page_size)` until one of
//! three signals says the listing is exhausted for this caller.

use super::types::{NextPage, PaginationState, StopReason};

/// Offset-based paginator with a cap on total records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPaginator {
    /// Number of records per page
    pub page_size: usize,
    /// Stop once this many records are accumulated
    pub limit: usize,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(page_size: usize, limit: usize) -> Self {
        Self { page_size, limit }
    }

    /// Process a received page and decide whether to request another.
    ///
    /// Stops when the limit is reached, when the page came back short, or
    /// when the reported total does not exceed the accumulated count. A
    /// missing total counts as exhausted.
    pub fn process_page(
        &self,
        records_count: usize,
        reported_total: Option<u64>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_page(records_count);

        let reason = if state.total_fetched >= self.limit {
            Some(StopReason::LimitReached)
        } else if records_count < self.page_size {
            Some(StopReason::ShortPage)
        } else if reported_total.map_or(true, |total| total <= state.total_fetched as u64) {
            Some(StopReason::TotalReached)
        } else {
            None
        };

        if let Some(reason) = reason {
            state.mark_done();
            return NextPage::Done(reason);
        }

        state.add_offset(self.page_size);
        NextPage::Continue {
            offset: state.offset,
        }
    }
}
