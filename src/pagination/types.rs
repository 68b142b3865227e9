//! Pagination types
//!
//! Bookkeeping shared by the offset paginator and the fetch loop.

/// Why pagination finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The accumulated records reached the caller's limit
    LimitReached,
    /// The server returned fewer records than a full page
    ShortPage,
    /// The server-reported total does not exceed what was accumulated
    TotalReached,
}

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch another page starting at this offset
    Continue {
        /// Offset of the next request
        offset: usize,
    },
    /// No more pages
    Done(StopReason),
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset of the next request
    pub offset: usize,
    /// Total records fetched so far
    pub total_fetched: usize,
    /// Pages fetched so far
    pub pages: usize,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Add offset
    pub fn add_offset(&mut self, amount: usize) {
        self.offset += amount;
    }

    /// Record a received page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.total_fetched += records;
    }
}
