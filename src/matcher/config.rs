//! Matcher configuration

use super::LengthFilter;

/// Word lists at least this long are matched in parallel by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for a word search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub filter: LengthFilter,
    /// Minimum word list length for matching across threads.
    /// `usize::MAX` keeps every search on the calling thread.
    pub parallel_threshold: usize,
}

impl MatchConfig {
    #[must_use]
    pub const fn new(filter: LengthFilter) -> Self {
        Self {
            filter,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Keep every search single-threaded
    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel_threshold = usize::MAX;
        self
    }

    #[must_use]
    pub const fn use_parallel(&self, dict_len: usize) -> bool {
        dict_len >= self.parallel_threshold
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(LengthFilter::Raw)
    }
}
