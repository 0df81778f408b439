//! Solve configuration

use super::SearchType;

/// Largest word set solved by default; `10!` orders is already 3.6M runs
pub const DEFAULT_MAX_WORDS: usize = 10;

/// How an optimal-order solve is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub search: SearchType,
    /// Word sets larger than this are rejected before any placement
    pub max_words: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(search: SearchType, max_words: usize) -> Self {
        Self { search, max_words }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(SearchType::default(), DEFAULT_MAX_WORDS)
    }
}
