//! Optimal-order solver interface

use super::permutations::Permutations;
use super::search::{BestOrder, OrderSearch, SearchJob};
use crate::core::Layout;
use crate::lexicon::{Dictionary, LetterValues};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("{count} distinct words exceed the limit of {max}")]
    TooManyWords { count: usize, max: usize },
}

/// Finds the word order that scores highest
///
/// Coordinates a solve using a given search over shared, read-only inputs.
pub struct OptimalSolver<'a, S: OrderSearch> {
    search: S,
    layout: &'a Arc<Layout>,
    dictionary: &'a Dictionary,
    values: &'a LetterValues,
    max_words: usize,
}

impl<'a, S: OrderSearch> OptimalSolver<'a, S> {
    pub const fn new(
        search: S,
        layout: &'a Arc<Layout>,
        dictionary: &'a Dictionary,
        values: &'a LetterValues,
        max_words: usize,
    ) -> Self {
        Self {
            search,
            layout,
            dictionary,
            values,
            max_words,
        }
    }

    /// Try every order of the distinct `words` and keep the best
    ///
    /// Returns `Ok(None)` when no order places every word (including an
    /// empty word set).
    ///
    /// # Errors
    /// Returns [`SolverError::TooManyWords`] if the distinct word count is
    /// above the configured maximum.
    pub fn solve<W: AsRef<str>>(&self, words: &[W]) -> Result<Option<BestOrder>, SolverError> {
        let words = distinct_words(words);
        let too_many = SolverError::TooManyWords {
            count: words.len(),
            max: self.max_words,
        };
        if words.len() > self.max_words {
            return Err(too_many);
        }
        if words.is_empty() {
            return Ok(None);
        }

        let orders = Permutations::new(&words).ok_or(too_many)?;
        let job = SearchJob {
            layout: self.layout,
            dictionary: self.dictionary,
            values: self.values,
            orders,
        };
        Ok(self.search.search(&job))
    }
}

/// Drop repeated words, keeping each first occurrence in place
#[must_use]
pub fn distinct_words<W: AsRef<str>>(words: &[W]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| seen.insert(*w))
        .map(str::to_owned)
        .collect()
}
