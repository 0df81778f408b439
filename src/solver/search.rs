//! Order search strategies
//!
//! Defines the `OrderSearch` trait and its sequential and parallel
//! implementations. Both visit every permutation index and agree on the
//! winner: the highest score, with a later index beating an earlier one on
//! equal score.

use super::permutations::Permutations;
use crate::core::{Board, Layout, PlacedWord};
use crate::engine::PlacementEngine;
use crate::lexicon::{Dictionary, LetterValues};
use rayon::prelude::*;
use std::sync::Arc;

/// Shared, read-only inputs of one solve
pub struct SearchJob<'a> {
    pub layout: &'a Arc<Layout>,
    pub dictionary: &'a Dictionary,
    pub values: &'a LetterValues,
    pub orders: Permutations<'a, String>,
}

/// A fully placed word order and its final board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestOrder {
    /// Permutation index the order was decoded from
    pub index: usize,
    pub score: u32,
    pub order: Vec<String>,
    pub board: Board,
    pub placed: Vec<PlacedWord>,
}

impl SearchJob<'_> {
    /// Place permutation `index` on a fresh board
    ///
    /// Returns `None` if that order is unsolvable.
    #[must_use]
    pub fn run(&self, index: usize) -> Option<BestOrder> {
        let order = self.orders.nth(index);
        let board = Board::new(Arc::clone(self.layout));
        let mut engine = PlacementEngine::new(board, self.dictionary, self.values);

        let score = engine.place_words(&order).score()?;
        let (board, placed) = engine.into_parts();
        Some(BestOrder {
            index,
            score,
            order,
            board,
            placed,
        })
    }
}

/// Pick the winner of two solved orders
#[inline]
fn later_best(a: BestOrder, b: BestOrder) -> BestOrder {
    if (b.score, b.index) > (a.score, a.index) {
        b
    } else {
        a
    }
}

/// A way of visiting every word order of a job
pub trait OrderSearch {
    /// Best solvable order, or `None` if every order is unsolvable
    fn search(&self, job: &SearchJob<'_>) -> Option<BestOrder>;
}

/// Enum wrapper for the search types
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// One permutation after another on the calling thread
    Sequential(SequentialSearch),
    /// Permutation indices split across the rayon pool (default)
    Parallel(ParallelSearch),
}

impl Default for SearchType {
    fn default() -> Self {
        Self::Parallel(ParallelSearch)
    }
}

impl OrderSearch for SearchType {
    fn search(&self, job: &SearchJob<'_>) -> Option<BestOrder> {
        match self {
            Self::Sequential(s) => s.search(job),
            Self::Parallel(s) => s.search(job),
        }
    }
}

impl SearchType {
    /// Create a search type from its name
    ///
    /// Supported names: "sequential", "parallel".
    /// Defaults to parallel if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "sequential" | "serial" => Self::Sequential(SequentialSearch),
            _ => Self::Parallel(ParallelSearch),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential(_) => "sequential",
            Self::Parallel(_) => "parallel",
        }
    }
}

/// Visits permutations in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequentialSearch;

impl OrderSearch for SequentialSearch {
    fn search(&self, job: &SearchJob<'_>) -> Option<BestOrder> {
        let mut best: Option<BestOrder> = None;
        for index in 0..job.orders.total() {
            let Some(run) = job.run(index) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| run.score >= b.score) {
                best = Some(run);
            }
        }
        best
    }
}

/// Evaluates permutations independently on the rayon pool
///
/// Each index gets its own board; the reduction is associative and
/// commutative, so the winner matches [`SequentialSearch`] regardless of
/// how rayon splits the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParallelSearch;

impl OrderSearch for ParallelSearch {
    fn search(&self, job: &SearchJob<'_>) -> Option<BestOrder> {
        (0..job.orders.total())
            .into_par_iter()
            .filter_map(|index| job.run(index))
            .reduce_with(later_best)
    }
}
