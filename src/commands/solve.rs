//! Optimal-order solving command
//!
//! Searches every order of a word set and reports the best one.

use crate::core::PlacedWord;
use crate::engine::Outcome;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::solver::{Permutations, distinct_words};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of solving an unordered word set
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Distinct input words, first occurrences in input order
    pub words: Vec<String>,
    /// Number of orders searched
    pub orders: usize,
    pub search: &'static str,
    pub outcome: Outcome,
    /// Winning order, empty if unsolvable
    pub order: Vec<String>,
    pub placed: Vec<PlacedWord>,
    pub board: String,
    pub duration: Duration,
}

fn spinner(orders: usize, search: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("searching {orders} orders ({search})"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Solve `words` with the puzzle's configured search
///
/// Shows a spinner on stderr while searching when `progress` is set.
///
/// # Errors
///
/// Returns a [`PuzzleError`] if an input is missing or the word set is
/// larger than the configured maximum.
pub fn solve_words(
    puzzle: &mut Puzzle,
    words: &[String],
    progress: bool,
) -> Result<SolveReport, PuzzleError> {
    let distinct = distinct_words(words);
    if distinct.len() < words.len() {
        warn!(
            dropped = words.len() - distinct.len(),
            "ignoring repeated words"
        );
    }

    let search = puzzle.config().search.name();
    let orders = Permutations::new(&distinct).map_or(0, |p| p.total());
    info!(words = distinct.len(), orders, search, "solving word set");

    let pb = progress.then(|| spinner(orders, search));
    let start = Instant::now();
    let result = puzzle.solve(&distinct);
    let duration = start.elapsed();
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let outcome = result?;

    for record in puzzle.placed_words() {
        debug!(%record, anchor = ?record.anchor, "committed");
    }
    info!(%outcome, elapsed_ms = duration.as_millis(), "search finished");

    Ok(SolveReport {
        words: distinct,
        orders,
        search,
        outcome,
        order: puzzle.word_order().to_vec(),
        placed: puzzle.placed_words().to_vec(),
        board: puzzle.render()?,
        duration,
    })
}
