//! Ordered placement command
//!
//! Places words in the order given and reports the outcome.

use crate::core::PlacedWord;
use crate::engine::Outcome;
use crate::puzzle::{Puzzle, PuzzleError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of placing an ordered word list
#[derive(Debug, Clone)]
pub struct PlaceReport {
    pub words: Vec<String>,
    pub outcome: Outcome,
    pub placed: Vec<PlacedWord>,
    /// Board text after the run (pristine if unsolvable)
    pub board: String,
    pub duration: Duration,
}

/// Place `words` on a fresh board in the given order
///
/// # Errors
///
/// Returns a [`PuzzleError`] if an input is missing or the first word
/// cannot fit the board.
pub fn place_words(puzzle: &mut Puzzle, words: &[String]) -> Result<PlaceReport, PuzzleError> {
    info!(count = words.len(), "placing words in order");

    let start = Instant::now();
    let outcome = puzzle.place(words)?;
    let duration = start.elapsed();

    for record in puzzle.placed_words() {
        debug!(%record, anchor = ?record.anchor, "committed");
    }
    info!(%outcome, elapsed_ms = duration.as_millis(), "placement finished");

    Ok(PlaceReport {
        words: words.to_vec(),
        outcome,
        placed: puzzle.placed_words().to_vec(),
        board: puzzle.render()?,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        let mut puzzle = Puzzle::new();
        puzzle
            .load_board(".......\n.......\n.......\n...*...\n.......\n.......\n.......")
            .unwrap();
        puzzle.load_dictionary("cat\ntea\nlet").unwrap();
        puzzle
            .load_letter_values("a\t1\nc\t3\nt\t1\ne\t1\nl\t1")
            .unwrap();
        puzzle
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn report_carries_records_and_board() {
        let mut puzzle = puzzle();
        let report = place_words(&mut puzzle, &words(&["cat", "tea", "let"])).unwrap();

        assert_eq!(report.outcome, Outcome::Placed(16));
        assert_eq!(report.placed.len(), 3);
        assert_eq!(report.board.lines().nth(3), Some(".cat..."));
        assert_eq!(report.words, ["cat", "tea", "let"]);
    }

    #[test]
    fn unsolvable_report_is_empty() {
        let mut puzzle = puzzle();
        let report = place_words(&mut puzzle, &words(&["cat", "dog"])).unwrap();

        assert_eq!(report.outcome, Outcome::Unsolvable);
        assert!(report.placed.is_empty());
        assert!(!report.board.contains('c'));
    }

    #[test]
    fn missing_input_is_an_error() {
        let mut puzzle = Puzzle::new();
        let err = place_words(&mut puzzle, &words(&["cat"])).unwrap_err();
        assert_eq!(err, PuzzleError::BoardNotLoaded);
    }
}
