//! Board legality checks
//!
//! A candidate placement is formed on a scratch copy of the board; every
//! maximal run of two or more letters, across all rows and columns, must then
//! be a dictionary word. The live board is never touched here.

use crate::core::{Board, Coord, Span};
use crate::lexicon::Dictionary;

/// Result of checking one candidate placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Whether every run is a dictionary word
    pub legal: bool,
    /// Runs that were dictionary words, whether or not the check passed
    pub valid_runs: Vec<String>,
}

/// Every maximal run of two or more letters: rows first, then columns
#[must_use]
pub fn letter_runs(board: &Board) -> Vec<Vec<u8>> {
    let mut runs = Vec::new();

    for row in 0..board.rows() {
        collect_runs(
            (0..board.columns()).map(|column| board.letter(Coord::new(row, column))),
            &mut runs,
        );
    }
    for column in 0..board.columns() {
        collect_runs(
            (0..board.rows()).map(|row| board.letter(Coord::new(row, column))),
            &mut runs,
        );
    }

    runs
}

fn collect_runs(line: impl Iterator<Item = Option<u8>>, runs: &mut Vec<Vec<u8>>) {
    let mut current = Vec::new();
    for cell in line.chain(std::iter::once(None)) {
        if let Some(letter) = cell {
            current.push(letter);
        } else {
            if current.len() >= 2 {
                runs.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
}

/// Check `word` laid into `span` against the current board
///
/// Scans every run rather than stopping at the first bad one, so the set of
/// valid runs doesn't depend on scan order.
#[must_use]
pub fn check(board: &Board, span: &Span, word: &[u8], dictionary: &Dictionary) -> Verdict {
    let scratch = board.with_word(span, word);
    let mut verdict = Verdict {
        legal: true,
        valid_runs: Vec::new(),
    };

    for run in letter_runs(&scratch) {
        match String::from_utf8(run) {
            Ok(run) if dictionary.contains(&run) => verdict.valid_runs.push(run),
            _ => verdict.legal = false,
        }
    }

    verdict
}
