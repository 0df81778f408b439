//! Placement engine
//!
//! Places an ordered list of words onto a board one at a time. Each word
//! takes its best legal placement given what is already on the board:
//!
//! 1. First word: every window through the start square, both orientations.
//! 2. Later words: through an existing letter they share (in-line).
//! 3. Fallback: perpendicular to a placed word, extending it by one letter
//!    (see [`cross`](super::cross)).
//!
//! Placement is greedy per word; the engine never revisits earlier choices.

use super::bonus::bonus_score;
use super::legality;
use super::outcome::Outcome;
use super::scoring::span_score;
use crate::core::{Anchor, Board, Coord, Orientation, PlacedWord, Span};
use crate::lexicon::{Dictionary, LetterValues};
use rustc_hash::FxHashSet;

/// A scored, legal placement not yet committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Candidate {
    pub span: Span,
    pub score: u32,
}

/// Keep `candidate` only if it strictly beats the current best
fn keep_best(best: &mut Option<Candidate>, candidate: Candidate) {
    if best.is_none_or(|b| candidate.score > b.score) {
        *best = Some(candidate);
    }
}

/// Runs placements for one word sequence on a board it exclusively owns
pub struct PlacementEngine<'a> {
    pub(super) board: Board,
    pub(super) dictionary: &'a Dictionary,
    pub(super) values: &'a LetterValues,
    pub(super) placed: Vec<PlacedWord>,
    pub(super) augmented: FxHashSet<String>,
}

impl<'a> PlacementEngine<'a> {
    /// Create an engine over `board` with shared, read-only lookups
    #[must_use]
    pub fn new(board: Board, dictionary: &'a Dictionary, values: &'a LetterValues) -> Self {
        Self {
            board,
            dictionary,
            values,
            placed: Vec::new(),
            augmented: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Words committed so far, in placement order
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Dictionary runs seen by legality checks so far
    #[must_use]
    pub fn augmented_words(&self) -> &FxHashSet<String> {
        &self.augmented
    }

    /// Hand back the board and the committed records
    #[must_use]
    pub fn into_parts(self) -> (Board, Vec<PlacedWord>) {
        (self.board, self.placed)
    }

    /// Place every word in order and return the total score
    ///
    /// The total is the sum of each committed word's score plus the bonus for
    /// incidental dictionary words. Returns `Outcome::Unsolvable` as soon as
    /// a word is missing from the dictionary or has no legal placement; the
    /// board is then left part-way and should be discarded.
    pub fn place_words<S: AsRef<str>>(&mut self, words: &[S]) -> Outcome {
        if words.is_empty() {
            return Outcome::Unsolvable;
        }

        let mut total: u32 = 0;
        for word in words {
            let word = word.as_ref();
            if !self.dictionary.contains(word) {
                return Outcome::Unsolvable;
            }
            let Some(score) = self.place_word(word) else {
                return Outcome::Unsolvable;
            };
            total = total.saturating_add(score);
        }

        let bonus = bonus_score(&self.augmented, &self.placed, self.values);
        Outcome::Placed(total.saturating_add(bonus))
    }

    /// Commit the best placement of a single word, returning its score
    ///
    /// Returns `None` if the word has no legal placement.
    pub fn place_word(&mut self, word: &str) -> Option<u32> {
        let letters = word.as_bytes();
        if letters.is_empty() {
            return None;
        }

        if self.board.is_empty() {
            let candidate = self.best_start_placement(letters)?;
            let start = self.board.layout().start();
            let score = candidate
                .score
                .saturating_mul(self.board.layout().word_multiplier(start));
            return Some(self.commit(word, candidate.span, score, Anchor::Start));
        }

        if let Some(candidate) = self.best_inline_placement(word) {
            return Some(self.commit(word, candidate.span, candidate.score, Anchor::Intersection));
        }

        let candidate = self.cross_placement(letters)?;
        Some(self.commit(word, candidate.span, candidate.score, Anchor::Cross))
    }

    fn commit(&mut self, word: &str, span: Span, score: u32, anchor: Anchor) -> u32 {
        self.board.lay(&span, word.as_bytes());
        self.placed.push(PlacedWord::new(word, &span, score, anchor));
        score
    }

    /// Run the legality check, recording every valid run it saw
    pub(super) fn is_legal(&mut self, span: &Span, letters: &[u8]) -> bool {
        let verdict = legality::check(&self.board, span, letters, self.dictionary);
        self.augmented.extend(verdict.valid_runs);
        verdict.legal
    }

    pub(super) fn score(&self, span: &Span, letters: &[u8]) -> u32 {
        span_score(self.board.layout(), span, letters, self.values)
    }

    /// Best window through the start square, before the start doubling
    ///
    /// Horizontal windows are scanned first, left to right, then vertical
    /// ones top to bottom; a later window must score strictly higher to win.
    fn best_start_placement(&mut self, letters: &[u8]) -> Option<Candidate> {
        let start = self.board.layout().start();
        let len = letters.len();
        let mut best = None;

        for orientation in Orientation::BOTH {
            for offset in (0..len).rev() {
                let Some(first) = orientation.back(start, offset) else {
                    continue;
                };
                let span = Span::new(first, orientation, len);
                if !self.board.layout().fits(&span) {
                    break;
                }

                let score = self.score(&span, letters);
                if self.is_legal(&span, letters) {
                    keep_best(&mut best, Candidate { span, score });
                }
            }
        }

        best
    }

    /// Span through `coord` with the word's `index`-th letter on it
    fn span_through(
        &self,
        coord: Coord,
        index: usize,
        orientation: Orientation,
        len: usize,
    ) -> Option<Span> {
        let first = orientation.back(coord, index)?;
        let span = Span::new(first, orientation, len);
        self.board.layout().fits(&span).then_some(span)
    }

    /// No letter directly before or after the span
    fn has_open_ends(&self, span: &Span) -> bool {
        span.before().is_none_or(|c| !self.board.has_letter(c))
            && !self.board.has_letter(span.after())
    }

    /// Every covered letter matches and at least one new tile is laid
    fn lays_new_tiles(&self, span: &Span, letters: &[u8]) -> bool {
        let mut fresh = false;
        for (coord, &letter) in span.cells().zip(letters) {
            match self.board.letter(coord) {
                Some(existing) if existing != letter => return false,
                Some(_) => {}
                None => fresh = true,
            }
        }
        fresh
    }

    /// Best placement through a shared letter, per orientation
    ///
    /// Letter cells are scanned row-major; the word's first occurrence of the
    /// shared letter sits on the cell. Only legal candidates scoring above
    /// zero are kept. Horizontal wins a tie between orientations.
    fn best_inline_placement(&mut self, word: &str) -> Option<Candidate> {
        if self.placed.iter().any(|p| p.word == word) {
            return None;
        }

        let letters = word.as_bytes();
        let mut horizontal = None;
        let mut vertical = None;

        let anchors: Vec<(Coord, u8)> = self.board.letters().collect();
        for (coord, shared) in anchors {
            let Some(index) = letters.iter().position(|&l| l == shared) else {
                continue;
            };

            for orientation in Orientation::BOTH {
                let Some(span) = self.span_through(coord, index, orientation, letters.len()) else {
                    continue;
                };
                if !self.has_open_ends(&span) || !self.lays_new_tiles(&span, letters) {
                    continue;
                }

                let score = self.score(&span, letters);
                if score == 0 || !self.is_legal(&span, letters) {
                    continue;
                }

                let best = match orientation {
                    Orientation::Horizontal => &mut horizontal,
                    Orientation::Vertical => &mut vertical,
                };
                keep_best(best, Candidate { span, score });
            }
        }

        match (horizontal, vertical) {
            (Some(h), Some(v)) => Some(if v.score > h.score { v } else { h }),
            (h, v) => h.or(v),
        }
    }
}
