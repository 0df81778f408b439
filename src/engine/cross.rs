//! Cross-word fallback
//!
//! Used only when no in-line placement exists. A candidate word is laid
//! perpendicular to an already placed word so that one of its letters
//! extends that word at either end, and the extended word is in the
//! dictionary. Example: with `cat` placed, `so` can hang its `s` off the end
//! of `cat` because `cats` is a word.
//!
//! Candidates are tried in placement order of the existing words, then by
//! letter index in the new word, prefix before suffix. A candidate must start
//! at a positive row and column and fit on empty cells. The first one that
//! also passes the legality check wins.

use super::placement::{Candidate, PlacementEngine};
use crate::core::{Coord, PlacedWord, Span};

/// Which end of the placed word the new letter attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Prefix,
    Suffix,
}

impl Side {
    const BOTH: [Self; 2] = [Self::Prefix, Self::Suffix];

    fn extend(self, word: &str, letter: u8) -> Vec<u8> {
        let mut extended = Vec::with_capacity(word.len() + 1);
        match self {
            Self::Prefix => {
                extended.push(letter);
                extended.extend_from_slice(word.as_bytes());
            }
            Self::Suffix => {
                extended.extend_from_slice(word.as_bytes());
                extended.push(letter);
            }
        }
        extended
    }

    /// Cell just outside the placed word on this side
    fn joint(self, placed: &PlacedWord) -> Option<Coord> {
        let span = placed.span();
        match self {
            Self::Prefix => span.before(),
            Self::Suffix => Some(span.after()),
        }
    }
}

/// Perpendicular span putting the new word's `index`-th letter on the joint
fn cross_span(placed: &PlacedWord, side: Side, index: usize, len: usize) -> Option<Span> {
    let orientation = placed.orientation.flip();
    let joint = side.joint(placed)?;
    let start = orientation.back(joint, index)?;
    Some(Span::new(start, orientation, len))
}

/// Cross words never start on row 0 or column 0
fn starts_inside(span: &Span) -> bool {
    span.start.row > 0 && span.start.column > 0
}

impl PlacementEngine<'_> {
    /// First legal cross placement of `letters`, scored but not committed
    pub(super) fn cross_placement(&mut self, letters: &[u8]) -> Option<Candidate> {
        let placed: Vec<PlacedWord> = self.placed.clone();

        for existing in &placed {
            for (index, &letter) in letters.iter().enumerate() {
                for side in Side::BOTH {
                    if !self
                        .dictionary
                        .contains_letters(&side.extend(&existing.word, letter))
                    {
                        continue;
                    }

                    let Some(span) = cross_span(existing, side, index, letters.len()) else {
                        continue;
                    };
                    if !starts_inside(&span)
                        || !self.board.layout().fits(&span)
                        || span.cells().any(|c| self.board.has_letter(c))
                    {
                        continue;
                    }

                    if self.is_legal(&span, letters) {
                        let score = self.score(&span, letters);
                        return Some(Candidate { span, score });
                    }
                }
            }
        }

        None
    }
}
