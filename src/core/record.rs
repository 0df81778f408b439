//! Committed placement records

use super::{Coord, Orientation, Span};
use std::fmt;

/// How a committed word was anchored to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// First word, laid over the designated start square
    Start,
    /// Laid through an existing letter it shares
    Intersection,
    /// Laid perpendicular to a placed word, extending it by one letter
    Cross,
}

/// A word committed to the board during one run
///
/// Created once at commit time and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub orientation: Orientation,
    pub start: Coord,
    pub end: Coord,
    pub score: u32,
    pub anchor: Anchor,
}

impl PlacedWord {
    #[must_use]
    pub fn new(word: &str, span: &Span, score: u32, anchor: Anchor) -> Self {
        Self {
            word: word.to_string(),
            orientation: span.orientation,
            start: span.start,
            end: span.end(),
            score,
            anchor,
        }
    }

    /// The cells this word covers
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.orientation, self.word.len())
    }
}

impl fmt::Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} ({} pts)",
            self.word, self.orientation, self.start, self.end, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_span_endpoints() {
        let span = Span::new(Coord::new(3, 1), Orientation::Horizontal, 3);
        let record = PlacedWord::new("cat", &span, 10, Anchor::Start);

        assert_eq!(record.start, Coord::new(3, 1));
        assert_eq!(record.end, Coord::new(3, 3));
        assert_eq!(record.span(), span);
        assert_eq!(
            record.to_string(),
            "cat horizontal (3, 1) -> (3, 3) (10 pts)"
        );
    }
}
