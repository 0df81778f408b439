//! Immutable board template
//!
//! A `Layout` is built once from validated puzzle text and never changes.
//! It keeps the static square symbols plus the two multiplier grids derived
//! from them, and is shared (behind an `Arc`) by every board built from it.

use super::{Coord, Span, Square};

/// Static squares and multiplier grids of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    columns: usize,
    squares: Vec<Square>,
    letter_multipliers: Vec<u32>,
    word_multipliers: Vec<u32>,
    start: Coord,
}

impl Layout {
    /// Build a layout from row-major squares
    ///
    /// The caller guarantees `squares.len() == rows * columns` and that
    /// `start` is the single start square.
    pub(crate) fn new(rows: usize, columns: usize, squares: Vec<Square>, start: Coord) -> Self {
        debug_assert_eq!(squares.len(), rows * columns);
        debug_assert_eq!(squares[start.row * columns + start.column], Square::Start);

        let letter_multipliers = squares.iter().map(|s| s.letter_multiplier()).collect();
        let word_multipliers = squares.iter().map(|s| s.word_multiplier()).collect();

        Self {
            rows,
            columns,
            squares,
            letter_multipliers,
            word_multipliers,
            start,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The designated start square
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    /// Whether every cell of `span` lies on the board
    #[must_use]
    pub fn fits(&self, span: &Span) -> bool {
        span.len > 0 && self.contains(span.end())
    }

    /// Longest word the board can hold along either axis
    #[must_use]
    pub fn longest_line(&self) -> usize {
        self.rows.max(self.columns)
    }

    #[inline]
    const fn index(&self, coord: Coord) -> usize {
        coord.row * self.columns + coord.column
    }

    /// Static symbol at `coord`
    ///
    /// # Panics
    /// Panics if `coord` is off the board
    #[inline]
    #[must_use]
    pub fn square(&self, coord: Coord) -> Square {
        self.squares[self.index(coord)]
    }

    #[inline]
    #[must_use]
    pub fn letter_multiplier(&self, coord: Coord) -> u32 {
        self.letter_multipliers[self.index(coord)]
    }

    #[inline]
    #[must_use]
    pub fn word_multiplier(&self, coord: Coord) -> u32 {
        self.word_multipliers[self.index(coord)]
    }

    pub(crate) fn squares(&self) -> &[Square] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;
    use crate::input::parse_board;

    #[test]
    fn multiplier_grids_derived_from_symbols() {
        let layout = parse_board("2D.\n.*T\n9..").unwrap();

        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.start(), Coord::new(1, 1));

        assert_eq!(layout.letter_multiplier(Coord::new(0, 0)), 2);
        assert_eq!(layout.word_multiplier(Coord::new(0, 0)), 1);
        assert_eq!(layout.letter_multiplier(Coord::new(0, 1)), 1);
        assert_eq!(layout.word_multiplier(Coord::new(0, 1)), 2);
        assert_eq!(layout.word_multiplier(Coord::new(1, 1)), 2);
        assert_eq!(layout.word_multiplier(Coord::new(1, 2)), 3);
        assert_eq!(layout.letter_multiplier(Coord::new(2, 0)), 9);
        assert_eq!(layout.word_multiplier(Coord::new(2, 2)), 1);
    }

    #[test]
    fn identical_text_gives_identical_layouts() {
        let text = "..3..\n.D.T.\n..*..\n";
        assert_eq!(parse_board(text).unwrap(), parse_board(text).unwrap());
    }

    #[test]
    fn fits_checks_both_ends() {
        let layout = parse_board("....\n.*..\n....").unwrap();

        let inside = Span::new(Coord::new(1, 1), Orientation::Horizontal, 3);
        let overhang = Span::new(Coord::new(1, 2), Orientation::Horizontal, 3);
        let tall = Span::new(Coord::new(0, 0), Orientation::Vertical, 4);

        assert!(layout.fits(&inside));
        assert!(!layout.fits(&overhang));
        assert!(!layout.fits(&tall));
        assert_eq!(layout.longest_line(), 4);
    }
}
