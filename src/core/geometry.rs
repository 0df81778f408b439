//! Board geometry: coordinates, orientations and word spans

use std::fmt;

/// A (row, column) position on the board, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Direction a word reads in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first (the tie-break order)
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The perpendicular orientation
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Position of `coord` along this orientation's axis
    #[inline]
    #[must_use]
    pub const fn along(self, coord: Coord) -> usize {
        match self {
            Self::Horizontal => coord.column,
            Self::Vertical => coord.row,
        }
    }

    /// Move `coord` by `offset` cells along this orientation
    #[inline]
    #[must_use]
    pub const fn advance(self, coord: Coord, offset: usize) -> Coord {
        match self {
            Self::Horizontal => Coord::new(coord.row, coord.column + offset),
            Self::Vertical => Coord::new(coord.row + offset, coord.column),
        }
    }

    /// Move `coord` back by `offset` cells, or `None` past the top/left edge
    #[inline]
    #[must_use]
    pub fn back(self, coord: Coord, offset: usize) -> Option<Coord> {
        match self {
            Self::Horizontal => Some(Coord::new(coord.row, coord.column.checked_sub(offset)?)),
            Self::Vertical => Some(Coord::new(coord.row.checked_sub(offset)?, coord.column)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// A straight run of `len` cells starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Coord,
    pub orientation: Orientation,
    pub len: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: Coord, orientation: Orientation, len: usize) -> Self {
        Self {
            start,
            orientation,
            len,
        }
    }

    /// Last cell covered by the span
    ///
    /// # Panics
    /// Panics in debug mode on a zero-length span
    #[must_use]
    pub const fn end(&self) -> Coord {
        debug_assert!(self.len > 0, "span must cover at least one cell");
        self.orientation.advance(self.start, self.len - 1)
    }

    /// The `index`-th cell of the span
    #[inline]
    #[must_use]
    pub const fn cell(&self, index: usize) -> Coord {
        self.orientation.advance(self.start, index)
    }

    /// All cells of the span, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len).map(|i| self.cell(i))
    }

    /// The cell just before the span, if it is not off the top/left edge
    #[must_use]
    pub fn before(&self) -> Option<Coord> {
        self.orientation.back(self.start, 1)
    }

    /// The cell just after the span (may be off the board)
    #[must_use]
    pub const fn after(&self) -> Coord {
        self.orientation.advance(self.start, self.len)
    }

    /// Whether the span passes over `coord`
    #[must_use]
    pub fn covers(&self, coord: Coord) -> bool {
        let (fixed_span, fixed_coord) = match self.orientation {
            Orientation::Horizontal => (self.start.row, coord.row),
            Orientation::Vertical => (self.start.column, coord.column),
        };
        let first = self.orientation.along(self.start);
        let pos = self.orientation.along(coord);
        fixed_span == fixed_coord && pos >= first && pos < first + self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_end_and_cells() {
        let span = Span::new(Coord::new(2, 1), Orientation::Horizontal, 3);
        assert_eq!(span.end(), Coord::new(2, 3));
        let cells: Vec<Coord> = span.cells().collect();
        assert_eq!(
            cells,
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );

        let vertical = Span::new(Coord::new(0, 4), Orientation::Vertical, 2);
        assert_eq!(vertical.end(), Coord::new(1, 4));
    }

    #[test]
    fn span_neighbours() {
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 3);
        assert_eq!(span.before(), None);
        assert_eq!(span.after(), Coord::new(0, 3));

        let inner = Span::new(Coord::new(3, 2), Orientation::Vertical, 2);
        assert_eq!(inner.before(), Some(Coord::new(2, 2)));
        assert_eq!(inner.after(), Coord::new(5, 2));
    }

    #[test]
    fn span_covers() {
        let span = Span::new(Coord::new(1, 1), Orientation::Vertical, 3);
        assert!(span.covers(Coord::new(1, 1)));
        assert!(span.covers(Coord::new(3, 1)));
        assert!(!span.covers(Coord::new(4, 1)));
        assert!(!span.covers(Coord::new(2, 2)));
    }

    #[test]
    fn back_stops_at_edges() {
        let c = Coord::new(2, 3);
        assert_eq!(Orientation::Horizontal.back(c, 3), Some(Coord::new(2, 0)));
        assert_eq!(Orientation::Horizontal.back(c, 4), None);
        assert_eq!(Orientation::Vertical.back(c, 2), Some(Coord::new(0, 3)));
        assert_eq!(Orientation::Vertical.back(c, 3), None);
    }

    #[test]
    fn flip_is_perpendicular() {
        assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.flip(), Orientation::Horizontal);
    }
}
