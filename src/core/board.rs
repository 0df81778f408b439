//! Mutable playing board
//!
//! A `Board` owns its cells and shares the immutable [`Layout`] it was built
//! from. Cloning a board is how a scratch copy or a fresh per-permutation
//! board is made; the layout itself is never copied.

use super::{Cell, Coord, Layout, Span};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    layout: Arc<Layout>,
    cells: Vec<Cell>,
}

impl Board {
    /// A pristine board showing only the layout's squares
    #[must_use]
    pub fn new(layout: Arc<Layout>) -> Self {
        let cells = layout.squares().iter().copied().map(Cell::Square).collect();
        Self { layout, cells }
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Handle to the shared layout, for building sibling boards
    #[must_use]
    pub fn shared_layout(&self) -> Arc<Layout> {
        Arc::clone(&self.layout)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row * self.layout.columns() + coord.column
    }

    /// Cell at `coord`, or `None` off the board
    #[inline]
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.layout
            .contains(coord)
            .then(|| self.cells[self.index(coord)])
    }

    /// Letter at `coord`, if any (off-board cells hold none)
    #[inline]
    #[must_use]
    pub fn letter(&self, coord: Coord) -> Option<u8> {
        self.cell(coord).and_then(Cell::letter)
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, coord: Coord) -> bool {
        self.letter(coord).is_some()
    }

    /// Whether no letter has been placed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|c| c.is_letter())
    }

    /// Every letter cell in row-major order
    pub fn letters(&self) -> impl Iterator<Item = (Coord, u8)> + '_ {
        let columns = self.layout.columns();
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.letter()
                .map(|l| (Coord::new(i / columns, i % columns), l))
        })
    }

    /// Write `word` into `span`, overwriting whatever the cells show
    ///
    /// Callers check [`Layout::fits`] first.
    ///
    /// # Panics
    /// Panics in debug mode if the span runs off the board or its length
    /// differs from the word
    pub fn lay(&mut self, span: &Span, word: &[u8]) {
        debug_assert_eq!(span.len, word.len(), "span and word length differ");
        debug_assert!(self.layout.fits(span), "span {span:?} runs off the board");
        for (coord, &letter) in span.cells().zip(word) {
            let idx = self.index(coord);
            self.cells[idx] = Cell::Letter(letter);
        }
    }

    /// Copy of this board with `word` laid into `span`
    #[must_use]
    pub fn with_word(&self, span: &Span, word: &[u8]) -> Self {
        let mut scratch = self.clone();
        scratch.lay(span, word);
        scratch
    }

    /// One row of the board as text
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        let columns = self.layout.columns();
        self.cells[row * columns..(row + 1) * columns]
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    /// Render the board, one line per row, each line newline-terminated
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.columns() + 1) * self.rows());
        for row in 0..self.rows() {
            out.push_str(&self.row_text(row));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
