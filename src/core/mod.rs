//! Core board model
//!
//! Geometry, static squares, the immutable layout with its multiplier grids,
//! the mutable board, and committed placement records. No external
//! dependencies and no I/O.

mod board;
mod geometry;
mod layout;
mod record;
mod square;

pub use board::Board;
pub use geometry::{Coord, Orientation, Span};
pub use layout::Layout;
pub use record::{Anchor, PlacedWord};
pub use square::{Cell, Square};
