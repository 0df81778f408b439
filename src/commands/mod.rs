//! Command implementations

pub mod place;
pub mod solve;

pub use place::{PlaceReport, place_words};
pub use solve::{SolveReport, solve_words};
