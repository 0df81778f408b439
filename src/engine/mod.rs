//! Placement engine
//!
//! Scoring, legality, and the greedy per-word placement of an ordered word
//! list onto a board.

pub mod bonus;
mod cross;
pub mod legality;
mod outcome;
mod placement;
pub mod scoring;

pub use outcome::Outcome;
pub use placement::PlacementEngine;
