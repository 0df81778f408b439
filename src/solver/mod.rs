//! Optimal word order search
//!
//! This module tries every order of a word set and keeps the best one.

mod config;
mod optimal;
pub mod permutations;
pub mod search;

pub use config::{DEFAULT_MAX_WORDS, SolveConfig};
pub use optimal::{OptimalSolver, SolverError, distinct_words};
pub use permutations::Permutations;
pub use search::{BestOrder, OrderSearch, ParallelSearch, SearchJob, SearchType, SequentialSearch};
