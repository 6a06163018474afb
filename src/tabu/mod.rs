//! Tabu Search (TS) for set partitioning.
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently applied moves, preventing cycling
//! and letting the search walk through worse solutions to leave local
//! optima. Moves swap one selected subset for one unselected subset.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
pub mod neighborhood;
mod runner;
mod types;

pub use config::{TabuConfig, DEFAULT_SEED};
pub use memory::TabuMemory;
pub use neighborhood::{generate_neighborhood, select_best, ScoredMove};
pub use runner::{SearchPhase, StopReason, TabuResult, TabuRunner, TabuSearch};
pub use types::SubsetSwap;
