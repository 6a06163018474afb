//! Tabu Search solver for the Set Partitioning Problem (SPP).
//!
//! Given a universe of elements `1..=N` and `M` weighted subsets, pick
//! subsets so that every element is covered exactly once at minimum total
//! weight. The solver:
//!
//! - **Constructs** an initial solution greedily, then repairs it with a
//!   seeded randomized heuristic ([`construction`]).
//! - **Searches** the swap neighborhood (one selected subset out, one
//!   unselected subset in) with a FIFO tabu list, accepting the best
//!   non-tabu move every iteration and remembering the best solution seen
//!   ([`tabu`]).
//! - **Scores** solutions as `weight * (1 + infeasible elements)`, so any
//!   infeasibility is penalized in proportion to the solution's weight
//!   ([`solution::Solution::evaluate`]).
//!
//! Instances are read with [`instance::InstanceLoader`] and results are
//! rendered by [`report::RunReport`].
//!
//! # Example
//!
//! ```
//! use spp_tabu::instance::InstanceLoader;
//! use spp_tabu::tabu::{TabuConfig, TabuRunner};
//!
//! let instance = InstanceLoader::new()
//!     .from_str("3 4\n1 1 1\n1 1 2\n1 1 3\n1 3 1 2 3\n")
//!     .unwrap();
//! let config = TabuConfig::default().with_tabu_capacity(0).with_iteration_limit(5);
//! let result = TabuRunner::run(&instance, &config).unwrap();
//! assert!(result.best.is_feasible());
//! assert_eq!(result.best_cost, 3);
//! ```

pub mod construction;
mod error;
pub mod instance;
pub mod report;
pub mod solution;
pub mod tabu;

pub use error::{Result, SppError};
