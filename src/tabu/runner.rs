//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution (greedy cover + randomized repair)
//! 2. While the non-improving counter and the clock are within budget:
//!    a. Generate the non-tabu swap neighborhood of the current solution
//!    b. Score every candidate and pick the first strictly best one
//!    c. Apply it, even if it makes the current solution worse
//!    d. Update the global best on strict improvement
//!    e. Push the move onto the tabu list
//! 3. Report the best solution seen
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::neighborhood::{generate_neighborhood, select_best};
use crate::construction;
use crate::error::{Result, SppError};
use crate::instance::Instance;
use crate::solution::Solution;

/// Lifecycle of a [`TabuSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Initializing,
    Iterating,
    Finalizing,
    Done,
}

/// Why the search stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `iteration_limit` consecutive iterations without a new best.
    Stagnation,
    /// The wall-clock budget ran out.
    TimeLimit,
    /// [`TabuSearch::finish`] was called while budget remained.
    Stopped,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Solution produced by the construction heuristic.
    pub initial: Solution,
    /// Best solution found.
    pub best: Solution,
    /// Objective of the best solution.
    pub best_cost: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial).
    pub best_iteration: usize,
    /// Wall-clock time from start to finish.
    pub elapsed: Duration,
    /// Best objective after each iteration.
    pub cost_history: Vec<u64>,
    pub stop_reason: StopReason,
}

/// Step-wise Tabu Search over one instance.
///
/// [`TabuRunner::run`] drives it to completion; tests and callers that
/// want to observe individual iterations can call [`TabuSearch::step`].
pub struct TabuSearch<'a> {
    instance: &'a Instance,
    config: TabuConfig,
    phase: SearchPhase,
    started: Instant,
    elapsed: Duration,
    initial: Solution,
    current: Solution,
    best: Solution,
    best_cost: u64,
    best_iteration: usize,
    memory: TabuMemory,
    iterations: usize,
    non_improving: usize,
    cost_history: Vec<u64>,
    stop_reason: Option<StopReason>,
}

impl<'a> TabuSearch<'a> {
    /// Builds the initial solution and enters the iterating phase.
    pub fn start(instance: &'a Instance, config: &TabuConfig) -> Result<Self> {
        config.validate().map_err(SppError::InvalidConfig)?;
        let started = Instant::now();
        tracing::debug!(phase = ?SearchPhase::Initializing, "tabu search starting");

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let initial = construction::initial_solution(instance, &mut rng)?;
        let best_cost = initial.evaluate();

        Ok(Self {
            instance,
            config: config.clone(),
            phase: SearchPhase::Iterating,
            started,
            elapsed: started.elapsed(),
            current: initial.clone(),
            best: initial.clone(),
            initial,
            best_cost,
            best_iteration: 0,
            memory: TabuMemory::new(config.tabu_capacity),
            iterations: 0,
            non_improving: 0,
            cost_history: Vec::new(),
            stop_reason: None,
        })
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn current(&self) -> &Solution {
        &self.current
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn best_cost(&self) -> u64 {
        self.best_cost
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    fn within_budget(&self) -> bool {
        self.non_improving < self.config.iteration_limit && self.elapsed < self.config.time_limit
    }

    /// Runs one iteration.
    ///
    /// Returns `Ok(false)` without doing anything once the budgets are
    /// spent, moving the search to [`SearchPhase::Finalizing`].
    pub fn step(&mut self) -> Result<bool> {
        if self.phase != SearchPhase::Iterating {
            return Ok(false);
        }
        if !self.within_budget() {
            self.stop_reason = Some(if self.non_improving >= self.config.iteration_limit {
                StopReason::Stagnation
            } else {
                StopReason::TimeLimit
            });
            self.phase = SearchPhase::Finalizing;
            return Ok(false);
        }

        self.iterations += 1;
        let candidates = generate_neighborhood(&self.current, &self.memory);
        let started = self.started;
        let limit = self.config.time_limit;

        match select_best(self.instance, &self.current, &candidates, || {
            started.elapsed() > limit
        }) {
            Ok(chosen) => {
                self.current.apply_swap(self.instance, chosen.swap)?;
                let cost = self.current.evaluate();
                if cost < self.best_cost {
                    self.best = self.current.clone();
                    self.best_cost = cost;
                    self.best_iteration = self.iterations;
                    self.non_improving = 0;
                    tracing::debug!(
                        iteration = self.iterations,
                        cost,
                        feasible = self.best.is_feasible(),
                        "new best"
                    );
                } else {
                    self.non_improving += 1;
                }
                self.memory.record(chosen.swap);
                tracing::trace!(
                    iteration = self.iterations,
                    swap = ?chosen.swap.indices(),
                    cost,
                    scanned = chosen.scanned,
                    "move applied"
                );
            }
            Err(SppError::NoMoveAvailable) => {
                tracing::warn!(iteration = self.iterations, "neighborhood exhausted");
                self.non_improving += 1;
            }
            Err(e) => return Err(e),
        }

        self.cost_history.push(self.best_cost);
        self.elapsed = self.started.elapsed();
        Ok(true)
    }

    /// Ends the search and hands out the best solution.
    ///
    /// Callable at any point; a search ended before [`step`](Self::step)
    /// ran out of budget reports [`StopReason::Stopped`].
    pub fn finish(&mut self) -> TabuResult {
        self.phase = SearchPhase::Finalizing;
        self.elapsed = self.started.elapsed();

        let stop_reason = self.stop_reason.unwrap_or(StopReason::Stopped);

        if self.best.is_feasible() {
            tracing::info!(
                cost = self.best_cost,
                iterations = self.iterations,
                ?stop_reason,
                "feasible solution found"
            );
        } else {
            tracing::warn!(
                cost = self.best_cost,
                uncovered = self.best.uncovered_elements().count(),
                infeasible = self.best.infeasibility_count(),
                iterations = self.iterations,
                ?stop_reason,
                "no feasible solution found"
            );
        }

        self.phase = SearchPhase::Done;
        TabuResult {
            initial: self.initial.clone(),
            best: self.best.clone(),
            best_cost: self.best_cost,
            iterations: self.iterations,
            best_iteration: self.best_iteration,
            elapsed: self.elapsed,
            cost_history: self.cost_history.clone(),
            stop_reason,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `instance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spp_tabu::instance::Instance;
    /// use spp_tabu::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance = Instance::new(2, vec![(4, vec![1, 2]), (1, vec![1]), (1, vec![2])]).unwrap();
    /// let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();
    /// assert!(result.best.is_feasible());
    /// assert_eq!(result.best_cost, 2);
    /// ```
    pub fn run(instance: &Instance, config: &TabuConfig) -> Result<TabuResult> {
        let mut search = TabuSearch::start(instance, config)?;
        while search.step()? {}
        Ok(search.finish())
    }
}
