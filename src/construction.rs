//! Initial solution construction.
//!
//! Two phases, always in this order:
//!
//! 1. **Greedy cover**: walk the elements in ascending order and, for each
//!    uncovered one, select its cheapest coverer. Adding a subset for one
//!    element may re-cover earlier ones, so the result can be over-covered.
//! 2. **Randomized repair**: visit the selected subsets in random order and
//!    drop every subset that touches an over-covered element (the whole
//!    subset goes, even if it also covers something nobody else does).
//!    Then visit the uncovered elements in random order and add the
//!    cheapest coverer that touches no covered element.
//!
//! The result is not guaranteed to be feasible.

use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;
use rand::Rng;

/// Runs both phases and returns the initial solution.
pub fn initial_solution<R: Rng>(instance: &Instance, rng: &mut R) -> Result<Solution> {
    let mut solution = greedy_cover(instance)?;
    tracing::debug!(
        weight = solution.weight(),
        infeasible = solution.infeasibility_count(),
        "greedy cover built"
    );
    repair(instance, &mut solution, rng)?;
    tracing::info!(
        weight = solution.weight(),
        objective = solution.evaluate(),
        feasible = solution.is_feasible(),
        "initial solution constructed"
    );
    Ok(solution)
}

/// Phase 1: cheapest coverer for each uncovered element, in element order.
pub fn greedy_cover(instance: &Instance) -> Result<Solution> {
    let mut solution = Solution::empty(instance);
    for e in 1..=instance.element_count() {
        if solution.coverage(e) != 0 {
            continue;
        }
        if let Some(s) = cheapest(instance, instance.coverers(e).iter().copied()) {
            solution.add_subset(instance, s)?;
        }
    }
    Ok(solution)
}

/// Phase 2: drop subsets touching over-covered elements, then fill gaps
/// with conflict-free subsets. All randomness comes from `rng`.
pub fn repair<R: Rng>(instance: &Instance, solution: &mut Solution, rng: &mut R) -> Result<()> {
    let mut pending: Vec<usize> = solution.selected_subsets().collect();
    while !pending.is_empty() {
        let s = pending.remove(rng.random_range(0..pending.len()));
        let overlaps = instance
            .elements(s)
            .iter()
            .any(|&e| solution.coverage(e) > 1);
        if overlaps {
            solution.remove_subset(instance, s)?;
        }
    }

    let mut missing: Vec<usize> = solution.uncovered_elements().collect();
    while !missing.is_empty() {
        let e = missing.remove(rng.random_range(0..missing.len()));
        let conflict_free = instance.coverers(e).iter().copied().filter(|&s| {
            instance
                .elements(s)
                .iter()
                .all(|&other| solution.coverage(other) == 0)
        });
        if let Some(s) = cheapest(instance, conflict_free) {
            solution.add_subset(instance, s)?;
            missing.retain(|m| !instance.covers(s, *m));
        }
    }
    Ok(())
}

// Minimum weight; the first candidate wins ties.
fn cheapest(instance: &Instance, candidates: impl Iterator<Item = usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for s in candidates {
        if best.is_none_or(|b| instance.weight(s) < instance.weight(b)) {
            best = Some(s);
        }
    }
    best
}
