//! Mutable selection state with incrementally maintained coverage.
//!
//! A [`Solution`] records which subsets are selected, how many selected
//! subsets cover each element, and the total selected weight. The three
//! are only ever changed together through [`Solution::add_subset`] and
//! [`Solution::remove_subset`], so they cannot drift apart.

use crate::error::{Result, SppError};
use crate::instance::Instance;
use crate::tabu::SubsetSwap;

/// Selection of subsets for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    selected: Vec<bool>,
    // coverage[e] for e in 1..=N; slot 0 is unused.
    coverage: Vec<u32>,
    weight: u64,
}

impl Solution {
    /// Creates a solution with nothing selected.
    pub fn empty(instance: &Instance) -> Self {
        Self {
            selected: vec![false; instance.subset_count()],
            coverage: vec![0; instance.element_count() + 1],
            weight: 0,
        }
    }

    /// Selects subset `s`.
    ///
    /// Selecting an already selected subset is a defect and yields
    /// [`SppError::PreconditionViolation`].
    pub fn add_subset(&mut self, instance: &Instance, s: usize) -> Result<()> {
        if self.selected[s] {
            return Err(SppError::PreconditionViolation(format!(
                "add_subset({s}): subset is already selected"
            )));
        }
        self.selected[s] = true;
        self.weight += instance.weight(s);
        for &e in instance.elements(s) {
            self.coverage[e] += 1;
        }
        Ok(())
    }

    /// Deselects subset `s`; exact inverse of [`Solution::add_subset`].
    pub fn remove_subset(&mut self, instance: &Instance, s: usize) -> Result<()> {
        if !self.selected[s] {
            return Err(SppError::PreconditionViolation(format!(
                "remove_subset({s}): subset is not selected"
            )));
        }
        self.selected[s] = false;
        self.weight -= instance.weight(s);
        for &e in instance.elements(s) {
            self.coverage[e] -= 1;
        }
        Ok(())
    }

    /// Replaces the selected member of `swap` with the unselected one.
    ///
    /// Exactly one of the pair must be selected; anything else is a
    /// [`SppError::PreconditionViolation`] and leaves `self` untouched.
    pub fn apply_swap(&mut self, instance: &Instance, swap: SubsetSwap) -> Result<()> {
        let (a, b) = swap.indices();
        let (remove, add) = match (self.selected[a], self.selected[b]) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            (sa, sb) => {
                return Err(SppError::PreconditionViolation(format!(
                    "apply_swap({a}, {b}): expected exactly one selected, found {sa}/{sb}"
                )))
            }
        };
        self.remove_subset(instance, remove)?;
        self.add_subset(instance, add)
    }

    /// Penalized objective: `weight * (1 + infeasibility_count)`.
    ///
    /// Lower is better. Only a feasible solution scores its raw weight.
    pub fn evaluate(&self) -> u64 {
        self.weight
            .saturating_mul(1 + self.infeasibility_count() as u64)
    }

    /// Number of elements not covered exactly once.
    pub fn infeasibility_count(&self) -> usize {
        self.coverage[1..].iter().filter(|&&c| c != 1).count()
    }

    /// Whether every element is covered exactly once.
    pub fn is_feasible(&self) -> bool {
        self.coverage[1..].iter().all(|&c| c == 1)
    }

    /// Total weight of the selected subsets.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// How many selected subsets cover element `e`.
    pub fn coverage(&self, e: usize) -> u32 {
        self.coverage[e]
    }

    pub fn is_selected(&self, s: usize) -> bool {
        self.selected[s]
    }

    /// Number of subsets this solution ranges over.
    pub fn subset_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected subsets in index order.
    pub fn selected_subsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(s, &on)| on.then_some(s))
    }

    /// Unselected subsets in index order.
    pub fn unselected_subsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(s, &on)| (!on).then_some(s))
    }

    /// Elements covered at least once, ascending.
    pub fn covered_elements(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.coverage.len()).filter(|&e| self.coverage[e] >= 1)
    }

    /// Elements covered by no selected subset, ascending.
    pub fn uncovered_elements(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.coverage.len()).filter(|&e| self.coverage[e] == 0)
    }
}
