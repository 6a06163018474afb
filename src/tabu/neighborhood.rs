//! Swap neighborhood and best-candidate selection.

use super::memory::TabuMemory;
use super::types::SubsetSwap;
use crate::error::{Result, SppError};
use crate::instance::Instance;
use crate::solution::Solution;

/// All non-tabu swaps of one selected and one unselected subset.
///
/// Ordered by selected index, then unselected index. The order decides
/// ties in [`select_best`], so it is part of the contract. Each swap is
/// built with the selected subset first.
pub fn generate_neighborhood(solution: &Solution, memory: &TabuMemory) -> Vec<SubsetSwap> {
    let unselected: Vec<usize> = solution.unselected_subsets().collect();
    let mut moves = Vec::new();
    for i in solution.selected_subsets() {
        for &j in &unselected {
            let swap = SubsetSwap::new(i, j);
            if !memory.contains(swap) {
                moves.push(swap);
            }
        }
    }
    moves
}

/// A scored candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub swap: SubsetSwap,
    /// Objective of the solution after applying `swap`.
    pub score: u64,
    /// How many candidates were scored before selection stopped.
    pub scanned: usize,
}

/// Scores every candidate on a trial copy and returns the first with the
/// strictly lowest objective.
///
/// `expired` is polled after each scored candidate; once it reports the
/// time budget exhausted, the best of the prefix scanned so far is
/// returned. An empty candidate list yields [`SppError::NoMoveAvailable`].
pub fn select_best<F>(
    instance: &Instance,
    solution: &Solution,
    candidates: &[SubsetSwap],
    mut expired: F,
) -> Result<ScoredMove>
where
    F: FnMut() -> bool,
{
    let mut best: Option<ScoredMove> = None;

    for (k, &swap) in candidates.iter().enumerate() {
        let mut trial = solution.clone();
        trial.apply_swap(instance, swap)?;
        let score = trial.evaluate();

        if best.is_none_or(|b| score < b.score) {
            best = Some(ScoredMove {
                swap,
                score,
                scanned: 0,
            });
        }

        if expired() {
            tracing::debug!(scanned = k + 1, total = candidates.len(), "candidate scan cut short");
            return best
                .map(|b| ScoredMove { scanned: k + 1, ..b })
                .ok_or(SppError::NoMoveAvailable);
        }
    }

    best.map(|b| ScoredMove {
        scanned: candidates.len(),
        ..b
    })
    .ok_or(SppError::NoMoveAvailable)
}
