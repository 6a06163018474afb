//! Swap moves between a selected and an unselected subset.

use std::hash::{Hash, Hasher};

/// An unordered pair of subset indices: "deselect one, select the other".
///
/// `{a, b}` and `{b, a}` are the same move, both for equality and for
/// hashing, so a move and its reversal share one tabu entry.
///
/// # Examples
///
/// ```
/// use spp_tabu::tabu::SubsetSwap;
///
/// assert_eq!(SubsetSwap::new(3, 7), SubsetSwap::new(7, 3));
/// assert_ne!(SubsetSwap::new(3, 7), SubsetSwap::new(3, 8));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubsetSwap {
    first: usize,
    second: usize,
}

impl SubsetSwap {
    /// Creates a swap; neighborhood generation passes the selected index first.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The two indices in construction order.
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    fn normalized(&self) -> (usize, usize) {
        (self.first.min(self.second), self.first.max(self.second))
    }
}

impl PartialEq for SubsetSwap {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for SubsetSwap {}

impl Hash for SubsetSwap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_swap_equality_ignores_order() {
        assert_eq!(SubsetSwap::new(1, 2), SubsetSwap::new(2, 1));
        assert_eq!(SubsetSwap::new(4, 4), SubsetSwap::new(4, 4));
        assert_ne!(SubsetSwap::new(1, 2), SubsetSwap::new(1, 3));
    }

    #[test]
    fn test_swap_hash_ignores_order() {
        let mut set = HashSet::new();
        set.insert(SubsetSwap::new(5, 9));
        assert!(set.contains(&SubsetSwap::new(9, 5)));
        assert!(!set.insert(SubsetSwap::new(9, 5)));
    }

    #[test]
    fn test_indices_keep_construction_order() {
        assert_eq!(SubsetSwap::new(8, 2).indices(), (8, 2));
    }
}
