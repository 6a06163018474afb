//! Immutable weighted-subset model of an SPP instance.

use crate::error::{Result, SppError};

/// A weighted column: the elements it covers and what selecting it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    weight: u64,
    elements: Vec<usize>,
}

impl Subset {
    /// Weight paid when this subset is selected.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Covered elements, sorted ascending and free of duplicates.
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }
}

/// A Set Partitioning instance over elements `1..=N` and subsets `0..M`.
///
/// Built once and never mutated. Construction validates every element
/// index, so the rest of the crate can index by element without checks.
///
/// # Examples
///
/// ```
/// use spp_tabu::instance::Instance;
///
/// let instance = Instance::new(3, vec![(2, vec![1, 2]), (1, vec![3])]).unwrap();
/// assert_eq!(instance.subset_count(), 2);
/// assert!(instance.covers(0, 2));
/// assert!(!instance.covers(1, 2));
/// assert_eq!(instance.coverers(3), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    element_count: usize,
    subsets: Vec<Subset>,
    // coverers[e] lists the subsets covering e; slot 0 is unused.
    coverers: Vec<Vec<usize>>,
}

impl Instance {
    /// Builds an instance from `(weight, covered elements)` records.
    ///
    /// Fails with [`SppError::MalformedInstance`] if any element lies
    /// outside `1..=element_count`, if `element_count` is too large to
    /// index, or if the weights of all subsets together overflow `u64`.
    /// The last check keeps every running weight total in range.
    pub fn new(element_count: usize, records: Vec<(u64, Vec<usize>)>) -> Result<Self> {
        let slots = element_count.checked_add(1).ok_or_else(|| {
            SppError::MalformedInstance(format!("element count {element_count} is too large"))
        })?;
        let mut coverers: Vec<Vec<usize>> = Vec::new();
        coverers.try_reserve_exact(slots).map_err(|_| {
            SppError::MalformedInstance(format!(
                "element count {element_count} cannot be allocated"
            ))
        })?;
        coverers.resize_with(slots, Vec::new);

        let mut total_weight: u64 = 0;
        let mut subsets = Vec::with_capacity(records.len());
        for (index, (weight, mut elements)) in records.into_iter().enumerate() {
            total_weight = total_weight.checked_add(weight).ok_or_else(|| {
                SppError::MalformedInstance(format!(
                    "total weight overflows at subset {index} (weight {weight})"
                ))
            })?;
            if let Some(&bad) = elements
                .iter()
                .find(|&&e| e == 0 || e > element_count)
            {
                return Err(SppError::MalformedInstance(format!(
                    "subset {index} covers element {bad}, expected 1..={element_count}"
                )));
            }
            elements.sort_unstable();
            elements.dedup();
            for &e in &elements {
                coverers[e].push(index);
            }
            subsets.push(Subset { weight, elements });
        }

        Ok(Self {
            element_count,
            subsets,
            coverers,
        })
    }

    /// Number of subsets (M).
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// Number of universe elements (N).
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Weight of subset `s`.
    pub fn weight(&self, s: usize) -> u64 {
        self.subsets[s].weight
    }

    /// Whether subset `s` covers element `e`.
    pub fn covers(&self, s: usize, e: usize) -> bool {
        self.subsets[s].elements.binary_search(&e).is_ok()
    }

    /// Elements covered by subset `s`, ascending.
    pub fn elements(&self, s: usize) -> &[usize] {
        &self.subsets[s].elements
    }

    /// Subsets covering element `e`, in index order.
    pub fn coverers(&self, e: usize) -> &[usize] {
        &self.coverers[e]
    }

    /// All subsets in index order.
    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_accessors() {
        let inst = Instance::new(4, vec![(5, vec![4, 1, 1]), (2, vec![2, 3])]).unwrap();
        assert_eq!(inst.element_count(), 4);
        assert_eq!(inst.subset_count(), 2);
        assert_eq!(inst.weight(0), 5);
        assert_eq!(inst.elements(0), &[1, 4]);
        assert!(inst.covers(1, 3));
        assert!(!inst.covers(1, 4));
        assert_eq!(inst.coverers(1), &[0]);
        assert_eq!(inst.coverers(2), &[1]);
    }

    #[test]
    fn test_instance_rejects_out_of_range_elements() {
        let err = Instance::new(3, vec![(1, vec![1, 4])]).unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));

        let err = Instance::new(3, vec![(1, vec![0])]).unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));
    }

    #[test]
    fn test_instance_rejects_unindexable_element_count() {
        let err = Instance::new(usize::MAX, vec![]).unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => assert!(msg.contains("too large"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_instance_rejects_overflowing_total_weight() {
        let err = Instance::new(2, vec![(u64::MAX, vec![1]), (1, vec![2])]).unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => assert!(msg.contains("subset 1"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }

        let inst = Instance::new(2, vec![(u64::MAX - 1, vec![1]), (1, vec![2])]).unwrap();
        assert_eq!(inst.weight(0) + inst.weight(1), u64::MAX);
    }

    #[test]
    fn test_element_without_coverer() {
        let inst = Instance::new(2, vec![(1, vec![1])]).unwrap();
        assert!(inst.coverers(2).is_empty());
    }
}
