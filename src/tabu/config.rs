//! Tabu Search configuration.

use std::time::Duration;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 515151;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use spp_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_tabu_capacity(10)
///     .with_iteration_limit(50)
///     .with_time_limit(Duration::from_secs(5))
///     .with_seed(7);
/// assert_eq!(config.tabu_capacity, 10);
/// assert_eq!(config.iteration_limit, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// How many recent moves stay forbidden. 0 disables the memory.
    pub tabu_capacity: usize,
    /// Consecutive non-improving iterations before the search stops.
    pub iteration_limit: usize,
    /// Wall-clock budget for the whole search.
    pub time_limit: Duration,
    /// Seed for the randomized feasibility repair.
    pub seed: u64,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_capacity: 30,
            iteration_limit: 200,
            time_limit: Duration::from_secs(15 * 60),
            seed: DEFAULT_SEED,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the number of non-improving iterations tolerated.
    pub fn with_iteration_limit(mut self, n: usize) -> Self {
        self.iteration_limit = n;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the wall-clock budget in whole minutes.
    pub fn with_time_limit_minutes(self, minutes: u64) -> Self {
        self.with_time_limit(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.iteration_limit == 0 {
            return Err("iteration_limit must be at least 1".into());
        }
        Ok(())
    }
}
