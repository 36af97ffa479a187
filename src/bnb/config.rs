//! Branch-and-bound configuration.

use std::time::Duration;

use crate::error::{Result, TspError};

/// Configuration for [`BnbRunner`](super::BnbRunner).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp_bnb::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_time_limit(Duration::from_secs(5))
///     .with_max_frontier(100_000);
/// assert_eq!(config.time_limit, Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Wall-clock budget for the search. Checked once per expansion.
    pub time_limit: Duration,

    /// Whether to seed the incumbent with a nearest-neighbour tour.
    ///
    /// Without a seed the incumbent starts at `+inf`, so the first complete
    /// tour found by the search becomes the incumbent.
    pub seed_with_greedy: bool,

    /// Maximum number of states kept on the frontier. `None` = unbounded.
    ///
    /// When the frontier grows past this ceiling, the worst-bound entries
    /// are dropped and counted as pruned. A search that dropped entries can
    /// no longer prove optimality.
    pub max_frontier: Option<usize>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            seed_with_greedy: true,
            max_frontier: None,
        }
    }
}

impl BnbConfig {
    /// Sets the time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Enables or disables the greedy incumbent seed.
    pub fn with_greedy_seed(mut self, enabled: bool) -> Self {
        self.seed_with_greedy = enabled;
        self
    }

    /// Caps the frontier size.
    pub fn with_max_frontier(mut self, max: usize) -> Self {
        self.max_frontier = Some(max);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_frontier == Some(0) {
            return Err(TspError::invalid_config("max_frontier must be positive"));
        }
        Ok(())
    }
}
