//! Search statistics and result reporting.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::result::{Tour, TspResult, TspStatus};

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BnbStats {
    /// Child states built, including those pruned on creation.
    pub states_created: u64,
    /// States discarded because their bound could not beat the incumbent,
    /// plus any dropped by the frontier ceiling.
    pub states_pruned: u64,
    /// States popped from the frontier and expanded.
    pub nodes_expanded: u64,
    /// Largest frontier size observed.
    pub max_frontier_size: usize,
    /// Incumbent improvements found by the search (greedy seed excluded).
    pub solutions_found: u64,
    /// States dropped by the frontier ceiling.
    pub frontier_trimmed: u64,
    /// Bound of the root state.
    pub root_lower_bound: f64,
    /// Cost of the greedy seed, `+inf` if none.
    #[cfg_attr(feature = "serde", serde(with = "crate::result::cost_serde"))]
    pub greedy_cost: f64,
    /// Incumbent cost after every improvement, seed first.
    pub cost_history: Vec<f64>,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl Default for BnbStats {
    fn default() -> Self {
        Self {
            states_created: 0,
            states_pruned: 0,
            nodes_expanded: 0,
            max_frontier_size: 0,
            solutions_found: 0,
            frontier_trimmed: 0,
            root_lower_bound: 0.0,
            greedy_cost: f64::INFINITY,
            cost_history: Vec::new(),
            time_total: Duration::ZERO,
        }
    }
}

impl BnbStats {
    #[inline]
    pub fn on_state_created(&mut self) {
        self.states_created = self.states_created.saturating_add(1);
    }

    #[inline]
    pub fn on_pruned(&mut self, count: u64) {
        self.states_pruned = self.states_pruned.saturating_add(count);
    }

    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    #[inline]
    pub fn on_frontier_trimmed(&mut self, count: u64) {
        self.frontier_trimmed = self.frontier_trimmed.saturating_add(count);
        self.on_pruned(count);
    }

    /// Packages these counters and the final incumbent into a result record.
    pub(crate) fn to_result(&self, cost: f64, tour: Tour, status: TspStatus) -> TspResult {
        TspResult {
            cost,
            time: self.time_total,
            solutions_found: self.solutions_found,
            tour,
            max_frontier_size: Some(self.max_frontier_size),
            states_created: Some(self.states_created),
            states_pruned: Some(self.states_pruned),
            status,
        }
    }
}

impl std::fmt::Display for BnbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  States created:     {}", self.states_created)?;
        writeln!(f, "  States pruned:      {}", self.states_pruned)?;
        writeln!(f, "  Nodes expanded:     {}", self.nodes_expanded)?;
        writeln!(f, "  Max frontier size:  {}", self.max_frontier_size)?;
        writeln!(f, "  Frontier trimmed:   {}", self.frontier_trimmed)?;
        writeln!(f, "  Solutions found:    {}", self.solutions_found)?;
        writeln!(f, "  Root lower bound:   {}", self.root_lower_bound)?;
        writeln!(f, "  Greedy cost:        {}", self.greedy_cost)?;
        writeln!(f, "  Total time:         {:.2?}", self.time_total)?;
        Ok(())
    }
}
