//! Result record shared by every solver entry point.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::matrix::CostMatrix;

/// A Hamiltonian cycle, stored as the visiting order of its cities.
///
/// The first city is the origin. The closing edge from the last city back
/// to the origin is implicit. An empty tour marks an infeasible result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The empty (infeasible) tour.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total cost of the cycle, including the closing edge.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        matrix.cycle_cost(&self.cities)
    }

    /// Whether this tour visits each of the `n` cities exactly once,
    /// starting at `origin`, over finite edges of `matrix` (closing edge
    /// included).
    pub fn is_valid(&self, matrix: &CostMatrix, origin: usize) -> bool {
        let n = matrix.size();
        if self.cities.len() != n || self.cities.first() != Some(&origin) {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        self.cost(matrix).is_finite()
    }
}

/// How a search ended.
///
/// Mirrors the distinction between a proven and a best-effort answer:
/// only an exhausted search can report `Optimal` or `Infeasible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TspStatus {
    /// The search space was exhausted; the tour is optimal.
    Optimal,
    /// A tour was found but optimality was not proven.
    Feasible,
    /// The search space was exhausted without finding any tour.
    Infeasible,
    /// No tour was found and the search did not finish.
    Unknown,
}

impl TspStatus {
    pub(crate) fn classify(exhausted: bool, cost: f64) -> Self {
        match (exhausted, cost.is_finite()) {
            (true, true) => TspStatus::Optimal,
            (true, false) => TspStatus::Infeasible,
            (false, true) => TspStatus::Feasible,
            (false, false) => TspStatus::Unknown,
        }
    }
}

/// Outcome of one solver invocation.
///
/// `cost` is `f64::INFINITY` and `tour` is empty when no feasible tour was
/// found. The frontier statistics are `None` for solvers that do not keep
/// a frontier (the greedy-only path).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspResult {
    /// Cost of the best tour.
    #[cfg_attr(feature = "serde", serde(with = "cost_serde"))]
    pub cost: f64,
    /// Wall time spent in the solver.
    pub time: Duration,
    /// Number of improvements found by the search itself (the greedy seed
    /// is not counted).
    pub solutions_found: u64,
    /// The best tour.
    pub tour: Tour,
    /// Largest frontier size observed.
    pub max_frontier_size: Option<usize>,
    /// Child states created.
    pub states_created: Option<u64>,
    /// States discarded by bounding.
    pub states_pruned: Option<u64>,
    /// How the search ended.
    pub status: TspStatus,
}

impl TspResult {
    /// Result for instances with at most one city.
    pub(crate) fn trivial(n: usize, time: Duration) -> Self {
        Self {
            cost: 0.0,
            time,
            solutions_found: 0,
            tour: Tour::new((0..n).collect()),
            max_frontier_size: Some(0),
            states_created: Some(0),
            states_pruned: Some(0),
            status: TspStatus::Optimal,
        }
    }

    /// Whether a feasible tour was found.
    pub fn is_solution_found(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Writes an infinite cost as `null` and reads `null` back as `+inf`.
#[cfg(feature = "serde")]
pub(crate) mod cost_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(cost: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        cost.is_finite().then_some(*cost).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
