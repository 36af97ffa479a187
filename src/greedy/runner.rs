//! Greedy-only solver entry point.

use std::time::Instant;

use super::builder::greedy_tour;
use crate::matrix::CostMatrix;
use crate::result::{Tour, TspResult, TspStatus};

/// Runs the nearest-neighbour heuristic as a stand-alone solver.
///
/// The result never claims optimality (except for instances with at most
/// one city) and carries no frontier statistics. `solutions_found` counts
/// complete tours built, so it is 1 on success and 0 on a dead end, not
/// the number of construction steps.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds one greedy tour from city 0.
    pub fn run(matrix: &CostMatrix) -> TspResult {
        let start = Instant::now();
        let n = matrix.size();

        if n <= 1 {
            return TspResult {
                max_frontier_size: None,
                states_created: None,
                states_pruned: None,
                ..TspResult::trivial(n, start.elapsed())
            };
        }

        let (tour, cost) = match greedy_tour(matrix, 0) {
            Some(tour) => {
                let cost = tour.cost(matrix);
                (tour, cost)
            }
            None => (Tour::empty(), f64::INFINITY),
        };
        log::info!("greedy.run: done n={n} cost={cost}");

        TspResult {
            cost,
            time: start.elapsed(),
            solutions_found: u64::from(cost.is_finite()),
            tour,
            max_frontier_size: None,
            states_created: None,
            states_pruned: None,
            status: TspStatus::classify(false, cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_greedy_runner_reports_tour() {
        let m = CostMatrix::from_rows(&[
            vec![INF, 1.0, 2.0],
            vec![5.0, INF, 1.0],
            vec![1.0, 5.0, INF],
        ])
        .unwrap();
        let result = GreedyRunner::run(&m);
        assert_eq!(result.cost, 3.0);
        assert_eq!(result.tour.cities(), &[0, 1, 2]);
        assert_eq!(result.solutions_found, 1);
        assert_eq!(result.status, TspStatus::Feasible);
        assert!(result.max_frontier_size.is_none());
        assert!(result.states_created.is_none());
        assert!(result.states_pruned.is_none());
    }

    #[test]
    fn test_greedy_runner_failure_is_infinite() {
        let m = CostMatrix::from_rows(&[
            vec![INF, 1.0, 5.0],
            vec![1.0, INF, INF],
            vec![1.0, 1.0, INF],
        ])
        .unwrap();
        let result = GreedyRunner::run(&m);
        assert!(result.cost.is_infinite());
        assert!(result.tour.is_empty());
        assert_eq!(result.solutions_found, 0);
        assert_eq!(result.status, TspStatus::Unknown);
    }

    #[test]
    fn test_greedy_runner_single_city() {
        let m = CostMatrix::from_rows(&[vec![INF]]).unwrap();
        let result = GreedyRunner::run(&m);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.tour.cities(), &[0]);
        assert!(result.states_created.is_none());
    }
}
