//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Reduce the full cost matrix; the reduction is the root bound
//! 2. Seed the incumbent with a nearest-neighbour tour (optional)
//! 3. Expand the root into one child per reachable city
//! 4. Until the frontier is empty or the time limit expires:
//!    a. Pop the lowest-bound state
//!    b. Discard it if its bound no longer beats the incumbent
//!    c. Otherwise build one child per candidate city: prune children
//!       whose bound does not beat the incumbent, install closed tours,
//!       push the rest
//! 5. Count open states that can no longer win as pruned
//!
//! An empty frontier proves the incumbent optimal, unless the frontier
//! ceiling dropped a state whose bound was below the final incumbent.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use std::time::Instant;

use super::config::BnbConfig;
use super::frontier::Frontier;
use super::incumbent::Incumbent;
use super::state::SearchState;
use super::stats::BnbStats;
use crate::greedy::greedy_tour;
use crate::matrix::CostMatrix;
use crate::result::{TspResult, TspStatus};

/// Every tour starts and ends here.
const ORIGIN: usize = 0;

/// Branch-and-bound runner.
pub struct BnbRunner;

impl BnbRunner {
    /// Searches for a minimum-cost tour within the configured time limit.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`BnbConfig::validate`]
    /// first to get a descriptive error).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_bnb::bnb::{BnbConfig, BnbRunner};
    /// use u_tsp_bnb::matrix::CostMatrix;
    /// use u_tsp_bnb::TspStatus;
    ///
    /// let m = CostMatrix::from_fn(4, |i, j| if (i + 1) % 4 == j { 1.0 } else { 10.0 }).unwrap();
    /// let result = BnbRunner::run(&m, &BnbConfig::default());
    /// assert_eq!(result.cost, 4.0);
    /// assert_eq!(result.tour.cities(), &[0, 1, 2, 3]);
    /// assert_eq!(result.status, TspStatus::Optimal);
    /// ```
    pub fn run(costs: &CostMatrix, config: &BnbConfig) -> TspResult {
        Self::run_with_stats(costs, config).0
    }

    /// Like [`run`](Self::run), also returning the full search statistics.
    pub fn run_with_stats(costs: &CostMatrix, config: &BnbConfig) -> (TspResult, BnbStats) {
        config.validate().expect("invalid BnbConfig");

        let start = Instant::now();
        let n = costs.size();
        if n <= 1 {
            log::debug!("bnb.run: trivial instance n={n}");
            let stats = BnbStats {
                time_total: start.elapsed(),
                ..BnbStats::default()
            };
            return (TspResult::trivial(n, stats.time_total), stats);
        }

        SearchSession::new(costs, config, start).run()
    }
}

/// State of a single search run.
struct SearchSession<'a> {
    costs: &'a CostMatrix,
    config: &'a BnbConfig,
    frontier: Frontier,
    incumbent: Incumbent,
    stats: BnbStats,
    /// Lowest bound among states dropped by the frontier ceiling.
    trimmed_floor: f64,
    start: Instant,
}

impl<'a> SearchSession<'a> {
    fn new(costs: &'a CostMatrix, config: &'a BnbConfig, start: Instant) -> Self {
        let incumbent = match config.seed_with_greedy.then(|| greedy_tour(costs, ORIGIN)) {
            Some(Some(tour)) => {
                let cost = tour.cost(costs);
                Incumbent::seeded(tour, cost)
            }
            _ => Incumbent::none(),
        };
        let stats = BnbStats {
            greedy_cost: incumbent.cost(),
            ..BnbStats::default()
        };

        Self {
            costs,
            config,
            frontier: Frontier::new(),
            incumbent,
            stats,
            trimmed_floor: f64::INFINITY,
            start,
        }
    }

    fn run(mut self) -> (TspResult, BnbStats) {
        let root = SearchState::root(self.costs, ORIGIN);
        self.stats.root_lower_bound = root.bound();
        log::info!(
            "bnb.run: start n={} root_bound={} greedy_cost={} time_limit={:?}",
            self.costs.size(),
            root.bound(),
            self.incumbent.cost(),
            self.config.time_limit
        );
        self.expand(&root);

        let mut exhausted = true;
        while !self.frontier.is_empty() {
            if self.start.elapsed() >= self.config.time_limit {
                exhausted = false;
                log::debug!(
                    "bnb.run: time limit reached frontier={}",
                    self.frontier.len()
                );
                break;
            }
            let Some(state) = self.frontier.pop() else {
                break;
            };
            // bounds go stale as the incumbent improves
            if !self.incumbent.admits(state.bound()) {
                self.stats.on_pruned(1);
                continue;
            }
            self.stats.on_node_expanded();
            self.expand(&state);
        }

        let hopeless = self.frontier.count_at_or_above(self.incumbent.cost());
        self.stats.on_pruned(hopeless as u64);
        self.finish(exhausted)
    }

    /// Builds and classifies every child of `state`.
    fn expand(&mut self, state: &SearchState) {
        log::trace!(
            "bnb.expand: city={} depth={} bound={}",
            state.city(),
            state.path().len(),
            state.bound()
        );

        for next in state.candidates() {
            let child = state.child(next);
            self.stats.on_state_created();

            if !self.incumbent.admits(child.bound()) {
                self.stats.on_pruned(1);
                continue;
            }
            if child.is_complete() {
                self.install(child);
                continue;
            }

            self.frontier.push(child);
            self.stats.on_frontier_size(self.frontier.len());
        }

        self.enforce_ceiling();
    }

    fn install(&mut self, closed: SearchState) {
        let tour = closed.into_tour();
        let cost = tour.cost(self.costs);
        if self.incumbent.try_improve(tour, cost) {
            self.stats.on_solution_found();
            log::debug!(
                "bnb.solution: cost={cost} expanded={} frontier={} elapsed={:?}",
                self.stats.nodes_expanded,
                self.frontier.len(),
                self.start.elapsed()
            );
        } else {
            self.stats.on_pruned(1);
        }
    }

    /// Drops the worst states once the frontier exceeds its ceiling by more
    /// than an eighth.
    fn enforce_ceiling(&mut self) {
        let Some(max) = self.config.max_frontier else {
            return;
        };
        let slack = (max / 8).max(1);
        if self.frontier.len() <= max + slack {
            return;
        }
        let dropped = self.frontier.truncate(max);
        self.trimmed_floor = dropped.iter().copied().fold(self.trimmed_floor, f64::min);
        self.stats.on_frontier_trimmed(dropped.len() as u64);
        log::debug!(
            "bnb.frontier: trimmed dropped={} kept={max} floor={}",
            dropped.len(),
            self.trimmed_floor
        );
    }

    fn finish(mut self, exhausted: bool) -> (TspResult, BnbStats) {
        self.stats.time_total = self.start.elapsed();
        // dropped states that could not beat the final incumbent lose nothing
        let proven = exhausted && self.incumbent.cost() <= self.trimmed_floor;
        let (cost, tour, history) = self.incumbent.into_parts();
        self.stats.cost_history = history;
        let status = TspStatus::classify(proven, cost);

        log::info!(
            "bnb.run: done cost={cost} status={status:?} created={} pruned={} expanded={} max_frontier={} elapsed={:?}",
            self.stats.states_created,
            self.stats.states_pruned,
            self.stats.nodes_expanded,
            self.stats.max_frontier_size,
            self.stats.time_total
        );

        let result = self.stats.to_result(cost, tour, status);
        (result, self.stats)
    }
}
