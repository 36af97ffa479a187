//! Branch-and-bound search for the asymmetric TSP.
//!
//! Explores partial tours best-first, ordered by a reduced-cost lower
//! bound. A state whose bound cannot beat the best tour found so far is
//! discarded. The search is anytime: it can be stopped by its time limit
//! and still return the best tour known at that point.
//!
//! # Key Components
//!
//! - [`BnbConfig`]: time limit, greedy seeding, frontier ceiling
//! - [`SearchState`]: partial path, reduced matrix and bound
//! - [`Frontier`]: lowest-bound-first queue over an arena of states
//! - [`BnbRunner`]: the search loop
//! - [`BnbStats`]: counters reported alongside the result
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989.
//! - Balas & Toth (1985), "Branch and Bound Methods", in *The Traveling
//!   Salesman Problem*, Wiley, 361-401.

mod config;
mod frontier;
mod incumbent;
mod runner;
mod state;
mod stats;

pub use config::BnbConfig;
pub use frontier::Frontier;
pub use runner::BnbRunner;
pub use state::SearchState;
pub use stats::BnbStats;
