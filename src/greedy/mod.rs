//! Nearest-neighbour construction.
//!
//! Builds a single tour by always moving to the cheapest unvisited city.
//! The tour is used to seed the branch-and-bound incumbent, and is also
//! exposed on its own through [`GreedyRunner`] as a fast baseline.
//!
//! A greedy walk can dead-end on sparse instances (no edge to any
//! unvisited city, or no edge back to the origin). That is reported as
//! `None`, not as an error.
//!
//! # References
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//! for the Traveling Salesman Problem", *SIAM J. Computing* 6(3), 563-581.

mod builder;
mod runner;

pub use builder::greedy_tour;
pub use runner::GreedyRunner;
