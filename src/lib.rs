//! Branch-and-bound solver for the asymmetric Traveling Salesperson Problem.
//!
//! Given a directed cost matrix (missing edges are `f64::INFINITY`), finds a
//! minimum-cost Hamiltonian cycle within a time budget and reports search
//! statistics alongside the tour:
//!
//! - **Cost matrices** ([`matrix`]): construction from a [`City`] list and
//!   an edge predicate, masking, and row/column reduction.
//! - **Greedy construction** ([`greedy`]): nearest-neighbour tour used to
//!   seed the search, also usable on its own.
//! - **Branch-and-bound** ([`bnb`]): best-first search over partial tours
//!   ordered by a reduced-cost lower bound, with incumbent pruning.
//! - **Results** ([`result`]): the [`TspResult`] record shared by all
//!   entry points.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp_bnb::bnb::{BnbConfig, BnbRunner};
//! use u_tsp_bnb::matrix::{CostMatrix, PlanarCity};
//!
//! let cities = vec![
//!     PlanarCity::new(0.0, 0.0, 0.0),
//!     PlanarCity::new(4.0, 0.0, 1.0),
//!     PlanarCity::new(4.0, 3.0, 0.0),
//!     PlanarCity::new(0.0, 3.0, 2.0),
//! ];
//! let matrix = CostMatrix::from_cities(&cities, |_, _| true).unwrap();
//! let config = BnbConfig::default().with_time_limit(Duration::from_secs(1));
//! let result = BnbRunner::run(&matrix, &config);
//! assert!(result.tour.is_valid(&matrix, 0));
//! ```
//!
//! # Architecture
//!
//! The search is single-threaded and synchronous. Each run owns its
//! frontier, matrices and incumbent; the input matrix is only read, so
//! independent runs may share it.
//!
//! [`City`]: matrix::City
//! [`TspResult`]: result::TspResult

pub mod bnb;
pub mod error;
pub mod greedy;
pub mod matrix;
pub mod result;

#[cfg(test)]
mod testing;

pub use error::{Result, TspError};
pub use result::{Tour, TspResult, TspStatus};
