//! Cost matrices and reduced-cost arithmetic.
//!
//! A [`CostMatrix`] is the dense n×n table the search works on. Entry
//! `(i, j)` is the cost of travelling directly from city `i` to city `j`,
//! or `f64::INFINITY` when the edge does not exist. The diagonal is always
//! infinite.
//!
//! # Key Components
//!
//! - [`City`]: the cost function supplied by the caller
//! - [`CostMatrix`]: construction, masking and tour costing
//! - [`CostMatrix::reduce`]: row-then-column minimum subtraction that
//!   yields a lower bound contribution
//!
//! # References
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

mod city;
mod cost;
mod reduce;

pub use city::{City, PlanarCity};
pub use cost::CostMatrix;
