//! Best solution so far.
//!
//! The incumbent is owned by one search session. Its cost only ever goes
//! down: [`Incumbent::try_improve`] accepts strictly better tours only.

use crate::result::Tour;

#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    cost: f64,
    tour: Tour,
    history: Vec<f64>,
}

impl Incumbent {
    /// No tour known; every finite tour improves on it.
    pub(crate) fn none() -> Self {
        Self {
            cost: f64::INFINITY,
            tour: Tour::empty(),
            history: Vec::new(),
        }
    }

    pub(crate) fn seeded(tour: Tour, cost: f64) -> Self {
        let mut incumbent = Self::none();
        incumbent.try_improve(tour, cost);
        incumbent
    }

    #[inline]
    pub(crate) fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether a state with this bound could still lead to a better tour.
    #[inline]
    pub(crate) fn admits(&self, bound: f64) -> bool {
        bound < self.cost
    }

    /// Installs `tour` if it is strictly cheaper. Returns whether it was.
    pub(crate) fn try_improve(&mut self, tour: Tour, cost: f64) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.tour = tour;
            self.history.push(cost);
            true
        } else {
            false
        }
    }

    pub(crate) fn into_parts(self) -> (f64, Tour, Vec<f64>) {
        (self.cost, self.tour, self.history)
    }
}
