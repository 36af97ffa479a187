//! Cost function abstraction for cities.

/// A city that knows its travel cost to any other city.
///
/// Costs may be asymmetric: `a.cost_to(&b)` need not equal
/// `b.cost_to(&a)`. Return `f64::INFINITY` when `other` is unreachable.
/// Implementations must be pure for the duration of a search.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::matrix::{City, PlanarCity};
///
/// let a = PlanarCity::new(0.0, 0.0, 0.0);
/// let b = PlanarCity::new(3.0, 4.0, 0.0);
/// assert!((a.cost_to(&b) - 5.0).abs() < 1e-12);
/// ```
pub trait City {
    /// Cost of travelling from `self` to `other`.
    fn cost_to(&self, other: &Self) -> f64;
}

/// A point on a plane with an elevation.
///
/// The cost is the Euclidean distance plus the elevation gained, so
/// climbing is more expensive than descending. Costs never go below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarCity {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

impl PlanarCity {
    pub fn new(x: f64, y: f64, elevation: f64) -> Self {
        Self { x, y, elevation }
    }
}

impl City for PlanarCity {
    fn cost_to(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();
        (distance + other.elevation - self.elevation).max(0.0)
    }
}
