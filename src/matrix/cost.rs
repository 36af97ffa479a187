//! Dense cost matrix construction and masking.

use super::city::City;
use crate::error::{Result, TspError};

/// Dense n×n table of directed travel costs.
///
/// Stored row-major in a single allocation so that copying a matrix for a
/// child search state is one `memcpy`. `f64::INFINITY` marks a missing
/// edge; the diagonal is always infinite.
///
/// Every constructor validates its input: costs must be non-negative and
/// not NaN. Once built, the matrix is only changed through [`mask_row`],
/// [`mask_column`] and [`reduce`](Self::reduce).
///
/// [`mask_row`]: Self::mask_row
/// [`mask_column`]: Self::mask_column
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::matrix::CostMatrix;
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 1.0, 4.0],
///     vec![2.0, inf, 1.0],
///     vec![1.0, 3.0, inf],
/// ])
/// .unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.cycle_cost(&[0, 1, 2]), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix by calling `cost(i, j)` for every off-diagonal pair.
    pub fn from_fn<F>(n: usize, mut cost: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = vec![f64::INFINITY; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let value = cost(i, j);
                if value.is_nan() || value < 0.0 {
                    return Err(TspError::InvalidCost {
                        from: i,
                        to: j,
                        value,
                    });
                }
                data[i * n + j] = value;
            }
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from explicit rows. Diagonal entries are ignored.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(TspError::MalformedMatrix {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Self::from_fn(n, |i, j| rows[i][j])
    }

    /// Builds a matrix from a city list and an edge-existence predicate.
    ///
    /// `matrix[i][j] = cities[i].cost_to(&cities[j])` where
    /// `edge_exists(i, j)` holds, and `+inf` elsewhere.
    pub fn from_cities<C, E>(cities: &[C], edge_exists: E) -> Result<Self>
    where
        C: City,
        E: Fn(usize, usize) -> bool,
    {
        Self::from_fn(cities.len(), |i, j| {
            if edge_exists(i, j) {
                cities[i].cost_to(&cities[j])
            } else {
                f64::INFINITY
            }
        })
    }

    /// Number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Whether the edge `from -> to` has a finite cost.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Outgoing costs of `city`.
    #[inline]
    pub fn row(&self, city: usize) -> &[f64] {
        &self.data[city * self.n..(city + 1) * self.n]
    }

    /// Forbids every edge leaving `city`.
    pub fn mask_row(&mut self, city: usize) {
        let n = self.n;
        self.data[city * n..(city + 1) * n].fill(f64::INFINITY);
    }

    /// Forbids every edge entering `city`.
    pub fn mask_column(&mut self, city: usize) {
        let n = self.n;
        for i in 0..n {
            self.data[i * n + city] = f64::INFINITY;
        }
    }

    /// Sum of the edges along an open path.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Cost of the closed cycle through `tour`, including the edge from the
    /// last city back to the first.
    ///
    /// Returns `0.0` for tours with fewer than two cities.
    pub fn cycle_cost(&self, tour: &[usize]) -> f64 {
        match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) if tour.len() > 1 => {
                self.path_cost(tour) + self.get(last, first)
            }
            _ => 0.0,
        }
    }

    pub(crate) fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::PlanarCity;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_from_rows_forces_infinite_diagonal() {
        let m = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert_eq!(m.get(0, 0), INF);
        assert_eq!(m.get(1, 1), INF);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 2.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = CostMatrix::from_rows(&[vec![INF, 1.0], vec![2.0]]).unwrap_err();
        assert_eq!(
            err,
            TspError::MalformedMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_rejects_nan_and_negative_costs() {
        assert!(matches!(
            CostMatrix::from_rows(&[vec![INF, f64::NAN], vec![1.0, INF]]),
            Err(TspError::InvalidCost { from: 0, to: 1, .. })
        ));
        assert!(matches!(
            CostMatrix::from_rows(&[vec![INF, 1.0], vec![-1.0, INF]]),
            Err(TspError::InvalidCost { from: 1, to: 0, .. })
        ));
    }

    #[test]
    fn test_from_cities_respects_edge_predicate() {
        let cities = vec![
            PlanarCity::new(0.0, 0.0, 0.0),
            PlanarCity::new(3.0, 4.0, 0.0),
            PlanarCity::new(0.0, 1.0, 0.0),
        ];
        let m = CostMatrix::from_cities(&cities, |i, j| !(i == 2 && j == 0)).unwrap();
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 1.0).abs() < 1e-12);
        assert!(!m.has_edge(2, 0));
        assert!(m.has_edge(0, 2));
    }

    #[test]
    fn test_empty_matrix() {
        let m = CostMatrix::from_rows(&[]).unwrap();
        assert_eq!(m.size(), 0);
        assert_eq!(m.cycle_cost(&[]), 0.0);
    }

    #[test]
    fn test_masking() {
        let mut m = CostMatrix::from_fn(3, |i, j| (i * 3 + j) as f64).unwrap();
        m.mask_row(1);
        m.mask_column(2);
        assert!(m.row(1).iter().all(|v| v.is_infinite()));
        assert_eq!(m.get(0, 2), INF);
        assert_eq!(m.get(2, 2), INF);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(2, 0), 6.0);
    }

    #[test]
    fn test_cycle_cost_includes_closing_edge() {
        let m = CostMatrix::from_rows(&[
            vec![INF, 1.0, 10.0],
            vec![10.0, INF, 2.0],
            vec![3.0, 10.0, INF],
        ])
        .unwrap();
        assert_eq!(m.path_cost(&[0, 1, 2]), 3.0);
        assert_eq!(m.cycle_cost(&[0, 1, 2]), 6.0);
        assert_eq!(m.cycle_cost(&[0]), 0.0);
    }
}
