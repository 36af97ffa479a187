//! Row/column reduction.
//!
//! Every complete tour leaves each row exactly once and enters each column
//! exactly once, so subtracting a row (or column) minimum from all its
//! entries lowers every tour's cost by exactly that minimum. The sum of the
//! subtracted minima is therefore a lower bound on any tour through the
//! matrix.
//!
//! Rows are reduced in full before columns. Rows and columns with no
//! finite entry are skipped so that `inf - inf` is never evaluated.

use super::cost::CostMatrix;

impl CostMatrix {
    /// Reduces the matrix in place and returns the bound contribution.
    ///
    /// Re-reducing an already reduced matrix returns `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_bnb::matrix::CostMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let mut m = CostMatrix::from_rows(&[
    ///     vec![inf, 3.0, 5.0],
    ///     vec![4.0, inf, 2.0],
    ///     vec![6.0, 7.0, inf],
    /// ])
    /// .unwrap();
    /// // row minima 3 + 2 + 6; every column then already holds a zero
    /// assert_eq!(m.reduce(), 11.0);
    /// assert_eq!(m.reduce(), 0.0);
    /// ```
    pub fn reduce(&mut self) -> f64 {
        let rows = self.reduce_rows();
        rows + self.reduce_columns()
    }

    fn reduce_rows(&mut self) -> f64 {
        let n = self.size();
        if n == 0 {
            return 0.0;
        }
        let mut total = 0.0;
        for row in self.data_mut().chunks_exact_mut(n) {
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            if !min.is_finite() || min == 0.0 {
                continue;
            }
            for v in row.iter_mut() {
                *v -= min;
            }
            total += min;
        }
        total
    }

    fn reduce_columns(&mut self) -> f64 {
        let n = self.size();
        let mut total = 0.0;
        for j in 0..n {
            let min = (0..n)
                .map(|i| self.data()[i * n + j])
                .fold(f64::INFINITY, f64::min);
            if !min.is_finite() || min == 0.0 {
                continue;
            }
            let data = self.data_mut();
            for i in 0..n {
                data[i * n + j] -= min;
            }
            total += min;
        }
        total
    }

    /// Whether every row and column with a finite entry has minimum zero.
    pub fn is_reduced(&self) -> bool {
        let n = self.size();
        let line_ok = |min: f64| !min.is_finite() || min == 0.0;
        let rows_ok = (0..n).all(|i| {
            line_ok(self.row(i).iter().copied().fold(f64::INFINITY, f64::min))
        });
        rows_ok
            && (0..n).all(|j| {
                line_ok((0..n).map(|i| self.get(i, j)).fold(f64::INFINITY, f64::min))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_reduce_rows_then_columns() {
        let mut m = CostMatrix::from_rows(&[
            vec![INF, 3.0, 5.0],
            vec![4.0, INF, 2.0],
            vec![6.0, 7.0, INF],
        ])
        .unwrap();
        let bound = m.reduce();
        assert_eq!(bound, 11.0);
        assert!(m.is_reduced());
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 2), 0.0);
        assert_eq!(m.get(2, 0), 0.0);
    }

    #[test]
    fn test_column_reduction_applies_after_rows() {
        let mut m = CostMatrix::from_rows(&[
            vec![INF, 1.0, 1.0],
            vec![5.0, INF, 1.0],
            vec![5.0, 1.0, INF],
        ])
        .unwrap();
        // rows subtract 1 each; column 0 is then {inf, 4, 4} -> 4 more
        assert_eq!(m.reduce(), 7.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.get(2, 0), 0.0);
    }

    #[test]
    fn test_reduce_skips_infinite_rows_and_columns() {
        let mut m = CostMatrix::from_rows(&[
            vec![INF, 2.0, 3.0],
            vec![INF, INF, INF],
            vec![INF, 4.0, INF],
        ])
        .unwrap();
        let bound = m.reduce();
        assert_eq!(bound, 2.0 + 4.0 + 1.0);
        assert!(m.data().iter().all(|v| !v.is_nan()));
        assert!(m.row(1).iter().all(|v| v.is_infinite()));
        assert!((0..3).all(|i| m.get(i, 0).is_infinite()));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut m = CostMatrix::from_fn(5, |i, j| ((i * 7 + j * 3) % 11) as f64 + 1.0).unwrap();
        m.reduce();
        assert!(m.is_reduced());
        assert_eq!(m.reduce(), 0.0);
    }

    #[test]
    fn test_reduce_empty_and_single() {
        let mut empty = CostMatrix::from_rows(&[]).unwrap();
        assert_eq!(empty.reduce(), 0.0);
        let mut single = CostMatrix::from_rows(&[vec![INF]]).unwrap();
        assert_eq!(single.reduce(), 0.0);
    }
}
