//! Partial-tour search states.

use crate::matrix::CostMatrix;
use crate::result::Tour;

/// A node of the search tree: a partial path from the origin together with
/// the reduced matrix that remains after fixing its edges.
///
/// Each state owns its matrix. Children are built from a fresh copy, so a
/// state is never mutated after it has been created.
///
/// The bound is admissible: no complete tour that extends `path` costs
/// less than `bound`. When the path closes back at the origin, the bound
/// is the cost of that tour.
#[derive(Debug, Clone)]
pub struct SearchState {
    bound: f64,
    city: usize,
    matrix: CostMatrix,
    path: Vec<usize>,
}

impl SearchState {
    /// The root state: only the origin visited, the full matrix reduced.
    pub fn root(costs: &CostMatrix, origin: usize) -> Self {
        let mut matrix = costs.clone();
        let bound = matrix.reduce();
        Self {
            bound,
            city: origin,
            matrix,
            path: vec![origin],
        }
    }

    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// The city the path currently ends at.
    #[inline]
    pub fn city(&self) -> usize {
        self.city
    }

    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    #[inline]
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    #[inline]
    pub fn origin(&self) -> usize {
        self.path[0]
    }

    /// Whether the path has returned to the origin after visiting every city.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.matrix.size() + 1
    }

    /// Cities the path may move to next.
    ///
    /// Any unvisited city reachable over a finite edge, or the origin once
    /// every city has been visited.
    pub fn candidates(&self) -> Vec<usize> {
        let n = self.matrix.size();
        let origin = self.origin();
        if self.path.len() > n {
            return Vec::new();
        }
        if self.path.len() == n {
            return if self.matrix.has_edge(self.city, origin) {
                vec![origin]
            } else {
                Vec::new()
            };
        }

        let mut visited = vec![false; n];
        for &c in &self.path {
            visited[c] = true;
        }
        (0..n)
            .filter(|&j| !visited[j] && self.matrix.has_edge(self.city, j))
            .collect()
    }

    /// Fixes the edge `city -> next` and returns the resulting child.
    ///
    /// The child's bound is the parent bound plus the reduced edge cost
    /// plus the reduction of the matrix with row `city` and column `next`
    /// forbidden.
    pub fn child(&self, next: usize) -> SearchState {
        let mut bound = self.bound + self.matrix.get(self.city, next);

        let mut matrix = self.matrix.clone();
        matrix.mask_row(self.city);
        matrix.mask_column(next);
        bound += matrix.reduce();

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        SearchState {
            bound,
            city: next,
            matrix,
            path,
        }
    }

    /// The visiting order of a complete state, without the closing origin.
    pub fn into_tour(mut self) -> Tour {
        if self.is_complete() {
            self.path.pop();
        }
        Tour::new(self.path)
    }
}
