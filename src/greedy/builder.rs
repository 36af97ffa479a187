//! Greedy tour construction.

use crate::matrix::CostMatrix;
use crate::result::Tour;

/// Builds a nearest-neighbour tour from `origin`.
///
/// At each step the cheapest finite edge to an unvisited city is taken;
/// ties go to the lowest city index. The origin is only re-entered by the
/// closing edge once every city has been visited.
///
/// Returns `None` if the walk dead-ends or the last city has no edge back
/// to the origin. A single-city matrix yields the one-city tour.
/// `matrix` should hold the original (unreduced) costs.
///
/// # Panics
///
/// Panics if `origin` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::greedy::greedy_tour;
/// use u_tsp_bnb::matrix::CostMatrix;
///
/// let inf = f64::INFINITY;
/// let m = CostMatrix::from_rows(&[
///     vec![inf, 1.0, 2.0],
///     vec![5.0, inf, 1.0],
///     vec![1.0, 5.0, inf],
/// ])
/// .unwrap();
/// let tour = greedy_tour(&m, 0).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 2]);
/// ```
pub fn greedy_tour(matrix: &CostMatrix, origin: usize) -> Option<Tour> {
    let n = matrix.size();
    if n == 0 {
        return None;
    }
    assert!(origin < n, "origin {origin} out of range for {n} cities");
    if n == 1 {
        return Some(Tour::new(vec![origin]));
    }

    let mut visited = vec![false; n];
    visited[origin] = true;
    let mut path = Vec::with_capacity(n);
    path.push(origin);
    let mut current = origin;

    while path.len() < n {
        let next = (0..n)
            .filter(|&j| !visited[j])
            .map(|j| (j, matrix.get(current, j)))
            .filter(|(_, cost)| cost.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((city, _)) = next else {
            log::debug!(
                "greedy: dead end at city={current} visited={}/{n}",
                path.len()
            );
            return None;
        };

        visited[city] = true;
        path.push(city);
        current = city;
    }

    if !matrix.has_edge(current, origin) {
        log::debug!("greedy: no closing edge {current} -> {origin}");
        return None;
    }

    Some(Tour::new(path))
}
