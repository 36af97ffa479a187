//! Brute-force reference solvers and instance strategies for tests.

use proptest::prelude::*;

use crate::matrix::CostMatrix;

/// Cheapest cost of any Hamiltonian cycle that starts with `path`.
///
/// `path` must start at the origin and hold distinct cities. Returns
/// `+inf` when no completion exists.
pub(crate) fn best_completion(costs: &CostMatrix, path: &[usize]) -> f64 {
    let n = costs.size();
    let mut visited = vec![false; n];
    for &c in path {
        visited[c] = true;
    }
    let prefix = costs.path_cost(path);
    let Some(&last) = path.last() else {
        return f64::INFINITY;
    };
    prefix + extend(costs, path[0], last, &mut visited, path.len())
}

fn extend(
    costs: &CostMatrix,
    origin: usize,
    at: usize,
    visited: &mut [bool],
    depth: usize,
) -> f64 {
    let n = costs.size();
    if depth == n {
        return costs.get(at, origin);
    }
    let mut best = f64::INFINITY;
    for next in 0..n {
        if visited[next] || !costs.has_edge(at, next) {
            continue;
        }
        visited[next] = true;
        let rest = extend(costs, origin, next, visited, depth + 1);
        visited[next] = false;
        best = best.min(costs.get(at, next) + rest);
    }
    best
}

/// Optimal tour cost by exhaustive enumeration from city 0.
pub(crate) fn brute_force_optimum(costs: &CostMatrix) -> f64 {
    match costs.size() {
        0 | 1 => 0.0,
        _ => best_completion(costs, &[0]),
    }
}

/// Integer-valued costs (exact in `f64`), with roughly one edge in five
/// missing.
fn edge_cost() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => (1u32..50).prop_map(f64::from),
        1 => Just(f64::INFINITY),
    ]
}

/// Random asymmetric instances with `min..=max` cities.
pub(crate) fn instance(min: usize, max: usize) -> impl Strategy<Value = CostMatrix> {
    (min..=max).prop_flat_map(|n| {
        prop::collection::vec(edge_cost(), n * n).prop_map(move |costs| {
            CostMatrix::from_fn(n, |i, j| costs[i * n + j]).expect("generated costs are valid")
        })
    })
}

#[test]
fn test_brute_force_on_ring() {
    let inf = f64::INFINITY;
    let m = CostMatrix::from_rows(&[
        vec![inf, 1.0, 10.0, 10.0],
        vec![10.0, inf, 1.0, 10.0],
        vec![10.0, 10.0, inf, 1.0],
        vec![1.0, 10.0, 10.0, inf],
    ])
    .unwrap();
    assert_eq!(brute_force_optimum(&m), 4.0);
    assert_eq!(best_completion(&m, &[0, 2]), 10.0 + 1.0 + 10.0 + 10.0);
}
