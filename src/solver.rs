//! Day-trip route solver: nearest-neighbor construction plus 2-opt
//! local search over a haversine distance matrix.
//!
//! Tours are open paths: the visitor is not required to return to the
//! start, so total length sums consecutive edges only.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::PlanError;
use crate::geo::Point;
use crate::matrix::DistanceMatrix;
use crate::models::{OptimizedRoute, RoutePoint};

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Safety cap on full 2-opt sweeps. Exceeding it keeps the best tour
    /// found so far and flags the result as not converged.
    pub max_sweeps: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { max_sweeps: 1000 }
    }
}

/// Result of a route optimization.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    /// Visiting order from nearest-neighbor construction.
    pub initial_order: Vec<usize>,
    /// Visiting order after 2-opt improvement.
    pub optimized_order: Vec<usize>,
    /// Open-path length of the optimized order, rounded to 3 decimals.
    pub total_distance_km: f64,
    /// False if the 2-opt sweep cap was hit before a local optimum.
    pub converged: bool,
}

/// Outcome of a 2-opt pass.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    pub order: Vec<usize>,
    pub converged: bool,
}

/// Builds a tour greedily: start at `start`, repeatedly step to the
/// nearest unvisited point.
///
/// Ties keep the lowest index (strict less-than comparison). Returns a
/// permutation of `0..n` beginning at `start`; empty matrix yields an
/// empty order.
///
/// # Panics
///
/// Panics if the matrix is non-empty and `start` is out of bounds.
/// Callers validate at the boundary; see [`optimize_route`].
pub fn nearest_neighbor_order(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }
    assert!(start < n, "start index {start} out of bounds for {n} points");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    order.push(start);
    visited[start] = true;
    let mut current = start;

    for _ in 1..n {
        let mut next = None;
        let mut best = f64::INFINITY;
        for j in 0..n {
            if !visited[j] && matrix.get(current, j) < best {
                best = matrix.get(current, j);
                next = Some(j);
            }
        }
        // n - 1 unvisited points remain, so a minimum always exists
        let next = next.expect("unvisited point must exist");
        order.push(next);
        visited[next] = true;
        current = next;
    }

    order
}

/// Improves a tour with first-improvement 2-opt.
///
/// For edges (order[i-1], order[i]) and (order[j], order[j+1]), reverses
/// the segment `order[i..=j]` whenever
/// `d(a,c) + d(b,d) < d(a,b) + d(c,d)`. Sweeps repeat until one makes no
/// improving move, or `options.max_sweeps` is reached.
///
/// Tours shorter than 4 points have no valid 2-opt move and are returned
/// unchanged.
pub fn two_opt(order: &[usize], matrix: &DistanceMatrix, options: &SolveOptions) -> TwoOptResult {
    let n = order.len();
    if n < 4 {
        return TwoOptResult {
            order: order.to_vec(),
            converged: true,
        };
    }

    let mut current = order.to_vec();
    let mut sweeps = 0;
    loop {
        let mut improved = false;
        for i in 1..n - 2 {
            for j in (i + 1)..n - 1 {
                let (a, b) = (current[i - 1], current[i]);
                let (c, d) = (current[j], current[j + 1]);
                if matrix.get(a, c) + matrix.get(b, d) < matrix.get(a, b) + matrix.get(c, d) {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
        sweeps += 1;

        if !improved {
            debug!(sweeps, "2-opt converged");
            return TwoOptResult {
                order: current,
                converged: true,
            };
        }
        if sweeps >= options.max_sweeps {
            warn!(sweeps, "2-opt sweep cap reached before convergence");
            return TwoOptResult {
                order: current,
                converged: false,
            };
        }
    }
}

/// Open-path length of a tour: sum of consecutive-edge distances.
pub fn total_distance(order: &[usize], matrix: &DistanceMatrix) -> f64 {
    order
        .windows(2)
        .map(|pair| matrix.get(pair[0], pair[1]))
        .sum()
}

/// Full pipeline: matrix build, nearest-neighbor construction from
/// `start_index`, 2-opt improvement, open-path total.
///
/// Empty input returns an empty summary rather than an error; a
/// non-empty input with an out-of-bounds start index is rejected.
pub fn optimize_route(
    points: &[Point],
    start_index: usize,
    options: &SolveOptions,
) -> Result<RouteSummary, PlanError> {
    if points.is_empty() {
        return Ok(RouteSummary {
            initial_order: Vec::new(),
            optimized_order: Vec::new(),
            total_distance_km: 0.0,
            converged: true,
        });
    }
    if start_index >= points.len() {
        return Err(PlanError::StartOutOfBounds {
            start: start_index,
            len: points.len(),
        });
    }

    let matrix = DistanceMatrix::from_points(points);
    let initial = nearest_neighbor_order(&matrix, start_index);
    let improved = two_opt(&initial, &matrix, options);
    let total = total_distance(&improved.order, &matrix);

    Ok(RouteSummary {
        initial_order: initial,
        optimized_order: improved.order,
        total_distance_km: round3(total),
        converged: improved.converged,
    })
}

/// Route-request variant: validates a request body of at least two
/// points, optimizes starting from the first entry, and returns the
/// input records reordered to the optimized sequence.
pub fn plan_route(
    points: &[RoutePoint],
    options: &SolveOptions,
) -> Result<OptimizedRoute, PlanError> {
    if points.len() < 2 {
        return Err(PlanError::InsufficientInput {
            needed: 2,
            got: points.len(),
        });
    }

    let coords = points
        .iter()
        .map(|p| p.point())
        .collect::<Result<Vec<_>, _>>()?;

    let summary = optimize_route(&coords, 0, options)?;
    let route = summary
        .optimized_order
        .iter()
        .map(|&i| points[i].clone())
        .collect();

    Ok(OptimizedRoute {
        order: summary.initial_order,
        optimized_order: summary.optimized_order,
        total_distance_km: summary.total_distance_km,
        route,
    })
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
