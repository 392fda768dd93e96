//! Bezier curve evaluation.
//!
//! Curves are evaluated in Bernstein form. At `t = 0` every basis function
//! except the first is exactly zero (and at `t = 1` every one except the
//! last), so a sampled curve starts and ends exactly on its outer control
//! points.

use oxymouse_trajectory_model::coordinate::{Coordinate, Trajectory};

/// Binomial coefficient `C(n, k)` as a float.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Bernstein basis polynomial `C(n, i) · t^i · (1 - t)^(n - i)`.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// `count` parameter values evenly spaced over `[0, 1]`.
///
/// The first value is exactly `0.0` and the last exactly `1.0`.
pub fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count).map(|i| i as f64 / last).collect()
        }
    }
}

/// Evaluate the curve through `points` at a single parameter value.
pub fn bezier_point(points: &[(f64, f64)], t: f64) -> (f64, f64) {
    let n = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(x, y), (i, &(px, py))| {
            let w = bernstein(i, n, t);
            (x + px * w, y + py * w)
        })
}

/// Sample the curve defined by `points` at `num_steps` evenly spaced
/// parameter values, truncating each sample to pixels.
pub fn bezier_curve(points: &[(f64, f64)], num_steps: usize) -> Trajectory {
    if points.is_empty() {
        return vec![];
    }
    linspace(num_steps)
        .into_iter()
        .map(|t| {
            let (x, y) = bezier_point(points, t);
            Coordinate::truncate(x, y)
        })
        .collect()
}

/// Quadratic Bezier on one axis: `(1-t)²·p0 + 2(1-t)t·p1 + t²·p2`.
pub fn quadratic_bezier(p0: f64, p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}
