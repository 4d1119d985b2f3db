//! Nearest-point lookup used by hover feedback and marker hit testing.

use super::point::Point;
use super::scale::ChartScales;

/// Leftmost insertion index for `target` in `items[lo..]`, ordered by `key`.
///
/// `items` must be sorted ascending by `key`.
pub fn bisect_left_by<T>(items: &[T], target: f64, lo: usize, key: impl Fn(&T) -> f64) -> usize {
    let mut lo = lo.min(items.len());
    let mut hi = items.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if key(&items[mid]) < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Index of the point whose `x` is closest to `x`.
///
/// The bracketing pair is found by bisection, so `points` must be ordered by
/// `x` (a [`Dataset`](super::point::Dataset) always is). On an exact tie the
/// left neighbour wins. Positions beyond either end clamp to the first or last
/// point.
pub fn nearest_index(points: &[Point], x: f64) -> Option<usize> {
    if points.is_empty() || x.is_nan() {
        return None;
    }
    if points.len() == 1 {
        return Some(0);
    }
    let i = bisect_left_by(points, x, 1, |p| p.x);
    if i >= points.len() {
        return Some(points.len() - 1);
    }
    let (d0, d1) = (&points[i - 1], &points[i]);
    if x - d0.x > d1.x - x {
        Some(i)
    } else {
        Some(i - 1)
    }
}

/// Index of the marker under a viewport-local pixel position.
///
/// Returns the closest marker whose centre lies within `hit_radius` pixels.
pub fn marker_at(
    points: &[Point],
    scales: &ChartScales,
    pos: [f64; 2],
    hit_radius: f64,
) -> Option<usize> {
    let max_dist2 = hit_radius * hit_radius;
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let [px, py] = scales.project(p);
            let d2 = (px - pos[0]).powi(2) + (py - pos[1]).powi(2);
            (d2 <= max_dist2).then_some((i, d2))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
