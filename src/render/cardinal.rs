//! Cardinal spline through a point sequence.
//!
//! Each span `p[i] -> p[i+1]` becomes a cubic Bézier with control points
//! `p[i] + k * (p[i+1] - p[i-1])` and `p[i+1] - k * (p[i+2] - p[i])`, where
//! `k = (1 - tension) / 6`. At the ends the missing neighbour is mirrored so
//! the first and last control points coincide with the end points.

use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Pos2,
    pub c1: Pos2,
    pub c2: Pos2,
    pub to: Pos2,
}

impl CubicSegment {
    pub fn eval(&self, t: f32) -> Pos2 {
        let u = 1.0 - t;
        let a = u * u * u;
        let b = 3.0 * u * u * t;
        let c = 3.0 * u * t * t;
        let d = t * t * t;
        Pos2::new(
            a * self.from.x + b * self.c1.x + c * self.c2.x + d * self.to.x,
            a * self.from.y + b * self.c1.y + c * self.c2.y + d * self.to.y,
        )
    }
}

pub fn cardinal_segments(points: &[Pos2], tension: f32) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let k = (1.0 - tension) / 6.0;
    (0..n - 1)
        .map(|i| {
            let p1 = points[i];
            let p2 = points[i + 1];
            let p0 = if i == 0 { p2 } else { points[i - 1] };
            let p3 = if i + 2 < n { points[i + 2] } else { p1 };
            CubicSegment {
                from: p1,
                c1: p1 + k * (p2 - p0),
                c2: p2 - k * (p3 - p1),
                to: p2,
            }
        })
        .collect()
}

/// Flatten the spline into a polyline with `steps` sub-segments per span.
///
/// The result starts at the first point and passes exactly through every
/// input point. A single point yields itself; no points yield nothing.
pub fn curve_through(points: &[Pos2], tension: f32, steps: usize) -> Vec<Pos2> {
    let segments = cardinal_segments(points, tension);
    if segments.is_empty() {
        return points.to_vec();
    }
    let steps = steps.max(1);
    let mut out = Vec::with_capacity(segments.len() * steps + 1);
    out.push(segments[0].from);
    for seg in &segments {
        for s in 1..steps {
            out.push(seg.eval(s as f32 / steps as f32));
        }
        out.push(seg.to);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_controls_coincide_with_end_points() {
        let pts = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 5.0), Pos2::new(20.0, 0.0)];
        let segs = cardinal_segments(&pts, 0.0);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].c1, pts[0]);
        assert_eq!(segs[1].c2, pts[2]);
        // Interior tangent follows the neighbours: (p2 - p0) / 6.
        assert!((segs[0].c2.x - (10.0 - 20.0 / 6.0)).abs() < 1e-5);
        assert_eq!(segs[0].c2.y, 5.0);
    }

    #[test]
    fn two_points_make_a_straight_segment() {
        let pts = [Pos2::new(0.0, 0.0), Pos2::new(6.0, 6.0)];
        let line = curve_through(&pts, 0.0, 4);
        assert_eq!(line.len(), 5);
        for p in line {
            assert!((p.x - p.y).abs() < 1e-5);
        }
    }
}
