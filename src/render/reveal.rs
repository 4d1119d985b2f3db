//! Entry animation: reveal the curve along its length.

use std::time::Duration;

use egui::Pos2;

/// Total length of a polyline in pixels.
pub fn path_length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Leading part of `points` covering `fraction` of the total length.
///
/// The last vertex is interpolated so the cut lands exactly on the requested
/// length. `fraction >= 1` returns the whole polyline.
pub fn visible_prefix(points: &[Pos2], fraction: f32) -> Vec<Pos2> {
    if fraction >= 1.0 || points.len() < 2 {
        return points.to_vec();
    }
    let fraction = fraction.max(0.0);
    let mut budget = path_length(points) * fraction;
    let mut out = vec![points[0]];
    for w in points.windows(2) {
        let seg = w[0].distance(w[1]);
        if seg >= budget {
            if seg > 0.0 && budget > 0.0 {
                out.push(w[0].lerp(w[1], budget / seg));
            }
            break;
        }
        budget -= seg;
        out.push(w[1]);
    }
    out
}

/// Cubic in-out easing on `[0, 1]`.
fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Time-driven reveal of a stroke, started once and running for `duration`.
#[derive(Debug, Clone, Copy)]
pub struct StrokeReveal {
    duration: Duration,
    started_at: Option<Duration>,
}

impl StrokeReveal {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased fraction of the stroke to show: 0 before start, 1 once finished.
    pub fn progress(&self, now: Duration) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = now.saturating_sub(start).as_secs_f32() / self.duration.as_secs_f32();
        ease_cubic_in_out(t)
    }

    pub fn is_running(&self, now: Duration) -> bool {
        self.is_started() && self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(3.0), 1.0);
    }

    #[test]
    fn prefix_cuts_inside_a_segment() {
        let pts = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), Pos2::new(10.0, 10.0)];
        let half = visible_prefix(&pts, 0.25);
        assert_eq!(half, vec![Pos2::new(0.0, 0.0), Pos2::new(5.0, 0.0)]);
        let most = visible_prefix(&pts, 0.75);
        assert_eq!(most.len(), 3);
        assert_eq!(most[2], Pos2::new(10.0, 5.0));
        assert_eq!(visible_prefix(&pts, 1.0), pts.to_vec());
    }

    #[test]
    fn reveal_progress_follows_clock() {
        let mut r = StrokeReveal::new(Duration::from_secs(1));
        assert_eq!(r.progress(Duration::ZERO), 0.0);
        assert!(!r.is_running(Duration::ZERO));
        r.start(Duration::from_secs(2));
        assert!(r.is_running(Duration::from_millis(2500)));
        assert_eq!(r.progress(Duration::from_secs(3)), 1.0);
        assert!(!r.is_running(Duration::from_secs(4)));
    }
}
