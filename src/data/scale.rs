//! Linear data-to-pixel scales.
//!
//! The chart maps its dataset onto a fixed pixel viewport: x spans
//! `[min(x), max(x)] -> [0, width]`, y spans `[0, max(y)] -> [height, 0]` so
//! that y = 0 sits on the bottom edge.

use super::point::{Dataset, Point};

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel size of the plotting area (axes labels are drawn outside of it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(500.0, 250.0)
    }
}

/// Upper bound on the tick count honoured by [`LinearScale::ticks`].
pub const MAX_TICK_COUNT: usize = 100;

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────

/// Affine map from a data domain onto a pixel range.
///
/// A degenerate domain (both ends equal, as with a single point or an empty
/// dataset) maps every value onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn is_degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        span == 0.0 || !span.is_finite()
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() || r0 == r1 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Roughly `count` round tick values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, chosen the same way d3 does,
    /// so `[0, 31.5]` with 5 ticks yields `0, 5, 10, ..., 30`. `count` is
    /// capped at [`MAX_TICK_COUNT`].
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.min(MAX_TICK_COUNT);
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut ticks = tick_values(start, stop, count as f64);
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_values(start: f64, stop: f64, count: f64) -> Vec<f64> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    // Negative powers work on inverted increments to avoid 0.1 * 3 style drift.
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        if i2 < i1 {
            return Vec::new();
        }
        (0..=((i2 - i1) as usize))
            .map(|k| (i1 + k as f64) / inc)
            .collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        if i2 < i1 {
            return Vec::new();
        }
        (0..=((i2 - i1) as usize))
            .map(|k| (i1 + k as f64) * inc)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartScales
// ─────────────────────────────────────────────────────────────────────────────

/// The x/y scale pair for one dataset and viewport.
///
/// Pure function of the domain extents; rebuild it whenever the dataset or the
/// viewport changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub viewport: Viewport,
}

impl ChartScales {
    pub fn from_dataset(dataset: &Dataset, viewport: Viewport) -> Self {
        let x_domain = dataset.x_extent().unwrap_or((0.0, 0.0));
        let y_domain = (0.0, dataset.y_max().unwrap_or(0.0));
        Self {
            x: LinearScale::new(x_domain, (0.0, viewport.width)),
            y: LinearScale::new(y_domain, (viewport.height, 0.0)),
            viewport,
        }
    }

    /// Pixel position of a point inside the viewport.
    pub fn project(&self, point: &Point) -> [f64; 2] {
        [self.x.apply(point.x), self.y.apply(point.y)]
    }
}
