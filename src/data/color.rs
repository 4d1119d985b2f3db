//! Chart background color and the random hue generator behind "change color".

use std::fmt;

use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A color in HSL space. Saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Fully saturated, half-lightness color at `hue` degrees (wrapped into `[0, 360)`).
    pub fn vivid(hue: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: 100.0,
            lightness: 50.0,
        }
    }

    pub fn to_color32(&self) -> Color32 {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Background of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    /// Plain white, shown until the color is changed for the first time.
    #[default]
    Initial,
    Hsl(Hsl),
}

impl Background {
    pub fn to_color32(&self) -> Color32 {
        match self {
            Background::Initial => Color32::WHITE,
            Background::Hsl(hsl) => hsl.to_color32(),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Initial => write!(f, "#ffff"),
            Background::Hsl(hsl) => write!(f, "{hsl}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hue sources
// ─────────────────────────────────────────────────────────────────────────────

/// Supplies hues in degrees for [`ChartEvent::ChangeColor`](super::state::ChartEvent).
pub trait HueSource {
    fn next_hue(&mut self) -> f64;
}

/// Closures work as hue sources, which keeps tests deterministic.
impl<F: FnMut() -> f64> HueSource for F {
    fn next_hue(&mut self) -> f64 {
        self()
    }
}

/// Uniformly distributed hues in `[0, 360)`.
pub struct RandomHue {
    rng: StdRng,
}

impl RandomHue {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomHue {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl HueSource for RandomHue {
    fn next_hue(&mut self) -> f64 {
        self.rng.gen_range(0.0..360.0)
    }
}
