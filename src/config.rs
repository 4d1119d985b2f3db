//! Configuration for the chart window.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::scale::{Viewport, MAX_TICK_COUNT};
use crate::data::selection::SelectionMatch;
use crate::error::ChartError;
use crate::render::ChartStyle;

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field              | Purpose |
/// |--------------------|---------|
/// | `viewport`         | Pixel size of the plotting area |
/// | `loading_delay`    | Time before markers and curve appear |
/// | `reveal_duration`  | Length of the curve entry animation |
/// | `style`            | Marker sizes, colors, tick count |
/// | `selection_match`  | How clicks match already selected points |
#[derive(Clone)]
pub struct ChartConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the chart.
    pub headline: Option<String>,
    pub viewport: Viewport,
    pub loading_delay: Duration,
    pub reveal_duration: Duration,
    pub style: ChartStyle,
    pub selection_match: SelectionMatch,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "PickChart".to_string(),
            headline: None,
            viewport: Viewport::default(),
            loading_delay: Duration::from_secs(3),
            reveal_duration: Duration::from_secs(1),
            style: ChartStyle::default(),
            selection_match: SelectionMatch::default(),
            native_options: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartSettings – serializable overrides
// ─────────────────────────────────────────────────────────────────────────────

/// JSON-loadable overrides for [`ChartConfig`]. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub loading_delay_ms: Option<u64>,
    pub reveal_duration_ms: Option<u64>,
    pub marker_radius: Option<f32>,
    pub y_ticks: Option<usize>,
    pub selection_match: Option<SelectionMatch>,
}

impl ChartSettings {
    /// Load settings from a JSON or YAML file, chosen by extension (`.yaml`/`.yml`
    /// read as YAML, anything else as JSON).
    pub fn from_file(path: &Path) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
        let settings: Self = if is_yaml {
            serde_yaml::from_str(&text).map_err(|source| ChartError::SettingsYaml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(&text).map_err(|source| ChartError::Settings {
                path: path.to_path_buf(),
                source,
            })?
        };
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply the present fields onto `cfg`, rejecting sizes that cannot be drawn.
    pub fn apply_to(self, cfg: &mut ChartConfig) -> Result<(), ChartError> {
        if let Some(width) = self.width {
            cfg.viewport.width = positive("width", width)?;
        }
        if let Some(height) = self.height {
            cfg.viewport.height = positive("height", height)?;
        }
        if let Some(radius) = self.marker_radius {
            cfg.style.marker_radius = positive("marker_radius", radius as f64)? as f32;
        }
        if let Some(title) = self.title {
            cfg.title = title;
        }
        if self.headline.is_some() {
            cfg.headline = self.headline;
        }
        if let Some(ms) = self.loading_delay_ms {
            cfg.loading_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.reveal_duration_ms {
            cfg.reveal_duration = Duration::from_millis(ms);
        }
        if let Some(n) = self.y_ticks {
            if n == 0 || n > MAX_TICK_COUNT {
                return Err(ChartError::InvalidSetting {
                    field: "y_ticks",
                    reason: format!("expected 1..={MAX_TICK_COUNT}, got {n}"),
                });
            }
            cfg.style.y_ticks = n;
        }
        if let Some(m) = self.selection_match {
            cfg.selection_match = m;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ChartError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidSetting {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
