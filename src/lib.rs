//! PickChart crate root: re-exports and module wiring.
//!
//! An interactive point chart built on egui/eframe: a fixed-size viewport
//! with axes, a smoothed curve through the points and one marker per point.
//! Hovering a marker shows a crosshair on the nearest point, clicking toggles
//! its selection, and selected points are listed as detail cards.
//!
//! Modules:
//! - `data`: points, scales, nearest lookup, selection and view state
//! - `render`: drawing-surface trait and the chart renderer
//! - `panels`: egui panels for the chart and the selection cards
//! - `app`: embeddable [`ChartView`], eframe wrapper and [`run_chart`]
//! - `config`: window and chart configuration

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_chart, ChartApp, ChartView};
pub use config::{ChartConfig, ChartSettings};
pub use data::point::{Dataset, Point, PointId};
pub use data::scale::{ChartScales, LinearScale, Viewport};
pub use data::selection::{Selection, SelectionMatch};
pub use data::state::{ChartEvent, ViewState};
pub use error::ChartError;
