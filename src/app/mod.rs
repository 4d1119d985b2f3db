//! Main application module.
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`chart_app`] | Standalone [`ChartApp`] (eframe) wrapper |
//! | [`run`]       | Top-level [`run_chart()`] entry point and icon loading |
//!
//! [`ChartView`] itself lives here: it owns the dataset, the view state and
//! the panels, and can be embedded into any egui application.

mod chart_app;
mod run;

pub use chart_app::ChartApp;
pub use run::run_chart;

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::color::{HueSource, RandomHue};
use crate::data::data::ChartData;
use crate::data::loading::{Clock, LoadingGate, SystemClock};
use crate::data::point::Dataset;
use crate::data::scale::Viewport;
use crate::data::state::{ChartEvent, ViewState};
use crate::panels::{ChartPanel, Panel, SelectionPanel};

// ─────────────────────────────────────────────────────────────────────────────
// ChartView – the central widget type
// ─────────────────────────────────────────────────────────────────────────────

/// The chart widget: dataset, view state, chart panel and the side panels.
///
/// `ChartView` can be used:
///
/// * **Standalone** – wrapped inside [`ChartApp`] and driven by the eframe event loop.
/// * **Embedded** – placed inside a parent egui application via [`ChartView::show_inside`].
pub struct ChartView {
    /// Points being shown. Fixed for the lifetime of the view.
    pub dataset: Dataset,
    /// Background, selection, crosshair and loading phase.
    pub state: ViewState,
    /// Axes, curve and markers.
    pub chart_panel: ChartPanel,
    /// Panels docked to the right of the chart (selection cards by default).
    pub side_panels: Vec<Box<dyn Panel>>,

    hues: Box<dyn HueSource>,
    clock: Box<dyn Clock>,
}

impl ChartView {
    /// Create a view using wall-clock time and random hues.
    pub fn new(dataset: Dataset, cfg: &ChartConfig) -> Self {
        Self::with_sources(
            dataset,
            cfg,
            Box::new(SystemClock::default()),
            Box::new(RandomHue::from_entropy()),
        )
    }

    /// Create a view with explicit time and hue sources.
    ///
    /// The loading gate starts counting immediately, so the delay is measured
    /// from construction.
    pub fn with_sources(
        dataset: Dataset,
        cfg: &ChartConfig,
        clock: Box<dyn Clock>,
        hues: Box<dyn HueSource>,
    ) -> Self {
        let loading = LoadingGate::start(clock.as_ref(), cfg.loading_delay);
        let chart_panel = ChartPanel::new(
            &dataset,
            cfg.viewport,
            cfg.style.clone(),
            cfg.reveal_duration,
        );
        tracing::debug!(
            points = dataset.len(),
            width = cfg.viewport.width,
            height = cfg.viewport.height,
            "chart view created"
        );
        Self {
            dataset,
            state: ViewState::new(cfg.selection_match, loading),
            chart_panel,
            side_panels: vec![Box::new(SelectionPanel::default())],
            hues,
            clock,
        }
    }

    /// Apply an event outside of the UI (e.g. from tests or a parent app).
    pub fn apply(&mut self, event: ChartEvent) -> bool {
        self.state.apply(&self.dataset, event, self.hues.as_mut())
    }

    /// Resize the plotting area. Scales are rebuilt only if the size changed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.chart_panel.set_viewport(&self.dataset, viewport);
    }

    /// Stop a pending loading transition; call when the view goes away.
    pub fn shutdown(&mut self) {
        self.state.cancel_loading();
    }

    /// Render as a standalone window layout: side panels on the right, chart in the centre.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Self {
            dataset,
            state,
            chart_panel,
            side_panels,
            hues,
            clock,
        } = self;
        let mut chart = ChartData {
            dataset,
            state,
            hues: hues.as_mut(),
            clock: clock.as_ref(),
        };

        egui::SidePanel::right("pickchart_side_panels")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                for panel in side_panels.iter_mut() {
                    if panel.state().visible {
                        panel.render_panel(ui, &mut chart);
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chart_panel.render_panel(ui, &mut chart);
        });
    }

    /// Render inside an existing `Ui`: chart on the left, side panels stacked on the right.
    pub fn show_inside(&mut self, ui: &mut egui::Ui) {
        let Self {
            dataset,
            state,
            chart_panel,
            side_panels,
            hues,
            clock,
        } = self;
        let mut chart = ChartData {
            dataset,
            state,
            hues: hues.as_mut(),
            clock: clock.as_ref(),
        };

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| chart_panel.render_panel(ui, &mut chart));
            ui.separator();
            ui.vertical(|ui| {
                for panel in side_panels.iter_mut() {
                    if panel.state().visible {
                        panel.render_panel(ui, &mut chart);
                    }
                }
            });
        });
    }
}
