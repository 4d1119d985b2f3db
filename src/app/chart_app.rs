//! Standalone application wrapper.
//!
//! [`ChartApp`] wraps a [`ChartView`] and implements [`eframe::App`] so the
//! chart can run as a native window.

use eframe::egui;

use super::ChartView;

/// Standalone application that implements [`eframe::App`].
pub struct ChartApp {
    /// The inner view that owns all data and UI state.
    pub view: ChartView,
    /// Optional heading shown above the chart.
    pub headline: Option<String>,
}

impl ChartApp {
    pub fn new(view: ChartView) -> Self {
        Self {
            view,
            headline: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.view.shutdown();
        }

        if let Some(headline) = &self.headline {
            egui::TopBottomPanel::top("pickchart_headline").show(ctx, |ui| {
                ui.heading(headline.as_str());
            });
        }

        self.view.show(ctx);
    }
}
