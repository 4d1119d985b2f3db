//! Demo: Embedding the chart into your own egui application window
//!
//! What it demonstrates
//! - How to place a `ChartView` inside an `egui::Window` of an existing app.
//! - Reading the selection back from the embedding application.
//! - Resizing the plotting area from the host UI.
//!
//! How to run
//! ```bash
//! cargo run --example embedded_chart
//! ```
//! Click "Open Chart Window" to show the embedded chart.

use std::time::Duration;

use eframe::{egui, NativeOptions};
use pickchart::{ChartConfig, ChartView, Dataset, Viewport};

struct DemoApp {
    chart: ChartView,
    chart_width: f64,
    show_chart_window: bool,
}

impl DemoApp {
    fn new() -> Result<Self, pickchart::ChartError> {
        let dataset = Dataset::bundled()?;
        let cfg = ChartConfig {
            loading_delay: Duration::from_millis(800),
            ..ChartConfig::default()
        };
        Ok(Self {
            chart: ChartView::new(dataset, &cfg),
            chart_width: cfg.viewport.width,
            show_chart_window: false,
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Embedding the chart in egui::Window");
            if ui.button("Open Chart Window").clicked() {
                self.show_chart_window = true;
            }
            ui.horizontal(|ui| {
                ui.label("Chart width:");
                ui.add(egui::Slider::new(&mut self.chart_width, 200.0..=900.0));
            });
            ui.separator();
            let selected = self.chart.state.selection.len();
            ui.label(format!("{selected} point(s) selected in the chart."));
            for point in self.chart.state.selection.iter() {
                ui.monospace(format!("#{} at ({}, {})", point.id, point.x, point.y));
            }
        });

        let height = self.chart.chart_panel.scales().viewport.height;
        self.chart.set_viewport(Viewport::new(self.chart_width, height));

        if self.show_chart_window {
            let mut open = true;
            egui::Window::new("Chart Window")
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.set_min_size(egui::vec2(820.0, 340.0));
                    self.chart.show_inside(ui);
                });
            if !open {
                self.show_chart_window = false;
            }
        }
    }
}

fn main() -> eframe::Result<()> {
    let app = match DemoApp::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to load bundled dataset: {e}");
            return Ok(());
        }
    };
    eframe::run_native(
        "Chart embedded window demo",
        NativeOptions::default(),
        Box::new(|cc| {
            // The selection cards use Phosphor icons.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
