//! Top-level entry point for running the chart as a native window.

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::point::Dataset;

use super::{ChartApp, ChartView};

/// Width reserved for the selection cards next to the chart.
const SIDE_PANEL_WIDTH: f32 = 260.0;

/// Launch the chart in a native window.
///
/// Builds a [`ChartView`] for `dataset`, opens a window sized to fit the
/// viewport plus the side panel, and enters the eframe event loop. The call
/// blocks until the window is closed.
pub fn run_chart(dataset: Dataset, mut cfg: ChartConfig) -> eframe::Result<()> {
    let view = ChartView::new(dataset, &cfg);
    let mut app = ChartApp::new(view);
    if let Some(headline) = cfg.headline.clone() {
        app = app.with_headline(headline);
    }

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        let w = cfg.viewport.width as f32 + 80.0 + SIDE_PANEL_WIDTH;
        let h = cfg.viewport.height as f32 + 140.0;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    tracing::info!(title = %title, "starting chart window");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            // The chart is drawn black on white; keep the surrounding UI light too.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = match usvg::Tree::from_data(&data, &opt) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::warn!("failed to parse {svg_path}: {e}");
            return None;
        }
    };
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
