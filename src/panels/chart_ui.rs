use std::f32::consts::TAU;
use std::time::Duration;

use egui::{CursorIcon, Pos2, Rect, Sense, Ui, Vec2, ViewportCommand};
use egui_phosphor::regular::{CAMERA, PALETTE};

use super::panel_trait::{Panel, PanelState};
use crate::data::data::ChartData;
use crate::data::export::{default_file_name, save_chart_png};
use crate::data::nearest::marker_at;
use crate::data::point::Dataset;
use crate::data::scale::{ChartScales, Viewport};
use crate::data::state::ChartEvent;
use crate::render::reveal::StrokeReveal;
use crate::render::{render_chart, ChartStyle, PainterSurface, RenderInput};

// Room around the viewport for axis ticks and labels.
const MARGIN_LEFT: f32 = 40.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_BOTTOM: f32 = 28.0;

/// Extra pixels around a marker that still count as hovering it.
const HIT_SLOP: f64 = 2.0;

/// The chart itself: axes, curve, markers, crosshair and the color button.
pub struct ChartPanel {
    state: PanelState,
    scales: ChartScales,
    style: ChartStyle,
    reveal: StrokeReveal,
    hovered: Option<usize>,
    /// Screen rect of the last drawn chart area, used to crop screenshots.
    chart_rect: Option<Rect>,
    screenshot_pending: bool,
}

impl ChartPanel {
    pub const CHANGE_COLOR_LABEL: &'static str = "CHANGE COLOR";
    pub const SAVE_PNG_LABEL: &'static str = "Save PNG";

    pub fn new(dataset: &Dataset, viewport: Viewport, style: ChartStyle, reveal_duration: Duration) -> Self {
        Self {
            state: PanelState::default(),
            scales: ChartScales::from_dataset(dataset, viewport),
            style,
            reveal: StrokeReveal::new(reveal_duration),
            hovered: None,
            chart_rect: None,
            screenshot_pending: false,
        }
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Resize the plotting area; scales are rebuilt for the new viewport.
    pub fn set_viewport(&mut self, dataset: &Dataset, viewport: Viewport) {
        if viewport != self.scales.viewport {
            self.scales = ChartScales::from_dataset(dataset, viewport);
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Turn the marker under the pointer (if any) into enter/move/leave events.
    ///
    /// Returns `true` when the view state changed.
    pub fn track_hover(&mut self, chart: &mut ChartData<'_>, hovered: Option<usize>) -> bool {
        let changed = match (self.hovered, hovered) {
            (None, None) => false,
            (None, Some(i)) => chart.apply(ChartEvent::PointerEnter(i)),
            (Some(prev), Some(i)) if prev == i => false,
            (Some(_), Some(i)) => match chart.dataset.get(i) {
                Some(p) => chart.apply(ChartEvent::PointerMove(p.x)),
                None => false,
            },
            (Some(_), None) => chart.apply(ChartEvent::PointerLeave),
        };
        self.hovered = hovered;
        changed
    }

    /// Advance the loading gate and start the curve reveal once it opens.
    pub fn poll_loading(&mut self, chart: &mut ChartData<'_>, now: Duration) {
        chart.state.poll_loading(chart.clock);
        if !chart.is_loading() && !self.reveal.is_started() {
            self.reveal.start(now);
        }
    }

    pub fn reveal_progress(&self, now: Duration) -> f32 {
        self.reveal.progress(now)
    }

    fn render_chart_area(&mut self, ui: &mut Ui, chart: &mut ChartData<'_>, now: Duration) {
        let vp = self.scales.viewport;
        let size = Vec2::new(
            vp.width as f32 + MARGIN_LEFT + MARGIN_RIGHT,
            vp.height as f32 + MARGIN_TOP + MARGIN_BOTTOM,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.chart_rect = Some(response.rect);
        let origin = response.rect.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP);
        let local = |pos: Pos2| [(pos.x - origin.x) as f64, (pos.y - origin.y) as f64];

        let hit = if chart.is_loading() {
            None
        } else {
            response.hover_pos().and_then(|pos| {
                marker_at(
                    chart.dataset.points(),
                    &self.scales,
                    local(pos),
                    self.style.marker_radius as f64 + HIT_SLOP,
                )
            })
        };
        if self.track_hover(chart, hit) {
            ui.ctx().request_repaint();
        }
        if hit.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            if response.clicked() {
                if let Some(i) = hit {
                    chart.apply(ChartEvent::Click(i));
                }
            }
        }

        let spinner_phase = (ui.input(|i| i.time) as f32 * 4.0) % TAU;
        let input = RenderInput {
            dataset: chart.dataset,
            state: &*chart.state,
            scales: &self.scales,
            style: &self.style,
            reveal: self.reveal.progress(now),
            spinner_phase,
        };
        render_chart(&mut PainterSurface::new(&painter, origin), &input);

        // Spinner and reveal animate every frame until done.
        if chart.is_loading() || self.reveal.is_running(now) {
            ui.ctx().request_repaint();
        }
    }

    /// Pick up the screenshot requested by "Save PNG", crop it to the chart and save it.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if !self.screenshot_pending {
            return;
        }
        let Some(image) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        }) else {
            return;
        };
        self.screenshot_pending = false;

        let cropped = match self.chart_rect {
            Some(rect) => image.region(&rect, Some(ctx.pixels_per_point())),
            None => (*image).clone(),
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(default_file_name("chart", "png"))
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        if let Err(e) = save_chart_png(&path, &cropped) {
            tracing::error!("{e}");
        }
    }
}

impl Panel for ChartPanel {
    fn name(&self) -> &'static str {
        "Chart"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, chart: &mut ChartData<'_>) {
        self.handle_screenshot_result(ui.ctx());

        let now = chart.clock.now();
        self.poll_loading(chart, now);
        self.render_chart_area(ui, chart, now);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .button(format!("{PALETTE} {}", Self::CHANGE_COLOR_LABEL))
                .on_hover_text("Pick a random background hue")
                .clicked()
            {
                chart.apply(ChartEvent::ChangeColor);
            }
            if ui
                .button(format!("{CAMERA} {}", Self::SAVE_PNG_LABEL))
                .on_hover_text("Save the chart as an image")
                .clicked()
            {
                self.screenshot_pending = true;
                ui.ctx()
                    .send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
            }
        });
    }
}
