use std::f32::consts::TAU;

use egui::{Align2, Color32, Pos2, Vec2};

use crate::data::point::{annotation_text, Dataset};
use crate::data::scale::ChartScales;
use crate::data::state::ViewState;

use super::cardinal::curve_through;
use super::reveal::visible_prefix;
use super::Surface;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const GUIDE_WIDTH: f32 = 1.0;
const SPINNER_RADIUS: f32 = 12.0;

/// Visual parameters of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub marker_radius: f32,
    pub focus_radius: f32,
    pub curve_width: f32,
    /// Approximate number of y-axis ticks.
    pub y_ticks: usize,
    /// Flattening resolution of each curve span.
    pub curve_steps: usize,
    pub font_size: f32,
    pub axis_color: Color32,
    pub curve_color: Color32,
    pub marker_color: Color32,
    pub selected_color: Color32,
    pub guide_color: Color32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            marker_radius: 3.5,
            focus_radius: 4.0,
            curve_width: 1.5,
            y_ticks: 5,
            curve_steps: 16,
            font_size: 10.0,
            axis_color: Color32::BLACK,
            curve_color: Color32::BLACK,
            marker_color: Color32::BLUE,
            selected_color: Color32::RED,
            guide_color: Color32::from_black_alpha(128),
        }
    }
}

/// Inputs of one frame.
pub struct RenderInput<'a> {
    pub dataset: &'a Dataset,
    pub state: &'a ViewState,
    pub scales: &'a ChartScales,
    pub style: &'a ChartStyle,
    /// Fraction of the curve length revealed so far, `0..=1`.
    pub reveal: f32,
    /// Rotation of the loading spinner in radians.
    pub spinner_phase: f32,
}

/// Draw the whole chart.
///
/// Order: background, x-axis, y-axis, curve, markers, crosshair. While the
/// view is loading, curve, markers and crosshair are replaced by a spinner.
pub fn render_chart(surface: &mut dyn Surface, input: &RenderInput<'_>) {
    let vp = input.scales.viewport;
    let size = Vec2::new(vp.width as f32, vp.height as f32);

    surface.fill_background(size, input.state.background.to_color32());
    draw_x_axis(surface, input, size);
    draw_y_axis(surface, input, size);

    if input.state.is_loading() {
        draw_spinner(surface, input, size);
        return;
    }

    let projected: Vec<Pos2> = input
        .dataset
        .iter()
        .map(|p| to_pos(input.scales.project(p)))
        .collect();

    draw_curve(surface, input, &projected);
    draw_markers(surface, input, &projected);
    draw_crosshair(surface, input, &projected, size);
}

fn to_pos(p: [f64; 2]) -> Pos2 {
    Pos2::new(p[0] as f32, p[1] as f32)
}

fn draw_x_axis(surface: &mut dyn Surface, input: &RenderInput<'_>, size: Vec2) {
    let style = input.style;
    let h = size.y;
    surface.polyline(
        &[Pos2::new(0.0, h), Pos2::new(size.x, h)],
        1.0,
        style.axis_color,
    );
    // One tick per point, labelled with its 1-based position.
    for (i, p) in input.dataset.iter().enumerate() {
        let x = input.scales.x.apply(p.x) as f32;
        surface.polyline(
            &[Pos2::new(x, h), Pos2::new(x, h + TICK_SIZE)],
            1.0,
            style.axis_color,
        );
        surface.text(
            Pos2::new(x, h + TICK_SIZE + TICK_PADDING),
            Align2::CENTER_TOP,
            &(i + 1).to_string(),
            style.font_size,
            style.axis_color,
        );
    }
}

fn draw_y_axis(surface: &mut dyn Surface, input: &RenderInput<'_>, size: Vec2) {
    let style = input.style;
    surface.polyline(
        &[Pos2::new(0.0, 0.0), Pos2::new(0.0, size.y)],
        1.0,
        style.axis_color,
    );
    for value in input.scales.y.ticks(style.y_ticks) {
        let y = input.scales.y.apply(value) as f32;
        surface.polyline(
            &[Pos2::new(-TICK_SIZE, y), Pos2::new(0.0, y)],
            1.0,
            style.axis_color,
        );
        surface.text(
            Pos2::new(-(TICK_SIZE + TICK_PADDING), y),
            Align2::RIGHT_CENTER,
            &value.to_string(),
            style.font_size,
            style.axis_color,
        );
    }
}

fn draw_curve(surface: &mut dyn Surface, input: &RenderInput<'_>, projected: &[Pos2]) {
    let curve = curve_through(projected, 0.0, input.style.curve_steps);
    let visible = visible_prefix(&curve, input.reveal);
    if visible.len() >= 2 {
        surface.polyline(&visible, input.style.curve_width, input.style.curve_color);
    }
}

fn draw_markers(surface: &mut dyn Surface, input: &RenderInput<'_>, projected: &[Pos2]) {
    let style = input.style;
    for (p, center) in input.dataset.iter().zip(projected) {
        let color = if input.state.selection.contains(p) {
            style.selected_color
        } else {
            style.marker_color
        };
        surface.circle(*center, style.marker_radius, Some(color), None);
    }
}

fn draw_crosshair(
    surface: &mut dyn Surface,
    input: &RenderInput<'_>,
    projected: &[Pos2],
    size: Vec2,
) {
    let Some(index) = input.state.focus.shown_at() else {
        return;
    };
    let (Some(point), Some(&center)) = (input.dataset.get(index), projected.get(index)) else {
        return;
    };
    let style = input.style;

    surface.dashed_line(center, Pos2::new(center.x, size.y), GUIDE_WIDTH, style.guide_color);
    surface.dashed_line(
        Pos2::new(0.0, center.y),
        Pos2::new(size.x, center.y),
        GUIDE_WIDTH,
        style.guide_color,
    );
    surface.circle(center, style.focus_radius, None, Some((1.0, style.axis_color)));

    // Two lines above the point, two below it.
    let fs = style.font_size;
    let labels = [
        (-1.6 * fs, format!("x: {}", point.x)),
        (-0.6 * fs, format!("y: {}", point.y)),
        (1.0 * fs, format!("target: {}", annotation_text(&point.target))),
        (2.0 * fs, format!("prediction: {}", annotation_text(&point.prediction))),
    ];
    for (dy, text) in labels {
        surface.text(
            Pos2::new(center.x + 8.0, center.y + dy),
            Align2::LEFT_CENTER,
            &text,
            fs,
            style.axis_color,
        );
    }
}

fn draw_spinner(surface: &mut dyn Surface, input: &RenderInput<'_>, size: Vec2) {
    let center = Pos2::new(size.x / 2.0, size.y / 2.0);
    let steps = 24;
    let sweep = 0.75 * TAU;
    let arc: Vec<Pos2> = (0..=steps)
        .map(|k| {
            let a = input.spinner_phase + sweep * k as f32 / steps as f32;
            center + SPINNER_RADIUS * Vec2::angled(a)
        })
        .collect();
    surface.polyline(&arc, 2.0, input.style.curve_color);
}
