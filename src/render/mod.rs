//! Chart rendering onto an abstract drawing surface.
//!
//! [`render_chart`] is a pure function of dataset, view state, scales and
//! animation progress. It issues primitives through the [`Surface`] trait;
//! [`PainterSurface`] forwards them to an `egui::Painter`, [`SceneRecorder`]
//! keeps them as a list of [`DrawCommand`]s for inspection.

pub mod cardinal;
mod chart;
mod painter;
pub mod reveal;

pub use chart::{render_chart, ChartStyle, RenderInput};
pub use painter::PainterSurface;

use egui::{Align2, Color32, Pos2, Vec2};

/// Drawing primitives consumed by the renderer.
///
/// All coordinates are viewport-local pixels: `(0, 0)` is the top-left corner
/// of the plotting area. Axis labels may fall outside of it.
pub trait Surface {
    fn fill_background(&mut self, size: Vec2, color: Color32);
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);
    fn dashed_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn circle(&mut self, center: Pos2, radius: f32, fill: Option<Color32>, stroke: Option<(f32, Color32)>);
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        size: Vec2,
        color: Color32,
    },
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    DashedLine {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Option<Color32>,
        stroke: Option<(f32, Color32)>,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Surface that records every primitive in draw order.
#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    pub commands: Vec<DrawCommand>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled circles, i.e. the data markers.
    pub fn filled_circles(&self) -> impl Iterator<Item = (Pos2, f32, Color32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill: Some(fill),
                ..
            } => Some((*center, *radius, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn dashed_lines(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::DashedLine { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Surface for SceneRecorder {
    fn fill_background(&mut self, size: Vec2, color: Color32) {
        self.commands.push(DrawCommand::Background { size, color });
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn dashed_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            width,
            color,
        });
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Option<Color32>, stroke: Option<(f32, Color32)>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }
}
