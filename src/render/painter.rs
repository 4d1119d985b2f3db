use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::Surface;

const DASH_LENGTH: f32 = 3.0;
const GAP_LENGTH: f32 = 3.0;

/// [`Surface`] backed by an egui painter, offset so viewport `(0, 0)` lands on `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn at(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_background(&mut self, size: Vec2, color: Color32) {
        let rect = Rect::from_min_size(self.origin, size);
        self.painter.rect_filled(rect, CornerRadius::ZERO, color);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.at(*p)).collect();
        self.painter.add(Shape::line(points, Stroke::new(width, color)));
    }

    fn dashed_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let path = [self.at(from), self.at(to)];
        self.painter.extend(Shape::dashed_line(
            &path,
            Stroke::new(width, color),
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Option<Color32>, stroke: Option<(f32, Color32)>) {
        let stroke = stroke.map_or(Stroke::NONE, |(w, c)| Stroke::new(w, c));
        self.painter.circle(
            self.at(center),
            radius,
            fill.unwrap_or(Color32::TRANSPARENT),
            stroke,
        );
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.painter
            .text(self.at(pos), anchor, text, FontId::proportional(size), color);
    }
}
