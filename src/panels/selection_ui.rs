use egui::{Button, ScrollArea, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, X};

use super::panel_trait::{Panel, PanelState};
use crate::data::data::ChartData;
use crate::data::export::{default_file_name, save_selection_json};
use crate::data::point::{annotation_text, Point, PointId};
use crate::data::state::ChartEvent;

/// Detail cards for the selected points, each with a close control.
#[derive(Default)]
pub struct SelectionPanel {
    state: PanelState,
}

impl SelectionPanel {
    pub const SAVE_SELECTION_LABEL: &'static str = "Save selection...";
    pub const EMPTY_HINT: &'static str = "Click a marker to select it.";

    /// Text lines shown on a point's card.
    pub fn card_lines(point: &Point) -> [String; 5] {
        [
            format!("X: {}", point.x),
            format!("Y: {}", point.y),
            format!("Target: {}", annotation_text(&point.target)),
            format!("Prediction: {}", annotation_text(&point.prediction)),
            format!("DiagnosisGroupId: {}", annotation_text(&point.diagnosis_group_id)),
        ]
    }

    fn export(chart: &ChartData<'_>) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(default_file_name("selection", "json"))
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        if let Err(e) = save_selection_json(&path, &chart.state.selection) {
            tracing::error!("{e}");
        }
    }
}

impl Panel for SelectionPanel {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, chart: &mut ChartData<'_>) {
        let count = chart.state.selection.len();
        ui.heading(format!("Selected ({count})"));

        let save = Button::new(format!("{FLOPPY_DISK} {}", Self::SAVE_SELECTION_LABEL));
        if ui.add_enabled(count > 0, save).clicked() {
            Self::export(chart);
        }
        ui.separator();

        if count == 0 {
            ui.weak(Self::EMPTY_HINT);
            return;
        }

        let mut remove: Option<PointId> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for point in chart.state.selection.iter() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal_top(|ui| {
                        ui.vertical(|ui| {
                            for line in Self::card_lines(point) {
                                ui.label(line);
                            }
                        });
                        if ui.small_button(X).on_hover_text("Remove").clicked() {
                            remove = Some(point.id);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

        if let Some(id) = remove {
            chart.apply(ChartEvent::Remove(id));
        }
    }
}
