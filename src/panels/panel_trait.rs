use egui::Ui;

use crate::data::data::ChartData;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, _ui: &mut Ui, _chart: &mut ChartData<'_>) {}
}
