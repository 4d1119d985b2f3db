pub mod chart_ui;
pub mod panel_trait;
pub mod selection_ui;

pub use chart_ui::ChartPanel;
pub use panel_trait::{Panel, PanelState};
pub use selection_ui::SelectionPanel;
