//! ChartData: a view struct combining the dataset, view state and time/hue sources.

use super::color::HueSource;
use super::loading::Clock;
use super::point::Dataset;
use super::state::{ChartEvent, ViewState};

/// Borrowed bundle handed to every panel for one frame.
pub struct ChartData<'a> {
    pub dataset: &'a Dataset,
    pub state: &'a mut ViewState,
    pub hues: &'a mut dyn HueSource,
    pub clock: &'a dyn Clock,
}

impl<'a> ChartData<'a> {
    /// Apply an event to the view state. Returns `true` if a repaint is needed.
    pub fn apply(&mut self, event: ChartEvent) -> bool {
        self.state.apply(self.dataset, event, &mut *self.hues)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
