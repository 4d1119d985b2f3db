//! Mutable view state and the events that change it.

use super::color::{Background, Hsl, HueSource};
use super::loading::{Clock, LoadPhase, LoadingGate};
use super::nearest::nearest_index;
use super::point::{Dataset, PointId};
use super::selection::{Selection, SelectionMatch};

/// User interaction with the chart.
///
/// Pointer events carry dataset indices (or a data-space x position) resolved
/// by the chart panel's hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// Pointer entered the marker at this index.
    PointerEnter(usize),
    /// Pointer moved to this data-space x position.
    PointerMove(f64),
    /// Pointer left all markers.
    PointerLeave,
    /// Marker at this index was clicked.
    Click(usize),
    /// Close control of a detail card.
    Remove(PointId),
    ChangeColor,
}

/// Crosshair overlay: hidden by default, positioned on the nearest point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub visible: bool,
    pub index: Option<usize>,
}

impl Focus {
    /// Index to draw the crosshair at, if it is currently shown.
    pub fn shown_at(&self) -> Option<usize> {
        if self.visible {
            self.index
        } else {
            None
        }
    }
}

/// Everything the renderer needs besides the dataset and the scales.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub background: Background,
    pub selection: Selection,
    pub focus: Focus,
    loading: LoadingGate,
}

impl ViewState {
    pub fn new(matching: SelectionMatch, loading: LoadingGate) -> Self {
        Self {
            background: Background::Initial,
            selection: Selection::new(matching),
            focus: Focus::default(),
            loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading(&self) -> &LoadingGate {
        &self.loading
    }

    pub fn poll_loading(&mut self, clock: &dyn Clock) -> LoadPhase {
        self.loading.poll(clock)
    }

    pub fn cancel_loading(&mut self) {
        self.loading.cancel();
    }

    /// Apply one event. Returns `true` if anything visible changed.
    ///
    /// Pointer and click events are ignored while loading: markers are not
    /// drawn yet, so there is nothing to hover or click.
    pub fn apply(
        &mut self,
        dataset: &Dataset,
        event: ChartEvent,
        hues: &mut dyn HueSource,
    ) -> bool {
        match event {
            ChartEvent::PointerEnter(index) => {
                let Some(point) = self.interactive_point(dataset, index) else {
                    return false;
                };
                let before = self.focus;
                self.focus.visible = true;
                self.focus.index = nearest_index(dataset.points(), point.x);
                self.focus != before
            }
            ChartEvent::PointerMove(x) => {
                if self.is_loading() {
                    return false;
                }
                let before = self.focus.index;
                self.focus.index = nearest_index(dataset.points(), x);
                self.focus.index != before
            }
            ChartEvent::PointerLeave => {
                let was_visible = self.focus.visible;
                self.focus.visible = false;
                was_visible
            }
            ChartEvent::Click(index) => {
                let Some(point) = self.interactive_point(dataset, index) else {
                    return false;
                };
                let selected = self.selection.toggle(point);
                tracing::debug!(
                    id = %point.id,
                    selected,
                    count = self.selection.len(),
                    "selection toggled"
                );
                true
            }
            ChartEvent::Remove(id) => {
                let removed = self.selection.remove_by_id(id);
                if removed > 0 {
                    tracing::debug!(%id, count = self.selection.len(), "selection entry removed");
                }
                removed > 0
            }
            ChartEvent::ChangeColor => {
                let hsl = Hsl::vivid(hues.next_hue());
                tracing::debug!(background = %hsl, "background changed");
                self.background = Background::Hsl(hsl);
                true
            }
        }
    }

    fn interactive_point<'a>(
        &self,
        dataset: &'a Dataset,
        index: usize,
    ) -> Option<&'a super::point::Point> {
        if self.is_loading() {
            return None;
        }
        dataset.get(index)
    }
}
