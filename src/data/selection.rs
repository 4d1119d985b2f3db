//! Click-toggled selection of points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::point::{Point, PointId};

/// How a clicked point is matched against the current selection.
///
/// `Coordinates` compares the `(x, y)` pair, so two distinct records sharing a
/// position toggle together. `Id` compares the record id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMatch {
    #[default]
    Coordinates,
    Id,
}

impl SelectionMatch {
    pub fn matches(self, a: &Point, b: &Point) -> bool {
        match self {
            SelectionMatch::Coordinates => a.x == b.x && a.y == b.y,
            SelectionMatch::Id => a.id == b.id,
        }
    }
}

impl fmt::Display for SelectionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMatch::Coordinates => write!(f, "coordinates"),
            SelectionMatch::Id => write!(f, "id"),
        }
    }
}

impl FromStr for SelectionMatch {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coordinates" | "coords" | "xy" => Ok(SelectionMatch::Coordinates),
            "id" => Ok(SelectionMatch::Id),
            other => Err(format!("unknown selection match `{other}`")),
        }
    }
}

/// Points selected by the user, in click order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<Point>,
    matching: SelectionMatch,
}

impl Selection {
    pub fn new(matching: SelectionMatch) -> Self {
        Self {
            items: Vec::new(),
            matching,
        }
    }

    pub fn matching(&self) -> SelectionMatch {
        self.matching
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.items.iter().any(|item| self.matching.matches(item, point))
    }

    /// Add `point` if nothing in the selection matches it, otherwise remove
    /// every matching entry. Returns `true` when the point ends up selected.
    pub fn toggle(&mut self, point: &Point) -> bool {
        if self.contains(point) {
            let matching = self.matching;
            self.items.retain(|item| !matching.matches(item, point));
            false
        } else {
            self.items.push(point.clone());
            true
        }
    }

    /// Drop every entry carrying `id`. Returns how many were removed.
    pub fn remove_by_id(&mut self, id: PointId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    pub fn items(&self) -> &[Point] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
