//! Point records and the immutable, x-sorted dataset the chart is built from.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChartError;

/// Sample dataset compiled into the binary.
const BUNDLED_JSON: &str = include_str!("../../assets/data.json");

/// Stable identifier of a record, as found in the `id` field of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One record of the dataset.
///
/// Only `x` and `y` drive geometry. `target`, `prediction` and
/// `diagnosis_group_id` are opaque annotations shown on hover and in the
/// detail cards; they are kept as raw JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub target: Value,
    #[serde(default)]
    pub prediction: Value,
    #[serde(default, rename = "diagnosisGroupId")]
    pub diagnosis_group_id: Value,
}

impl Point {
    /// A bare point without annotations.
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: PointId(id),
            x,
            y,
            target: Value::Null,
            prediction: Value::Null,
            diagnosis_group_id: Value::Null,
        }
    }

    pub fn with_annotations(
        mut self,
        target: impl Into<Value>,
        prediction: impl Into<Value>,
        diagnosis_group_id: impl Into<Value>,
    ) -> Self {
        self.target = target.into();
        self.prediction = prediction.into();
        self.diagnosis_group_id = diagnosis_group_id.into();
        self
    }
}

/// Render an annotation value for display: strings without quotes, `null` as a dash.
pub fn annotation_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The points shown by the chart, sorted by `x` on construction.
///
/// Record ids are unique; detail cards are closed by id.
///
/// Hover lookup bisects over `x`, so ingestion sorts the records (stable, so
/// records sharing an `x` keep their input order). The dataset is never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    pub fn new(mut points: Vec<Point>) -> Result<Self, ChartError> {
        if let Some(bad) = points
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ChartError::NonFiniteCoordinate { id: bad.id });
        }
        let mut seen = HashSet::with_capacity(points.len());
        if let Some(dup) = points.iter().find(|p| !seen.insert(p.id)) {
            return Err(ChartError::DuplicateId { id: dup.id });
        }
        if !points.windows(2).all(|w| w[0].x <= w[1].x) {
            tracing::debug!(count = points.len(), "dataset not ordered by x, sorting");
            points.sort_by(|a, b| a.x.total_cmp(&b.x));
        }
        Ok(Self { points })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let points: Vec<Point> = serde_json::from_str(json)?;
        Self::new(points)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), points = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// The sample dataset shipped with the crate.
    pub fn bundled() -> Result<Self, ChartError> {
        Self::from_json_str(BUNDLED_JSON)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Index of the first point carrying `id`.
    pub fn position_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// `(min x, max x)`, or `None` for an empty dataset.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        // Sorted by x, so the extent is the first and last record.
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    pub fn y_max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
