//! Error type shared by dataset loading, configuration and export.

use std::path::PathBuf;

use crate::data::point::PointId;

/// Everything that can go wrong outside the UI loop.
///
/// UI-side failures (e.g. a selection export triggered from a button) are
/// logged and swallowed by the panels; they never abort the event loop.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: PointId },

    #[error("point id {id} appears more than once")]
    DuplicateId { id: PointId },

    #[error("invalid settings in {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    SettingsYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("setting `{field}` is out of range: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("failed to write selection to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save image to {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
