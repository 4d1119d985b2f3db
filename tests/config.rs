use std::io::Write;
use std::time::Duration;

use pickchart::data::scale::MAX_TICK_COUNT;
use pickchart::{ChartConfig, ChartError, ChartSettings, SelectionMatch};

fn settings_file(suffix: &str, text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn defaults() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.viewport.width, 500.0);
    assert_eq!(cfg.viewport.height, 250.0);
    assert_eq!(cfg.loading_delay, Duration::from_secs(3));
    assert_eq!(cfg.reveal_duration, Duration::from_secs(1));
    assert_eq!(cfg.selection_match, SelectionMatch::Coordinates);
    assert_eq!(cfg.style.marker_radius, 3.5);
    assert!(cfg.headline.is_none());
}

#[test]
fn settings_file_overrides_present_fields() {
    let file = settings_file(
        ".json",
        r#"{
            "title": "Biopsy results",
            "headline": "Cohort A",
            "width": 640,
            "loading_delay_ms": 250,
            "y_ticks": 8,
            "selection_match": "id"
        }"#,
    );
    let mut cfg = ChartConfig::default();
    ChartSettings::from_file(file.path())
        .unwrap()
        .apply_to(&mut cfg)
        .unwrap();

    assert_eq!(cfg.title, "Biopsy results");
    assert_eq!(cfg.headline.as_deref(), Some("Cohort A"));
    assert_eq!(cfg.viewport.width, 640.0);
    assert_eq!(cfg.viewport.height, 250.0);
    assert_eq!(cfg.loading_delay, Duration::from_millis(250));
    assert_eq!(cfg.reveal_duration, Duration::from_secs(1));
    assert_eq!(cfg.style.y_ticks, 8);
    assert_eq!(cfg.selection_match, SelectionMatch::Id);
}

#[test]
fn empty_settings_change_nothing() {
    let mut cfg = ChartConfig::default();
    ChartSettings::default().apply_to(&mut cfg).unwrap();
    assert_eq!(cfg.title, ChartConfig::default().title);
    assert_eq!(cfg.viewport, ChartConfig::default().viewport);
}

#[test]
fn non_positive_sizes_are_rejected() {
    let mut cfg = ChartConfig::default();
    let settings = ChartSettings {
        width: Some(0.0),
        ..ChartSettings::default()
    };
    let err = settings.apply_to(&mut cfg).unwrap_err();
    assert!(matches!(err, ChartError::InvalidSetting { field: "width", .. }));

    let settings = ChartSettings {
        marker_radius: Some(-1.0),
        ..ChartSettings::default()
    };
    let err = settings.apply_to(&mut cfg).unwrap_err();
    assert!(matches!(err, ChartError::InvalidSetting { field: "marker_radius", .. }));
}

#[test]
fn unknown_fields_are_rejected() {
    let file = settings_file(".json", r#"{ "widht": 640 }"#);
    let err = ChartSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ChartError::Settings { .. }));
}

#[test]
fn yaml_settings_by_extension() {
    let file = settings_file(".yml", "height: 320\nselection_match: id\nreveal_duration_ms: 0\n");
    let mut cfg = ChartConfig::default();
    ChartSettings::from_file(file.path())
        .unwrap()
        .apply_to(&mut cfg)
        .unwrap();
    assert_eq!(cfg.viewport.height, 320.0);
    assert_eq!(cfg.selection_match, SelectionMatch::Id);
    assert_eq!(cfg.reveal_duration, Duration::ZERO);
}

#[test]
fn malformed_yaml_is_reported() {
    let file = settings_file(".yaml", "width: [1, 2\n");
    let err = ChartSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ChartError::SettingsYaml { .. }));
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChartSettings::from_file(&dir.path().join("settings.json")).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }));
}

#[test]
fn y_tick_count_must_be_bounded() {
    for bad in [0, MAX_TICK_COUNT + 1, usize::MAX] {
        let mut cfg = ChartConfig::default();
        let settings = ChartSettings {
            y_ticks: Some(bad),
            ..ChartSettings::default()
        };
        let err = settings.apply_to(&mut cfg).unwrap_err();
        assert!(matches!(err, ChartError::InvalidSetting { field: "y_ticks", .. }));
        assert_eq!(cfg.style.y_ticks, 5);
    }

    let mut cfg = ChartConfig::default();
    ChartSettings {
        y_ticks: Some(MAX_TICK_COUNT),
        ..ChartSettings::default()
    }
    .apply_to(&mut cfg)
    .unwrap();
    assert_eq!(cfg.style.y_ticks, MAX_TICK_COUNT);
}

#[test]
fn cloned_config_keeps_every_field() {
    let cfg = ChartConfig {
        headline: Some("Cohort A".to_string()),
        loading_delay: Duration::from_millis(10),
        selection_match: SelectionMatch::Id,
        ..ChartConfig::default()
    };
    let copy = cfg.clone();
    assert_eq!(copy.headline, cfg.headline);
    assert_eq!(copy.loading_delay, cfg.loading_delay);
    assert_eq!(copy.selection_match, SelectionMatch::Id);
    assert_eq!(copy.style, cfg.style);
}
