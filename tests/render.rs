use std::time::Duration;

use egui::{Color32, Pos2};
use pickchart::data::loading::{LoadingGate, ManualClock};
use pickchart::data::scale::{ChartScales, Viewport};
use pickchart::render::{render_chart, ChartStyle, DrawCommand, RenderInput, SceneRecorder};
use pickchart::{ChartEvent, Dataset, Point, SelectionMatch, ViewState};

fn dataset() -> Dataset {
    Dataset::new(vec![
        Point::new(1, 1.0, 2.0),
        Point::new(2, 2.0, 5.0),
        Point::new(3, 3.0, 1.0),
    ])
    .unwrap()
}

fn ready_state() -> ViewState {
    ViewState::new(SelectionMatch::Coordinates, LoadingGate::ready())
}

fn draw(data: &Dataset, state: &ViewState, reveal: f32) -> SceneRecorder {
    let scales = ChartScales::from_dataset(data, Viewport::new(500.0, 250.0));
    let style = ChartStyle::default();
    let mut scene = SceneRecorder::new();
    render_chart(
        &mut scene,
        &RenderInput {
            dataset: data,
            state,
            scales: &scales,
            style: &style,
            reveal,
            spinner_phase: 0.0,
        },
    );
    scene
}

fn curve_polylines(scene: &SceneRecorder) -> Vec<Vec<Pos2>> {
    let width = ChartStyle::default().curve_width;
    scene
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polyline { points, width: w, .. } if *w == width => Some(points.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn one_marker_per_point_at_projected_position() {
    let data = dataset();
    let scene = draw(&data, &ready_state(), 1.0);
    let markers: Vec<_> = scene.filled_circles().collect();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].0, Pos2::new(0.0, 150.0));
    assert_eq!(markers[1].0, Pos2::new(250.0, 0.0));
    assert_eq!(markers[2].0, Pos2::new(500.0, 200.0));
    assert!(markers.iter().all(|m| m.1 == 3.5 && m.2 == Color32::BLUE));
}

#[test]
fn selected_marker_is_red() {
    let data = dataset();
    let mut state = ready_state();
    let mut hues = || 0.0;
    state.apply(&data, ChartEvent::Click(1), &mut hues);

    let scene = draw(&data, &state, 1.0);
    let colors: Vec<Color32> = scene.filled_circles().map(|m| m.2).collect();
    assert_eq!(colors, vec![Color32::BLUE, Color32::RED, Color32::BLUE]);
}

#[test]
fn nothing_but_axes_while_loading() {
    let data = dataset();
    let clock = ManualClock::default();
    let state = ViewState::new(
        SelectionMatch::Coordinates,
        LoadingGate::start(&clock, Duration::from_secs(3)),
    );
    let scene = draw(&data, &state, 1.0);
    assert_eq!(scene.filled_circles().count(), 0);
    assert_eq!(scene.dashed_lines().count(), 0);
    assert!(curve_polylines(&scene).is_empty());
    // Axis labels are drawn regardless.
    assert!(scene.texts().any(|t| t == "3"));
}

#[test]
fn x_axis_labels_are_one_based_positions() {
    let data = Dataset::bundled().unwrap();
    let scene = draw(&data, &ready_state(), 1.0);
    let texts: Vec<&str> = scene.texts().collect();
    for i in 1..=data.len() {
        assert!(texts.contains(&i.to_string().as_str()), "missing label {i}");
    }
}

#[test]
fn y_axis_labels_use_round_ticks() {
    let data = dataset();
    let scene = draw(&data, &ready_state(), 1.0);
    let texts: Vec<&str> = scene.texts().collect();
    for label in ["0", "1", "2", "3", "4", "5"] {
        assert!(texts.contains(&label));
    }
}

#[test]
fn crosshair_spans_viewport_from_focused_point() {
    let data = dataset();
    let mut state = ready_state();
    let mut hues = || 0.0;
    state.apply(&data, ChartEvent::PointerEnter(1), &mut hues);

    let scene = draw(&data, &state, 1.0);
    let lines: Vec<(Pos2, Pos2)> = scene.dashed_lines().collect();
    assert_eq!(
        lines,
        vec![
            (Pos2::new(250.0, 0.0), Pos2::new(250.0, 250.0)),
            (Pos2::new(0.0, 0.0), Pos2::new(500.0, 0.0)),
        ]
    );
    let texts: Vec<&str> = scene.texts().collect();
    for label in ["x: 2", "y: 5", "target: -", "prediction: -"] {
        assert!(texts.contains(&label), "missing {label}");
    }
    let hollow = scene
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { fill: None, .. }))
        .count();
    assert_eq!(hollow, 1);
}

#[test]
fn hidden_focus_draws_no_guides() {
    let data = dataset();
    let mut state = ready_state();
    let mut hues = || 0.0;
    state.apply(&data, ChartEvent::PointerEnter(0), &mut hues);
    state.apply(&data, ChartEvent::PointerLeave, &mut hues);

    let scene = draw(&data, &state, 1.0);
    assert_eq!(scene.dashed_lines().count(), 0);
}

#[test]
fn curve_reveal_grows_from_first_point() {
    let data = dataset();
    let state = ready_state();

    assert!(curve_polylines(&draw(&data, &state, 0.0)).is_empty());

    let full = curve_polylines(&draw(&data, &state, 1.0));
    assert_eq!(full.len(), 1);
    let curve = &full[0];
    assert_eq!(curve.first(), Some(&Pos2::new(0.0, 150.0)));
    assert_eq!(curve.last(), Some(&Pos2::new(500.0, 200.0)));

    let half = curve_polylines(&draw(&data, &state, 0.5));
    assert_eq!(half.len(), 1);
    assert_eq!(half[0].first(), Some(&Pos2::new(0.0, 150.0)));
    assert!(half[0].len() < curve.len());
}

#[test]
fn background_follows_color_change() {
    let data = dataset();
    let mut state = ready_state();
    let first = |scene: &SceneRecorder| match scene.commands.first() {
        Some(DrawCommand::Background { color, .. }) => Some(*color),
        _ => None,
    };
    assert_eq!(first(&draw(&data, &state, 1.0)), Some(Color32::WHITE));

    let mut hues = || 240.0;
    state.apply(&data, ChartEvent::ChangeColor, &mut hues);
    assert_eq!(first(&draw(&data, &state, 1.0)), Some(Color32::from_rgb(0, 0, 255)));
}

#[test]
fn empty_dataset_draws_only_axes() {
    let data = Dataset::default();
    let scene = draw(&data, &ready_state(), 1.0);
    assert_eq!(scene.filled_circles().count(), 0);
    assert!(curve_polylines(&scene).is_empty());
}
