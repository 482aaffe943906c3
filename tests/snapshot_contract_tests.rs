use linechart_rs::api::{
    ChartView, ChartViewConfig, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot,
    ViewSnapshotJsonContractV1, gradients,
};
use linechart_rs::core::Viewport;
use linechart_rs::interaction::DragPhase;
use linechart_rs::render::NullRenderer;

fn sample_view() -> ChartView<NullRenderer> {
    let mut view = ChartView::with_series(
        NullRenderer::default(),
        ChartViewConfig::new(Viewport::new(300, 360))
            .with_title("Revenue")
            .with_legend("Q3")
            .with_value_specifier("$%.2f"),
        vec![
            (vec![1.0, 2.0, 3.0], "a".to_owned(), gradients::ORANGE),
            (vec![4.0, 5.0, 6.0], "b".to_owned(), gradients::BLUE),
        ],
    )
    .expect("view construction should succeed");
    view.set_metadata("source", "unit-test");
    view
}

#[test]
fn snapshot_captures_configuration_and_dataset() {
    let snapshot = sample_view().snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(300, 360));
    assert_eq!(snapshot.title.as_deref(), Some("Revenue"));
    assert_eq!(snapshot.legend.as_deref(), Some("Q3"));
    assert_eq!(snapshot.value_specifier, "$%.2f");
    assert_eq!(snapshot.bounds.min, 1.0);
    assert_eq!(snapshot.bounds.max, 6.0);
    assert_eq!(snapshot.series.len(), 2);
    assert_eq!(snapshot.series[0].label, "a");
    assert_eq!(snapshot.series[1].points, vec![4.0, 5.0, 6.0]);
    assert_eq!(snapshot.metadata.get("source").map(String::as_str), Some("unit-test"));
}

#[test]
fn snapshot_captures_the_drag_state() {
    let mut view = sample_view();
    view.drag_moved(165.0, 120.0).expect("drag should succeed");

    let dragging = view.snapshot();
    assert_eq!(dragging.drag_phase, DragPhase::Dragging);
    assert_eq!(dragging.drag_location, (165.0, 120.0));
    assert_eq!(dragging.indicator_location, (135.0, 32.0));
    assert_eq!(dragging.magnifier_opacity, 1.0);
    assert!(dragging.grid_lines_hidden);
    assert_eq!(dragging.selected_values, vec![2.0, 5.0]);

    view.drag_ended();
    let idle = view.snapshot();
    assert_eq!(idle.drag_phase, DragPhase::Idle);
    assert_eq!(idle.magnifier_opacity, 0.0);
    assert_eq!(idle.selected_values, vec![2.0, 5.0]);
}

#[test]
fn snapshots_of_identical_state_are_equal() {
    assert_eq!(sample_view().snapshot(), sample_view().snapshot());
}

#[test]
fn contract_v1_round_trips_through_json() {
    let mut view = sample_view();
    view.drag_moved(165.0, 120.0).expect("drag should succeed");

    let snapshot = view.snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialization should succeed");
    let restored = ViewSnapshot::from_json_compat_str(&json).expect("parse should succeed");

    assert_eq!(restored, snapshot);
}

#[test]
fn contract_json_carries_the_schema_version() {
    let json = sample_view()
        .snapshot_json_contract_v1_pretty()
        .expect("serialization should succeed");

    let payload: serde_json::Value = serde_json::from_str(&json).expect("json should parse");
    assert_eq!(
        payload["schema_version"],
        serde_json::Value::from(VIEW_SNAPSHOT_JSON_SCHEMA_V1)
    );
    assert!(payload["snapshot"]["series"].is_array());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = sample_view().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialization should succeed");

    let restored = ViewSnapshot::from_json_compat_str(&bare).expect("parse should succeed");
    assert_eq!(restored, snapshot);
}

#[test]
fn unknown_schema_versions_are_rejected() {
    let payload = ViewSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: sample_view().snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("serialization should succeed");

    assert!(ViewSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn garbage_input_is_rejected() {
    assert!(ViewSnapshot::from_json_compat_str("not json at all").is_err());
    assert!(ViewSnapshot::from_json_compat_str("{}").is_err());
}
