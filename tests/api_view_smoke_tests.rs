use linechart_rs::api::{ChartStyle, ChartView, ChartViewConfig, ColorScheme, gradients, palette};
use linechart_rs::core::{ChartSeries, Viewport};
use linechart_rs::error::ChartError;
use linechart_rs::render::{Color, NullRenderer};

fn config() -> ChartViewConfig {
    ChartViewConfig::new(Viewport::new(300, 360))
}

fn two_series_view() -> ChartView<NullRenderer> {
    ChartView::with_series(
        NullRenderer::default(),
        config(),
        vec![
            (vec![1.0, 2.0, 3.0], "a".to_owned(), gradients::ORANGE),
            (vec![4.0, 5.0, 6.0], "b".to_owned(), gradients::BLUE),
        ],
    )
    .expect("view construction should succeed")
}

#[test]
fn empty_view_constructs_and_renders() {
    let mut view =
        ChartView::new(NullRenderer::default(), config()).expect("view construction should succeed");

    assert!(view.dataset().is_empty());
    view.render(ColorScheme::Light).expect("render should succeed");
}

#[test]
fn zero_size_viewport_is_rejected() {
    let result = ChartView::new(
        NullRenderer::default(),
        ChartViewConfig::new(Viewport::new(0, 360)),
    );
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport { width: 0, height: 360 })
    ));
}

#[test]
fn viewport_narrower_than_the_label_inset_is_rejected() {
    let result = ChartView::new(
        NullRenderer::default(),
        ChartViewConfig::new(Viewport::new(20, 360)),
    );
    assert!(result.is_err());
}

#[test]
fn malformed_value_specifier_is_rejected_at_construction() {
    let result = ChartView::new(
        NullRenderer::default(),
        config().with_value_specifier("no conversion here"),
    );
    assert!(matches!(result, Err(ChartError::InvalidValueFormat(_))));
}

#[test]
fn invalid_style_color_is_rejected_at_construction() {
    let mut style = ChartStyle::default();
    style.accent_color = Color::rgb(2.0, 0.0, 0.0);

    let result = ChartView::new(NullRenderer::default(), config().with_style(style));
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn with_series_preserves_dataset_order() {
    let view = two_series_view();

    let labels: Vec<&str> = view.dataset().iter().map(ChartSeries::label).collect();
    assert_eq!(labels, vec!["a", "b"]);

    let second = view.dataset().by_label("b").expect("label b should exist");
    assert_eq!(second.points(), &[4.0, 5.0, 6.0]);
}

#[test]
fn push_series_appends_to_the_dataset() {
    let mut view = two_series_view();
    view.push_series(ChartSeries::new(vec![7.0], "c", gradients::GREEN));

    assert_eq!(view.dataset().len(), 3);
    assert!(view.dataset().by_label("c").is_some());
}

#[test]
fn global_bounds_follow_the_dataset() {
    let view = two_series_view();
    let bounds = view.global_bounds();

    assert_eq!(bounds.min, 1.0);
    assert_eq!(bounds.max, 6.0);
}

#[test]
fn dark_scheme_falls_back_to_the_bundled_dark_style() {
    let view = two_series_view();

    assert_eq!(view.style_for(ColorScheme::Light), ChartStyle::default());
    assert_eq!(view.style_for(ColorScheme::Dark), ChartStyle::dark_default());
}

#[test]
fn explicit_dark_style_takes_precedence() {
    let mut dark = ChartStyle::dark_default();
    dark.accent_color = palette::PINK;

    let view = ChartView::new(NullRenderer::default(), config().with_dark_style(dark))
        .expect("view construction should succeed");

    assert_eq!(view.style_for(ColorScheme::Dark).accent_color, palette::PINK);
}

#[test]
fn set_viewport_resizes_the_plot_area() {
    let mut view = two_series_view();
    view.set_viewport(Viewport::new(600, 360))
        .expect("resize should succeed");

    assert_eq!(view.viewport(), Viewport::new(600, 360));
    let area = view.plot_area().expect("plot area should be valid");
    assert_eq!(area.width, 600.0);
}

#[test]
fn set_viewport_rejects_sizes_that_cannot_host_the_plot() {
    let mut view = two_series_view();

    assert!(view.set_viewport(Viewport::new(0, 360)).is_err());
    assert!(view.set_viewport(Viewport::new(10, 360)).is_err());
    assert_eq!(view.viewport(), Viewport::new(300, 360));
}

#[test]
fn touch_map_reflects_the_current_geometry() {
    let mut view = two_series_view();

    let map = view.touch_map().expect("touch map should be valid");
    assert_eq!(map.plot_width(), 300.0);
    assert_eq!(map.left_inset(), 30.0);

    view.set_viewport(Viewport::new(480, 360))
        .expect("resize should succeed");
    let map = view.touch_map().expect("touch map should be valid");
    assert_eq!(map.plot_width(), 480.0);
}

#[test]
fn value_specifier_round_trips_through_the_view() {
    let view = ChartView::new(NullRenderer::default(), config().with_value_specifier("$%.2f"))
        .expect("view construction should succeed");

    assert_eq!(view.value_format().specifier(), "$%.2f");
    assert_eq!(view.value_format().format(1.5), "$1.50");
}

#[test]
fn metadata_keeps_insertion_order() {
    let mut view = two_series_view();
    view.set_metadata("source", "unit-test");
    view.set_metadata("revision", "42");
    view.set_metadata("source", "replaced");

    let entries: Vec<(&str, &str)> = view
        .metadata()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    assert_eq!(entries, vec![("source", "replaced"), ("revision", "42")]);
}

#[test]
fn render_reports_primitive_counts_through_the_null_renderer() {
    let mut view = two_series_view();
    view.render(ColorScheme::Light).expect("render should succeed");

    let renderer = view.into_renderer();
    // Background rect; five gridlines plus four polyline segments; five labels.
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 9);
    assert_eq!(renderer.last_text_count, 5);
}

#[test]
fn hiding_the_grid_removes_its_lines_and_labels() {
    let mut view = two_series_view();
    assert!(view.grid_visible());

    view.set_grid_visible(false);
    view.render(ColorScheme::Light).expect("render should succeed");

    let renderer = view.into_renderer();
    assert_eq!(renderer.last_line_count, 4);
    assert_eq!(renderer.last_text_count, 0);
}
