use approx::assert_relative_eq;
use linechart_rs::core::{PlotArea, ValueBounds, ValueScale};

fn area() -> PlotArea {
    PlotArea::new(40.0, 300.0, 240.0, 30.0).expect("plot area should be valid")
}

#[test]
fn max_bound_projects_to_the_plot_top() {
    let scale = ValueScale::new(ValueBounds { min: 0.0, max: 100.0 }, area());
    assert_relative_eq!(scale.value_to_pixel(100.0), 40.0);
}

#[test]
fn min_bound_projects_to_the_plot_bottom() {
    let scale = ValueScale::new(ValueBounds { min: 0.0, max: 100.0 }, area());
    assert_relative_eq!(scale.value_to_pixel(0.0), 280.0);
}

#[test]
fn midpoint_projects_to_the_vertical_center() {
    let scale = ValueScale::new(ValueBounds { min: 0.0, max: 100.0 }, area());
    assert_relative_eq!(scale.value_to_pixel(50.0), 160.0);
}

#[test]
fn projection_is_linear_in_the_value() {
    let scale = ValueScale::new(ValueBounds { min: -50.0, max: 50.0 }, area());

    let quarter = scale.value_to_pixel(-25.0);
    let three_quarter = scale.value_to_pixel(25.0);

    assert_relative_eq!(quarter, 220.0);
    assert_relative_eq!(three_quarter, 100.0);
}

#[test]
fn pixel_y_decreases_as_values_grow() {
    let scale = ValueScale::new(ValueBounds { min: 1.0, max: 6.0 }, area());

    let low = scale.value_to_pixel(2.0);
    let high = scale.value_to_pixel(5.0);
    assert!(high < low);
}

#[test]
fn degenerate_bounds_project_onto_the_midline() {
    let scale = ValueScale::new(ValueBounds { min: 5.0, max: 5.0 }, area());

    assert_relative_eq!(scale.value_to_pixel(5.0), 160.0);
    assert_relative_eq!(scale.value_to_pixel(-10.0), 160.0);
    assert_relative_eq!(scale.value_to_pixel(99.0), 160.0);
}

#[test]
fn zero_bounds_project_onto_the_midline() {
    let scale = ValueScale::new(ValueBounds::ZERO, area());
    assert_relative_eq!(scale.value_to_pixel(0.0), 160.0);
}

#[test]
fn out_of_bounds_values_extrapolate_beyond_the_plot() {
    let scale = ValueScale::new(ValueBounds { min: 0.0, max: 100.0 }, area());

    assert!(scale.value_to_pixel(150.0) < 40.0);
    assert!(scale.value_to_pixel(-50.0) > 280.0);
}
