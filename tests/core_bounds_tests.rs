use linechart_rs::api::gradients;
use linechart_rs::core::{ChartDataset, ChartSeries, ValueBounds};

fn dataset_of(point_sets: Vec<Vec<f64>>) -> ChartDataset {
    ChartDataset::from_series(
        point_sets
            .into_iter()
            .enumerate()
            .map(|(i, points)| ChartSeries::new(points, format!("series-{i}"), gradients::ORANGE))
            .collect(),
    )
}

#[test]
fn bounds_span_all_series() {
    let dataset = dataset_of(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let bounds = ValueBounds::from_dataset(&dataset);

    assert_eq!(bounds.min, 1.0);
    assert_eq!(bounds.max, 6.0);
}

#[test]
fn bounds_ignore_series_boundaries() {
    let dataset = dataset_of(vec![vec![10.0, -4.0], vec![3.0], vec![7.5, 22.0, 0.5]]);
    let bounds = ValueBounds::from_dataset(&dataset);

    assert_eq!(bounds.min, -4.0);
    assert_eq!(bounds.max, 22.0);
}

#[test]
fn empty_dataset_degrades_to_zero_bounds() {
    let bounds = ValueBounds::from_dataset(&ChartDataset::new());
    assert_eq!(bounds, ValueBounds::ZERO);
}

#[test]
fn all_empty_series_degrade_to_zero_bounds() {
    let dataset = dataset_of(vec![vec![], vec![]]);
    let bounds = ValueBounds::from_dataset(&dataset);

    assert_eq!(bounds, ValueBounds::ZERO);
    assert!(bounds.is_degenerate());
}

#[test]
fn single_value_bounds_are_degenerate() {
    let dataset = dataset_of(vec![vec![5.0]]);
    let bounds = ValueBounds::from_dataset(&dataset);

    assert_eq!(bounds.min, 5.0);
    assert_eq!(bounds.max, 5.0);
    assert!(bounds.is_degenerate());
    assert_eq!(bounds.span(), 0.0);
}

#[test]
fn contains_is_inclusive_on_both_ends() {
    let dataset = dataset_of(vec![vec![-2.0, 8.0]]);
    let bounds = ValueBounds::from_dataset(&dataset);

    assert!(bounds.contains(-2.0));
    assert!(bounds.contains(8.0));
    assert!(bounds.contains(0.0));
    assert!(!bounds.contains(-2.1));
    assert!(!bounds.contains(8.1));
}

#[test]
fn every_value_sits_inside_the_bounds() {
    let point_sets = vec![
        vec![1.25, -3.5, 0.0, 19.75],
        vec![4.0, 4.0, 4.0],
        vec![-100.0, 250.0],
    ];
    let dataset = dataset_of(point_sets.clone());
    let bounds = ValueBounds::from_dataset(&dataset);

    for points in point_sets {
        for value in points {
            assert!(bounds.contains(value), "{value} escaped {bounds:?}");
        }
    }
}
