use serde::{Deserialize, Serialize};

use crate::render::Gradient;

/// One named, ordered sequence of numeric samples plotted as a single line.
///
/// Sample positions are implicit: sample `i` sits at the i-th step across the
/// plot width. There is no time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    points: Vec<f64>,
    label: String,
    gradient: Gradient,
}

impl ChartSeries {
    #[must_use]
    pub fn new(points: Vec<f64>, label: impl Into<String>, gradient: Gradient) -> Self {
        Self {
            points,
            label: label.into(),
            gradient,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered collection of series.
///
/// Insertion order is render order and legend order; a series has no identity
/// beyond its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    series: Vec<ChartSeries>,
}

impl ChartDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_series(series: Vec<ChartSeries>) -> Self {
        Self { series }
    }

    pub fn push(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter()
    }

    /// First series carrying `label`, scanning in insertion order.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|series| series.label() == label)
    }
}

impl From<Vec<(Vec<f64>, String, Gradient)>> for ChartDataset {
    fn from(triples: Vec<(Vec<f64>, String, Gradient)>) -> Self {
        Self {
            series: triples
                .into_iter()
                .map(|(points, label, gradient)| ChartSeries::new(points, label, gradient))
                .collect(),
        }
    }
}
