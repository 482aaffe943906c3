use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ValueScale};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects a series' samples into adjacent line segments.
///
/// X spacing is `area.inner_width() / (point_count - 1)`, the same step width
/// the touch mapper computes, so drawn samples and addressed samples stay
/// aligned. Series with fewer than two samples produce no segments.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
#[must_use]
pub fn project_polyline(points: &[f64], scale: ValueScale, area: PlotArea) -> Vec<LineSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let step = area.inner_width() / (points.len() - 1) as f64;
    let mut mapped = Vec::with_capacity(points.len());
    for (index, &value) in points.iter().enumerate() {
        let x = area.left() + step * index as f64;
        let y = scale.value_to_pixel(value);
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    segments
}
