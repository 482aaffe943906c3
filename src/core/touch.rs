use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default left margin reserved for value labels, in pixels.
pub const DEFAULT_LEFT_INSET: f64 = 30.0;

/// Maps a pointer's horizontal offset to per-series sample indices.
///
/// Each series derives its own step width from its point count; series share
/// no state during mapping, so datasets may mix lengths freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchMap {
    plot_width: f64,
    left_inset: f64,
}

impl TouchMap {
    pub fn new(plot_width: f64, left_inset: f64) -> ChartResult<Self> {
        if !plot_width.is_finite() || !left_inset.is_finite() {
            return Err(ChartError::InvalidData(
                "touch map geometry must be finite".to_owned(),
            ));
        }
        if left_inset < 0.0 || plot_width <= left_inset {
            return Err(ChartError::InvalidData(
                "touch map width must exceed the left inset".to_owned(),
            ));
        }
        Ok(Self {
            plot_width,
            left_inset,
        })
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn left_inset(self) -> f64 {
        self.left_inset
    }

    /// Horizontal pixel distance between adjacent samples of a series,
    /// `(plot_width - left_inset) / (point_count - 1)`.
    ///
    /// `None` for series with fewer than two samples: the divisor vanishes
    /// and the lone-sample policy in [`TouchMap::index_at`] applies instead.
    #[must_use]
    pub fn step_width(self, point_count: usize) -> Option<f64> {
        if point_count < 2 {
            return None;
        }
        Some((self.plot_width - self.left_inset) / (point_count - 1) as f64)
    }

    /// Sample index addressed by `pointer_x`, or `None` when the computed
    /// index falls outside `[0, point_count)`.
    ///
    /// The index is `floor((pointer_x - left_inset / 2) / step_width)`. A
    /// one-sample series always addresses index 0, the limit of that formula
    /// as the step width grows without bound.
    #[must_use]
    pub fn index_at(self, pointer_x: f64, point_count: usize) -> Option<usize> {
        if point_count == 0 {
            return None;
        }
        let Some(step) = self.step_width(point_count) else {
            return Some(0);
        };

        let raw = ((pointer_x - self.left_inset / 2.0) / step).floor();
        if raw >= 0.0 && raw < point_count as f64 {
            Some(raw as usize)
        } else {
            None
        }
    }

    /// Value selected by `pointer_x`, falling back to `0.0` when no sample is
    /// addressable. The fallback is a degrade policy, never an error.
    #[must_use]
    pub fn value_at(self, pointer_x: f64, points: &[f64]) -> f64 {
        self.index_at(pointer_x, points.len())
            .and_then(|index| points.get(index).copied())
            .unwrap_or(0.0)
    }
}
