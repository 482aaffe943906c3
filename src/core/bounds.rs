use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ChartDataset;

/// Global scale bounds across every series in a dataset.
///
/// Both bounds degenerate to zero when the dataset holds no values at all;
/// that fallback is part of the contract, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Scans the concatenation of all series' values for the global min/max.
    ///
    /// Pure: no caching, no mutation. Callers recompute on every frame build.
    #[must_use]
    pub fn from_dataset(dataset: &ChartDataset) -> Self {
        let values = || {
            dataset
                .iter()
                .flat_map(|series| series.points().iter().copied())
        };

        let min = values().map(OrderedFloat).min();
        let max = values().map(OrderedFloat).max();

        match (min, max) {
            (Some(OrderedFloat(min)), Some(OrderedFloat(max))) => Self { min, max },
            _ => Self::ZERO,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() <= 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
