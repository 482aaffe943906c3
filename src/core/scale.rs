use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ValueBounds};

/// Vertical projection of values into a plot area using shared bounds.
///
/// Every series of a chart projects through the same scale so lines are
/// comparable across series. Pixel Y grows downward: the maximum bound maps
/// to the plot top, the minimum to the plot bottom. A zero-span bound
/// projects every value onto the vertical midline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    bounds: ValueBounds,
    area: PlotArea,
}

impl ValueScale {
    #[must_use]
    pub fn new(bounds: ValueBounds, area: PlotArea) -> Self {
        Self { bounds, area }
    }

    #[must_use]
    pub fn bounds(self) -> ValueBounds {
        self.bounds
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let span = self.bounds.span();
        if span <= 0.0 {
            return self.area.top() + self.area.height / 2.0;
        }

        let normalized = (value - self.bounds.min) / span;
        self.area.bottom() - normalized * self.area.height
    }
}
