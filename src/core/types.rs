use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel-space region where series polylines are plotted.
///
/// The region spans the full chart width; `left_inset` reserves a fixed
/// margin on the left for value labels, and polylines occupy
/// `left_inset..width`. The same inset feeds the touch-to-index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub left_inset: f64,
}

impl PlotArea {
    pub fn new(origin_y: f64, width: f64, height: f64, left_inset: f64) -> ChartResult<Self> {
        let area = Self {
            origin_y,
            width,
            height,
            left_inset,
        };
        area.validate()?;
        Ok(area)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left_inset
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.origin_y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.origin_y + self.height
    }

    /// Width available to polylines once the label inset is reserved.
    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.left_inset
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.origin_y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || !self.left_inset.is_finite()
        {
            return Err(ChartError::InvalidData(
                "plot area geometry must be finite".to_owned(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot area size must be > 0".to_owned(),
            ));
        }
        if self.left_inset < 0.0 || self.left_inset >= self.width {
            return Err(ChartError::InvalidData(
                "plot area left inset must be in [0, width)".to_owned(),
            ));
        }
        Ok(())
    }
}
