use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_LEFT_INSET;
use crate::error::{ChartError, ChartResult};

/// Fixed pixel geometry of the composite view.
///
/// The plot band keeps a constant height regardless of viewport height;
/// hosts size the widget around it. All fields are plain pixels so layout
/// stays deterministic across backends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title_font_size_px: f64,
    pub legend_font_size_px: f64,
    /// Vertical offset applied to the title/legend header block.
    pub header_offset_y_px: f64,
    /// Spacing between stacked header lines.
    pub header_spacing_px: f64,
    pub plot_height_px: f64,
    /// Top of the plot band, measured from the viewport top.
    pub plot_offset_y_px: f64,
    /// Left margin reserved for grid value labels; polylines start after it.
    pub left_inset_px: f64,
    /// Fixed Y reported for the indicator location while dragging.
    pub indicator_y_px: f64,
    pub indicator_line_width_px: f64,
    pub series_stroke_width_px: f64,
    pub grid_line_width_px: f64,
    pub grid_label_font_size_px: f64,
    pub magnifier_width_px: f64,
    /// Height of the stroked dark-scheme magnifier box.
    pub magnifier_height_dark_px: f64,
    /// Height of the filled light-scheme magnifier box.
    pub magnifier_height_light_px: f64,
    pub magnifier_corner_radius_px: f64,
    pub magnifier_stroke_width_px: f64,
    pub magnifier_font_size_px: f64,
    /// Gap between the magnifier top edge and the first value line.
    pub magnifier_text_padding_px: f64,
    /// Vertical advance between stacked value lines.
    pub magnifier_line_height_px: f64,
    /// Offset of the magnifier center below the plot band center.
    pub magnifier_offset_y_px: f64,
    pub magnifier_shadow_blur_px: f64,
    pub magnifier_shadow_offset_y_px: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title_font_size_px: 28.0,
            legend_font_size_px: 16.0,
            header_offset_y_px: 20.0,
            header_spacing_px: 8.0,
            plot_height_px: 240.0,
            plot_offset_y_px: 40.0,
            left_inset_px: DEFAULT_LEFT_INSET,
            indicator_y_px: 32.0,
            indicator_line_width_px: 1.0,
            series_stroke_width_px: 3.0,
            grid_line_width_px: 1.5,
            grid_label_font_size_px: 12.0,
            magnifier_width_px: 60.0,
            magnifier_height_dark_px: 260.0,
            magnifier_height_light_px: 280.0,
            magnifier_corner_radius_px: 16.0,
            magnifier_stroke_width_px: 2.0,
            magnifier_font_size_px: 18.0,
            magnifier_text_padding_px: 16.0,
            magnifier_line_height_px: 22.0,
            magnifier_offset_y_px: 36.0,
            magnifier_shadow_blur_px: 12.0,
            magnifier_shadow_offset_y_px: 6.0,
        }
    }
}

impl ChartLayout {
    pub fn validate(self) -> ChartResult<()> {
        let strictly_positive = [
            self.title_font_size_px,
            self.legend_font_size_px,
            self.plot_height_px,
            self.indicator_line_width_px,
            self.series_stroke_width_px,
            self.grid_line_width_px,
            self.grid_label_font_size_px,
            self.magnifier_width_px,
            self.magnifier_height_dark_px,
            self.magnifier_height_light_px,
            self.magnifier_stroke_width_px,
            self.magnifier_font_size_px,
            self.magnifier_line_height_px,
        ];
        if strictly_positive
            .iter()
            .any(|px| !px.is_finite() || *px <= 0.0)
        {
            return Err(ChartError::InvalidData(
                "layout sizes must be finite and > 0".to_owned(),
            ));
        }

        let non_negative = [
            self.header_offset_y_px,
            self.header_spacing_px,
            self.plot_offset_y_px,
            self.left_inset_px,
            self.indicator_y_px,
            self.magnifier_corner_radius_px,
            self.magnifier_text_padding_px,
            self.magnifier_shadow_blur_px,
        ];
        if non_negative.iter().any(|px| !px.is_finite() || *px < 0.0) {
            return Err(ChartError::InvalidData(
                "layout offsets must be finite and >= 0".to_owned(),
            ));
        }

        if !self.magnifier_offset_y_px.is_finite() || !self.magnifier_shadow_offset_y_px.is_finite()
        {
            return Err(ChartError::InvalidData(
                "layout magnifier offsets must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
