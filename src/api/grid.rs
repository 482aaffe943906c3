use crate::core::ValueScale;
use crate::render::{LayerKind, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{ChartStyle, ChartView};

/// Number of horizontal gridlines, baseline included.
pub const GRID_LINE_COUNT: usize = 5;

impl<R: Renderer> ChartView<R> {
    /// Appends the horizontal gridlines and their value labels.
    ///
    /// Lines sit at evenly spaced values between the global bounds; labels
    /// occupy the reserved left inset and use a fixed two-decimal format,
    /// independent of the magnifier's value format. While a drag is active
    /// every line except the baseline is suppressed; the labels stay.
    ///
    /// Degenerate bounds collapse the grid to the baseline alone, projected
    /// onto the plot midline.
    pub(super) fn append_grid_primitives(
        &self,
        frame: &mut RenderFrame,
        scale: ValueScale,
        style: ChartStyle,
    ) {
        let bounds = scale.bounds();
        let area = scale.area();
        let layout = self.config.layout;
        let line_count = if bounds.is_degenerate() {
            1
        } else {
            GRID_LINE_COUNT
        };

        for step in 0..line_count {
            let fraction = step as f64 / (GRID_LINE_COUNT - 1) as f64;
            let value = bounds.min + bounds.span() * fraction;
            let y = scale.value_to_pixel(value);

            let is_baseline = step == 0;
            if is_baseline || !self.drag.grid_lines_hidden() {
                let color = if is_baseline {
                    style.grid_line_color
                } else {
                    style.grid_line_color.with_alpha(style.grid_line_color.alpha * 0.6)
                };
                frame.push_line(
                    LayerKind::Grid,
                    LinePrimitive::new(0.0, y, area.right(), y, layout.grid_line_width_px, color),
                );
            }

            frame.push_text(
                LayerKind::Grid,
                TextPrimitive::new(
                    format!("{value:.2}"),
                    0.0,
                    y - layout.grid_label_font_size_px / 2.0,
                    layout.grid_label_font_size_px,
                    style.legend_text_color,
                    TextHAlign::Left,
                ),
            );
        }
    }
}
