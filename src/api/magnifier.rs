use crate::core::PlotArea;
use crate::render::{
    Color, LayerKind, RectPrimitive, RectShadow, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::chart_style::palette;
use super::{ChartView, ColorScheme};

impl<R: Renderer> ChartView<R> {
    /// Appends the magnifier overlay: one formatted value line per series, in
    /// series order, over a rounded box centered on the pointer.
    ///
    /// The treatment bifurcates on the scheme alone: dark gets a stroked
    /// minimal box, light a filled white box with a drop shadow. Styling does
    /// not participate; the two treatments are fixed. Nothing is emitted
    /// while the magnifier is hidden, so opacity never reaches the frame.
    pub(super) fn append_magnifier_primitives(
        &self,
        frame: &mut RenderFrame,
        area: PlotArea,
        scheme: ColorScheme,
    ) {
        if self.drag.magnifier_opacity() <= 0.0 {
            return;
        }

        let layout = self.config.layout;
        let (center_x, _) = self.drag.drag_location();
        let center_y = area.top() + area.height / 2.0 + layout.magnifier_offset_y_px;

        let height = match scheme {
            ColorScheme::Dark => layout.magnifier_height_dark_px,
            ColorScheme::Light => layout.magnifier_height_light_px,
        };
        let left = center_x - layout.magnifier_width_px / 2.0;
        let top = center_y - height / 2.0;

        let rect = match scheme {
            ColorScheme::Dark => RectPrimitive::filled(
                left,
                top,
                layout.magnifier_width_px,
                height,
                Color::TRANSPARENT,
            )
            .with_corner_radius(layout.magnifier_corner_radius_px)
            .with_border(Color::WHITE, layout.magnifier_stroke_width_px),
            ColorScheme::Light => RectPrimitive::filled(
                left,
                top,
                layout.magnifier_width_px,
                height,
                Color::WHITE,
            )
            .with_corner_radius(layout.magnifier_corner_radius_px)
            .with_shadow(RectShadow {
                color: palette::LEGEND_TEXT,
                blur_radius: layout.magnifier_shadow_blur_px,
                offset_x: 0.0,
                offset_y: layout.magnifier_shadow_offset_y_px,
            }),
        };
        frame.push_rect(LayerKind::Overlay, rect);

        let text_color = match scheme {
            ColorScheme::Dark => Color::WHITE,
            ColorScheme::Light => Color::BLACK,
        };
        for (line, value) in self.drag.selected_values().iter().enumerate() {
            let y = top + layout.magnifier_text_padding_px
                + line as f64 * layout.magnifier_line_height_px;
            frame.push_text(
                LayerKind::Overlay,
                TextPrimitive::new(
                    self.value_format.format(*value),
                    center_x,
                    y,
                    layout.magnifier_font_size_px,
                    text_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
    }
}
