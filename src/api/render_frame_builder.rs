use tracing::trace;

use crate::core::{PlotArea, ValueScale, project_polyline};
use crate::error::ChartResult;
use crate::interaction::DragPhase;
use crate::render::{
    LayerKind, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartStyle, ChartView, ColorScheme};

impl<R: Renderer> ChartView<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// A frame is a pure function of the current view state plus the explicit
    /// color scheme. The shared scale bounds are recomputed from the full
    /// dataset on every call, never cached, so data changes show up on the
    /// next build without any invalidation step.
    pub fn build_frame(&self, scheme: ColorScheme) -> ChartResult<RenderFrame> {
        let style = self.style_for(scheme);
        let area = self.plot_area()?;
        let scale = ValueScale::new(self.global_bounds(), area);

        let mut frame = RenderFrame::new(self.config.viewport);

        frame.push_rect(
            LayerKind::Background,
            RectPrimitive::filled(0.0, area.top(), area.width, area.height, style.background_color),
        );

        self.append_header_primitives(&mut frame, style);
        if self.grid_visible {
            self.append_grid_primitives(&mut frame, scale, style);
        }
        self.append_series_primitives(&mut frame, scale);
        self.append_indicator_primitives(&mut frame, area, style);
        self.append_magnifier_primitives(&mut frame, area, scheme);

        trace!(
            ?scheme,
            series_count = self.dataset.len(),
            "built render frame"
        );
        Ok(frame)
    }

    /// Title and legend lines above the plot band. Absent or empty strings
    /// contribute nothing; the legend moves up when no title is present.
    fn append_header_primitives(&self, frame: &mut RenderFrame, style: ChartStyle) {
        let layout = self.config.layout;
        let mut y = layout.header_offset_y_px;

        if let Some(title) = self.config.title.as_deref().filter(|text| !text.is_empty()) {
            frame.push_text(
                LayerKind::Header,
                TextPrimitive::new(
                    title,
                    0.0,
                    y,
                    layout.title_font_size_px,
                    style.text_color,
                    TextHAlign::Left,
                )
                .bold(),
            );
            y += layout.title_font_size_px + layout.header_spacing_px;
        }

        if let Some(legend) = self.config.legend.as_deref().filter(|text| !text.is_empty()) {
            frame.push_text(
                LayerKind::Header,
                TextPrimitive::new(
                    legend,
                    0.0,
                    y,
                    layout.legend_font_size_px,
                    style.legend_text_color,
                    TextHAlign::Left,
                ),
            );
        }
    }

    /// One polyline per series, in dataset order. Segment color follows the
    /// series gradient across the inner plot width.
    fn append_series_primitives(&self, frame: &mut RenderFrame, scale: ValueScale) {
        let area = scale.area();
        let stroke_width = self.config.layout.series_stroke_width_px;

        for series in self.dataset.iter() {
            let gradient = series.gradient();
            for segment in project_polyline(series.points(), scale, area) {
                let t = ((segment.x1 + segment.x2) / 2.0 - area.left()) / area.inner_width();
                frame.push_line(
                    LayerKind::Series,
                    LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        stroke_width,
                        gradient.color_at(t),
                    ),
                );
            }
        }
    }

    /// Vertical indicator at the gated pointer location, plot-clamped, only
    /// while a drag is active.
    fn append_indicator_primitives(
        &self,
        frame: &mut RenderFrame,
        area: PlotArea,
        style: ChartStyle,
    ) {
        if self.drag.phase() != DragPhase::Dragging {
            return;
        }

        let (indicator_x, _) = self.drag.indicator_location();
        let x = (area.left() + indicator_x).min(area.right());
        frame.push_line(
            LayerKind::Indicator,
            LinePrimitive::new(
                x,
                area.top(),
                x,
                area.bottom(),
                self.config.layout.indicator_line_width_px,
                style.accent_color,
            ),
        );
    }
}
