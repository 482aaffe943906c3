use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartDataset, ChartSeries, PlotArea, TouchMap, ValueBounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DragPhase, DragState};
use crate::render::{Gradient, Renderer};

use super::{ChartStyle, ChartViewConfig, ColorScheme, ValueFormat};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Composite multi-line chart view consumed by host applications.
///
/// Owns the dataset, the transient drag state, and a renderer. Frames are
/// built on demand as a pure function of the current state plus an explicit
/// color scheme; nothing about appearance is read from the environment.
pub struct ChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartViewConfig,
    pub(super) value_format: ValueFormat,
    pub(super) dark_style: ChartStyle,
    pub(super) dataset: ChartDataset,
    pub(super) drag: DragState,
    pub(super) grid_visible: bool,
    pub(super) metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartView<R> {
    /// Creates an empty view after validating the whole configuration.
    ///
    /// Geometry is checked here so the pointer path never has to: a viewport
    /// narrower than the left inset cannot host a plot area and is rejected
    /// up front.
    pub fn new(renderer: R, config: ChartViewConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.style.validate()?;
        if let Some(dark) = config.dark_style {
            dark.validate()?;
        }
        config.layout.validate()?;
        let value_format = ValueFormat::parse(&config.value_specifier)?;
        let dark_style = config.dark_style.unwrap_or_else(ChartStyle::dark_default);

        let view = Self {
            renderer,
            config,
            value_format,
            dark_style,
            dataset: ChartDataset::new(),
            drag: DragState::default(),
            grid_visible: true,
            metadata: IndexMap::new(),
        };
        view.plot_area()?;
        view.touch_map()?;
        Ok(view)
    }

    /// Creates a view from ordered `(points, label, gradient)` triples.
    pub fn with_series(
        renderer: R,
        config: ChartViewConfig,
        series: Vec<(Vec<f64>, String, Gradient)>,
    ) -> ChartResult<Self> {
        let mut view = Self::new(renderer, config)?;
        view.set_dataset(ChartDataset::from(series));
        Ok(view)
    }

    pub fn set_dataset(&mut self, dataset: ChartDataset) {
        debug!(series_count = dataset.len(), "set dataset");
        self.dataset = dataset;
    }

    pub fn push_series(&mut self, series: ChartSeries) {
        self.dataset.push(series);
    }

    #[must_use]
    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resizes the view, re-validating that the new viewport can host the
    /// configured plot area.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let layout = self.config.layout;
        PlotArea::new(
            layout.plot_offset_y_px,
            f64::from(viewport.width),
            layout.plot_height_px,
            layout.left_inset_px,
        )?;
        TouchMap::new(f64::from(viewport.width), layout.left_inset_px)?;
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn value_format(&self) -> &ValueFormat {
        &self.value_format
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Values selected by the most recent drag, in series order.
    #[must_use]
    pub fn selected_values(&self) -> &[f64] {
        self.drag.selected_values()
    }

    /// Whether gridlines and their value labels are part of the scene at all.
    /// The drag gesture additionally suppresses non-baseline gridlines while
    /// active; that gate lives in the drag state, not here.
    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
    }

    /// Style resolved for `scheme`; the dark variant falls back to the
    /// bundled dark style when the configuration supplied none.
    #[must_use]
    pub fn style_for(&self, scheme: ColorScheme) -> ChartStyle {
        match scheme {
            ColorScheme::Light => self.config.style,
            ColorScheme::Dark => self.dark_style,
        }
    }

    /// Shared-scale bounds over every series, recomputed per call.
    #[must_use]
    pub fn global_bounds(&self) -> ValueBounds {
        ValueBounds::from_dataset(&self.dataset)
    }

    /// Pixel region the polylines occupy inside the viewport.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        let layout = self.config.layout;
        PlotArea::new(
            layout.plot_offset_y_px,
            f64::from(self.config.viewport.width),
            layout.plot_height_px,
            layout.left_inset_px,
        )
    }

    /// Pointer-to-sample mapper for the current geometry.
    pub fn touch_map(&self) -> ChartResult<TouchMap> {
        TouchMap::new(
            f64::from(self.config.viewport.width),
            self.config.layout.left_inset_px,
        )
    }

    /// Arbitrary host metadata carried into snapshots, in insertion order.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// Builds the current frame and hands it to the owned renderer.
    pub fn render(&mut self, scheme: ColorScheme) -> ChartResult<()> {
        let frame = self.build_frame(scheme)?;
        self.renderer.render(&frame)
    }

    /// Renders the current frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer implementation
    /// decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        scheme: ColorScheme,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame(scheme)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
