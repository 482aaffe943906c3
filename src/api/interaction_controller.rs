use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::interaction::SelectedValues;
use crate::render::Renderer;

use super::ChartView;

impl<R: Renderer> ChartView<R> {
    /// Drag start and every subsequent pointer move.
    ///
    /// Recomputes the per-series selected values for the pointer position:
    /// each series maps the pointer through its own step width, and an
    /// out-of-range index records the fallback value `0.0` instead of an
    /// error. The magnifier becomes visible and non-baseline gridlines are
    /// suppressed until the drag ends.
    pub fn drag_moved(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let map = self.touch_map()?;
        let indicator_x = (x - self.config.layout.left_inset_px).max(0.0);
        self.drag
            .on_drag_moved(x, y, indicator_x, self.config.layout.indicator_y_px);

        let mut values = SelectedValues::new();
        for series in self.dataset.iter() {
            values.push(map.value_at(x, series.points()));
        }
        trace!(x, y, series_count = values.len(), "drag moved");
        self.drag.set_selected_values(values);
        Ok(())
    }

    /// Drag release. Hides the magnifier and restores gridlines; the selected
    /// values keep their last computed contents until the next drag.
    pub fn drag_ended(&mut self) {
        debug!("drag ended");
        self.drag.on_drag_ended();
    }
}
