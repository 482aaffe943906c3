use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pointer-driven lifecycle of the chart's drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Per-series values selected by the active (or most recent) drag.
///
/// Inline capacity covers the typical handful of series without allocation.
pub type SelectedValues = SmallVec<[f64; 4]>;

/// Transient interaction state owned by the composite view.
///
/// Reset implicitly as drags start and end; never persisted. Selected values
/// survive drag end and are overwritten by the next drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    phase: DragPhase,
    drag_location: (f64, f64),
    indicator_location: (f64, f64),
    magnifier_opacity: f64,
    hide_grid_lines: bool,
    selected_values: SelectedValues,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            drag_location: (0.0, 0.0),
            indicator_location: (0.0, 0.0),
            magnifier_opacity: 0.0,
            hide_grid_lines: false,
            selected_values: SelectedValues::new(),
        }
    }
}

impl DragState {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn drag_location(&self) -> (f64, f64) {
        self.drag_location
    }

    #[must_use]
    pub fn indicator_location(&self) -> (f64, f64) {
        self.indicator_location
    }

    /// Fully visible (1.0) while dragging, hidden (0.0) otherwise.
    #[must_use]
    pub fn magnifier_opacity(&self) -> f64 {
        self.magnifier_opacity
    }

    #[must_use]
    pub fn grid_lines_hidden(&self) -> bool {
        self.hide_grid_lines
    }

    #[must_use]
    pub fn selected_values(&self) -> &[f64] {
        &self.selected_values
    }

    /// Drag start and every subsequent pointer move run the same transition.
    pub fn on_drag_moved(&mut self, x: f64, y: f64, indicator_x: f64, indicator_y: f64) {
        self.phase = DragPhase::Dragging;
        self.drag_location = (x, y);
        self.indicator_location = (indicator_x, indicator_y);
        self.magnifier_opacity = 1.0;
        self.hide_grid_lines = true;
    }

    /// Stores the values the composite view resolved for the current pointer.
    pub fn set_selected_values(&mut self, values: SelectedValues) {
        self.selected_values = values;
    }

    /// Selected values are left at their last computed contents.
    pub fn on_drag_ended(&mut self) {
        self.phase = DragPhase::Idle;
        self.magnifier_opacity = 0.0;
        self.hide_grid_lines = false;
    }
}
