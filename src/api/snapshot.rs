use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ValueBounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DragPhase;
use crate::render::{Gradient, Renderer};

use super::ChartView;

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// One series as captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub label: String,
    pub points: Vec<f64>,
    pub gradient: Gradient,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Captures everything a frame build reads: configuration, dataset, derived
/// bounds, and the transient drag state, including the selected values a past
/// drag left behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub title: Option<String>,
    pub legend: Option<String>,
    pub value_specifier: String,
    pub bounds: ValueBounds,
    pub drag_phase: DragPhase,
    pub drag_location: (f64, f64),
    pub indicator_location: (f64, f64),
    pub magnifier_opacity: f64,
    pub grid_lines_hidden: bool,
    pub selected_values: Vec<f64>,
    pub series: Vec<SeriesSnapshot>,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot shape and the versioned contract
    /// envelope, rejecting envelopes from unknown schema versions.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartView<R> {
    /// Captures the current state deterministically.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            viewport: self.config.viewport,
            title: self.config.title.clone(),
            legend: self.config.legend.clone(),
            value_specifier: self.value_format.specifier(),
            bounds: self.global_bounds(),
            drag_phase: self.drag.phase(),
            drag_location: self.drag.drag_location(),
            indicator_location: self.drag.indicator_location(),
            magnifier_opacity: self.drag.magnifier_opacity(),
            grid_lines_hidden: self.drag.grid_lines_hidden(),
            selected_values: self.drag.selected_values().to_vec(),
            series: self
                .dataset
                .iter()
                .map(|series| SeriesSnapshot {
                    label: series.label().to_owned(),
                    points: series.points().to_vec(),
                    gradient: series.gradient(),
                })
                .collect(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
