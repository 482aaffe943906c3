mod chart_style;
mod config;
mod grid;
mod interaction_controller;
mod layout;
mod magnifier;
mod render_frame_builder;
mod snapshot;
mod value_format;
mod view;

pub use chart_style::{ChartStyle, ColorScheme, gradients, palette};
pub use config::ChartViewConfig;
pub use grid::GRID_LINE_COUNT;
pub use layout::ChartLayout;
pub use snapshot::{
    SeriesSnapshot, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot, ViewSnapshotJsonContractV1,
};
pub use value_format::ValueFormat;
pub use view::ChartView;
