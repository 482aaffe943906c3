//! linechart-rs: a multi-line chart view core.
//!
//! Named numeric series plot as polylines over a shared value scale; a drag
//! gesture selects the nearest sample of every series and surfaces the values
//! through a magnifier overlay. Frames are built as pure functions of view
//! state and rendered through a backend-agnostic `Renderer` trait, with an
//! optional Cairo/Pango backend for GTK4 embedding.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
