pub mod bounds;
pub mod polyline;
pub mod scale;
pub mod series;
pub mod touch;
pub mod types;

pub use bounds::ValueBounds;
pub use polyline::{LineSegment, project_polyline};
pub use scale::ValueScale;
pub use series::{ChartDataset, ChartSeries};
pub use touch::{DEFAULT_LEFT_INSET, TouchMap};
pub use types::{PlotArea, Viewport};
