//! Flat, serializable chart option nodes.
//!
//! Each type maps one-to-one to a node of the renderer's JSON option schema.
//! Property names serialize in camelCase and unset options are omitted so the
//! emitted document stays minimal and bit-compatible with the consuming
//! renderer.

pub mod axis;
pub mod chart;
pub mod color;
pub mod credits;
pub mod labels;
pub mod legend;
pub mod marker;
pub mod plot;
pub mod title;
pub mod tooltip;

pub use axis::{Axis, AxisTitle, AxisType};
pub use chart::{ChartOptions, ChartType, ZoomType};
pub use color::Color;
pub use credits::Credits;
pub use labels::DataLabels;
pub use legend::{HorizontalAlign, Legend, LegendLayout, VerticalAlign};
pub use marker::{Marker, MarkerSymbol};
pub use plot::{ColumnPlotOptions, PiePlotOptions, PlotOptions, SeriesPlotOptions, Stacking};
pub use title::{Subtitle, Title};
pub use tooltip::Tooltip;

pub(crate) fn is_true(value: &bool) -> bool {
    *value
}
