//! chartwire: typed chart option graph for server-rendered charts.
//!
//! This crate mirrors the option schema of a Highcharts-style JavaScript
//! renderer so server-side code can build chart configurations with typed
//! structures instead of hand-written JSON. The behavioral core is the
//! series data container, which propagates point-level change notifications
//! so a live chart can be patched incrementally instead of fully redrawn.

pub mod config;
pub mod error;
pub mod options;
pub mod series;
pub mod telemetry;

pub use config::{Configuration, Drilldown};
pub use error::{ChartError, ChartResult};
pub use series::{
    ChartSeries, ChartUpdate, ChartUpdateListener, DataPoint, DataSeries, ListSeries, PointValue,
    SeriesId,
};
