use serde::{Deserialize, Serialize};

use crate::options::{DataLabels, Marker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stacking {
    Normal,
    Percent,
}

/// Options applied to every series type (`plotOptions.series`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<Stacking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
}

/// Pie-specific options (`plotOptions.pie`).
///
/// `allow_point_select` is what makes slice toggling meaningful on the
/// rendered side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiePlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_point_select: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
}

/// Column-specific options (`plotOptions.column`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<Stacking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

/// `plotOptions` option node with per-type sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesPlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PiePlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnPlotOptions>,
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesPlotOptions) -> Self {
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn with_pie(mut self, pie: PiePlotOptions) -> Self {
        self.pie = Some(pie);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: ColumnPlotOptions) -> Self {
        self.column = Some(column);
        self
    }
}
