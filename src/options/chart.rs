use serde::{Deserialize, Serialize};

use crate::options::Color;

/// Series rendering mode understood by the renderer.
///
/// Serializes to the renderer's lowercase type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Spline,
    Area,
    AreaSpline,
    AreaRange,
    Bar,
    Column,
    ColumnRange,
    Pie,
    Scatter,
    Ohlc,
    Candlestick,
    BoxPlot,
    XRange,
    Gantt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomType {
    X,
    Y,
    Xy,
}

/// Top-level `chart` option node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_type: Option<ZoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl ChartOptions {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_zoom_type(mut self, zoom_type: ZoomType) -> Self {
        self.zoom_type = Some(zoom_type);
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = Some(inverted);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}
