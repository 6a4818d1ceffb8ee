//! Chart-wide configuration root.
//!
//! A [`Configuration`] owns the option nodes, the series containers, and the
//! update hub through which attached series publish incremental deltas. It
//! serializes on demand to the renderer's full JSON option document.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::options::{
    Axis, ChartOptions, Credits, Legend, PlotOptions, Subtitle, Title, Tooltip,
};
use crate::series::data_series::ensure_drilldown_id;
use crate::series::events::{ChartUpdate, SharedHub};
use crate::series::{ChartSeries, ChartUpdateListener, DataSeries, SeriesId};

/// `drilldown` option node: child series revealed on point click.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drilldown {
    series: Vec<DataSeries>,
}

impl Drilldown {
    #[must_use]
    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }
}

/// Root of one chart's option graph.
#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    chart: ChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<Subtitle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    x_axis: Vec<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    y_axis: Vec<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    credits: Option<Credits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plot_options: Option<PlotOptions>,
    series: Vec<ChartSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drilldown: Option<Drilldown>,
    /// Escape hatch for option nodes not modeled as typed structs.
    /// Insertion order is preserved so the emitted document stays stable.
    #[serde(flatten)]
    custom: IndexMap<String, serde_json::Value>,
    #[serde(skip)]
    hub: SharedHub,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartOptions) -> Self {
        self.chart = chart;
        self
    }

    pub fn set_chart(&mut self, chart: ChartOptions) {
        self.chart = chart;
    }

    #[must_use]
    pub fn chart(&self) -> &ChartOptions {
        &self.chart
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    pub fn set_subtitle(&mut self, subtitle: Subtitle) {
        self.subtitle = Some(subtitle);
    }

    pub fn add_x_axis(&mut self, axis: Axis) {
        self.x_axis.push(axis);
    }

    pub fn add_y_axis(&mut self, axis: Axis) {
        self.y_axis.push(axis);
    }

    pub fn set_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn set_credits(&mut self, credits: Credits) {
        self.credits = Some(credits);
    }

    pub fn set_plot_options(&mut self, plot_options: PlotOptions) {
        self.plot_options = Some(plot_options);
    }

    /// Sets a top-level option node the typed model does not cover.
    pub fn set_custom(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.custom.insert(key.into(), value);
    }

    /// Attaches a series to this configuration.
    ///
    /// The series is assigned its identity, its pending drilldown children
    /// are drained into the configuration's drilldown node (each drain
    /// notifies listeners), and all subsequent notifying mutations reach the
    /// registered listeners. Attaching an already-attached series fails with
    /// [`ChartError::AlreadyAttached`].
    pub fn add_series(&mut self, series: impl Into<ChartSeries>) -> ChartResult<SeriesId> {
        let mut series = series.into();
        let (id, drilldowns) = series.attach(&self.hub)?;
        debug!(%id, name = series.name().unwrap_or(""), "add series to configuration");
        self.series.push(series);
        for drilldown in drilldowns {
            self.register_drilldown(id, drilldown)?;
        }
        Ok(id)
    }

    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series_mut(&mut self, id: SeriesId) -> Option<&mut ChartSeries> {
        self.series
            .iter_mut()
            .find(|series| series.series_id() == Some(id))
    }

    /// Registers a drilldown child for a point of an attached data series.
    ///
    /// This is the post-attach counterpart of
    /// [`DataSeries::add_point_with_drilldown`]: the point at `point_index`
    /// is linked to the child by id and listeners are notified.
    pub fn add_drilldown(
        &mut self,
        id: SeriesId,
        point_index: usize,
        drilldown: DataSeries,
    ) -> ChartResult<()> {
        let drilldown = ensure_drilldown_id(drilldown)?;
        let parent = self
            .series_mut(id)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown series {id}")))?
            .as_data_mut()
            .ok_or_else(|| {
                ChartError::InvalidData("drilldown requires a data series parent".to_owned())
            })?;
        parent.get_mut(point_index)?.drilldown = drilldown.id().map(str::to_owned);
        self.register_drilldown(id, drilldown)
    }

    #[must_use]
    pub fn drilldown(&self) -> Option<&Drilldown> {
        self.drilldown.as_ref()
    }

    /// Registers an update listener with a unique identifier.
    pub fn add_listener(&mut self, listener: Box<dyn ChartUpdateListener>) -> ChartResult<()> {
        self.hub.borrow_mut().add_listener(listener)
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn remove_listener(&mut self, listener_id: &str) -> bool {
        self.hub.borrow_mut().remove_listener(listener_id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.hub.borrow().listener_count()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.hub.borrow().has_listener(listener_id)
    }

    /// Serializes the full option document for the renderer.
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize options: {e}")))
    }

    /// Serializes the full option document as pretty JSON for debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize options: {e}")))
    }

    fn register_drilldown(&mut self, parent: SeriesId, drilldown: DataSeries) -> ChartResult<()> {
        let drilldown_id = drilldown
            .id()
            .map(str::to_owned)
            .ok_or_else(|| {
                ChartError::InvalidData("drilldown series requires an id or a name".to_owned())
            })?;
        self.drilldown
            .get_or_insert_with(Drilldown::default)
            .series
            .push(drilldown);
        self.hub.borrow_mut().publish(&ChartUpdate::DrilldownAdded {
            series: parent,
            drilldown_id,
        });
        Ok(())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("chart", &self.chart)
            .field("series_count", &self.series.len())
            .field(
                "drilldown_count",
                &self.drilldown.as_ref().map_or(0, |d| d.series.len()),
            )
            .field("listener_count", &self.listener_count())
            .finish_non_exhaustive()
    }
}
