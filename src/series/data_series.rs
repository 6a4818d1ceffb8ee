use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::options::{ChartType, Color, is_true};
use crate::series::events::{Attachment, ChartUpdate, SeriesId, SharedHub};
use crate::series::point::DataPoint;

/// Ordered container of data points for one chart series.
///
/// Point order is the contract: indices map to on-screen rendering order and
/// to the x axis for index-based series. While the series is detached every
/// mutation is local. Once attached to a configuration, the notifying
/// methods emit incremental [`ChartUpdate`]s so a live chart can be patched
/// without a full redraw; direct mutation through [`DataSeries::get_mut`]
/// stays invisible to the renderer until flushed with [`DataSeries::update`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    series_type: Option<ChartType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "is_true")]
    visible: bool,
    #[serde(skip)]
    attachment: Option<Attachment>,
    #[serde(skip)]
    pending_drilldowns: Vec<DataSeries>,
}

impl Default for DataSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            series_type: None,
            id: None,
            stack: None,
            color: None,
            data: Vec::new(),
            visible: true,
            attachment: None,
            pending_drilldowns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, series_type: ChartType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds a series of named points from parallel category/value arrays.
    ///
    /// Fails fast when the arrays disagree in length.
    pub fn from_categories(categories: &[&str], values: &[f64]) -> ChartResult<Self> {
        if categories.len() != values.len() {
            return Err(ChartError::InvalidData(format!(
                "categories/values length mismatch: {} vs {}",
                categories.len(),
                values.len()
            )));
        }
        let mut series = Self::new();
        series.data = categories
            .iter()
            .zip(values)
            .map(|(name, value)| DataPoint::named(*name, *value))
            .collect();
        Ok(series)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn series_id(&self) -> Option<SeriesId> {
        self.attachment.as_ref().map(|attachment| attachment.id)
    }

    /// Replaces the whole point list, preserving the given order.
    ///
    /// No per-point notification is emitted; callers replacing a dataset
    /// wholesale are expected to trigger a full redraw.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set series data");
        self.data = points;
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops all points without notifying.
    pub fn clear(&mut self) {
        trace!(count = self.data.len(), "clear series data");
        self.data.clear();
    }

    /// Appends one point and notifies the attached configuration.
    pub fn add(&mut self, point: DataPoint) {
        self.add_with(point, true, false);
    }

    /// Appends one point with explicit update semantics.
    ///
    /// When `shift` is set the oldest point is evicted first, so a series of
    /// size N stays at size N (fixed-capacity sliding window for streaming
    /// data). A notification is emitted iff `update_immediately` is set and
    /// the series is attached; otherwise the point is buffered locally and
    /// becomes visible at the next full redraw.
    pub fn add_with(&mut self, point: DataPoint, update_immediately: bool, shift: bool) {
        if shift && !self.data.is_empty() {
            self.data.remove(0);
        }
        let notification = if update_immediately {
            self.series_id().map(|series| ChartUpdate::DataAdded {
                series,
                point: point.clone(),
                shift,
            })
        } else {
            None
        };
        self.data.push(point);
        trace!(count = self.data.len(), shift, "add data point");
        if let Some(update) = notification {
            self.publish(update);
        }
    }

    /// Removes the first point equal to `point` and notifies with its index.
    ///
    /// Returns the removed index, or `None` when the point is not present
    /// (tolerated: the caller contract is that the point came from this
    /// series).
    pub fn remove(&mut self, point: &DataPoint) -> Option<usize> {
        let Some(index) = self.data.iter().position(|candidate| candidate == point) else {
            warn!("remove requested for a point not present in the series");
            return None;
        };
        self.data.remove(index);
        trace!(index, count = self.data.len(), "remove data point");
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::DataRemoved { series, index });
        }
        Some(index)
    }

    /// Flushes a point mutation to the attached configuration.
    ///
    /// The caller is expected to have changed the point's fields through
    /// [`DataSeries::get_mut`] beforehand; this emits the corresponding
    /// delta without mutating anything itself. No-op when detached.
    pub fn update(&mut self, index: usize) -> ChartResult<()> {
        let point = self.get(index)?.clone();
        trace!(index, "update data point");
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::DataUpdated {
                series,
                point,
                index,
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> ChartResult<&DataPoint> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(ChartError::IndexOutOfBounds { index, len })
    }

    /// Direct mutable access to one point.
    ///
    /// Changes made this way are invisible to an already-rendered chart
    /// until flushed with [`DataSeries::update`] or a full redraw.
    pub fn get_mut(&mut self, index: usize) -> ChartResult<&mut DataPoint> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(ChartError::IndexOutOfBounds { index, len })
    }

    /// First point whose name matches, or `None`. Never errors.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&DataPoint> {
        self.data.iter().find(|point| point.name() == Some(name))
    }

    /// Toggles the sliced (exploded) flag of a pie point and notifies with
    /// redraw/animation hints.
    ///
    /// Requires an attached configuration: slicing is only meaningful on a
    /// rendered chart, so a detached series is an explicit
    /// [`ChartError::NotAttached`] instead of a crash.
    pub fn set_item_sliced(
        &mut self,
        index: usize,
        sliced: bool,
        redraw: bool,
        animate: bool,
    ) -> ChartResult<()> {
        let series = self.series_id().ok_or(ChartError::NotAttached)?;
        self.get_mut(index)?.sliced = sliced;
        trace!(index, sliced, "set item sliced");
        self.publish(ChartUpdate::ItemSliced {
            series,
            index,
            sliced,
            redraw,
            animate,
        });
        Ok(())
    }

    /// Shows or hides the series, notifying the attached configuration when
    /// the visibility actually changes.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        trace!(visible, "set series visible");
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::SeriesEnabled {
                series,
                enabled: visible,
            });
        }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Appends a point linked to a drilldown child series.
    ///
    /// Only valid while detached: the child is buffered locally and the
    /// pending queue is drained exactly once when the series is attached to
    /// a configuration. After attach, drilldown registration goes through
    /// [`crate::Configuration::add_drilldown`].
    pub fn add_point_with_drilldown(
        &mut self,
        mut point: DataPoint,
        drilldown: DataSeries,
    ) -> ChartResult<()> {
        if self.attachment.is_some() {
            return Err(ChartError::AlreadyAttached);
        }
        let drilldown = ensure_drilldown_id(drilldown)?;
        point.drilldown = drilldown.id.clone();
        self.data.push(point);
        trace!(
            count = self.data.len(),
            pending = self.pending_drilldowns.len() + 1,
            "buffer drilldown series"
        );
        self.pending_drilldowns.push(drilldown);
        Ok(())
    }

    /// Attaches the series to a configuration's update hub.
    ///
    /// Assigns the series identity and drains the pending drilldown queue,
    /// handing the buffered children to the caller. Re-attachment is
    /// unsupported and rejected.
    pub(crate) fn attach(&mut self, hub: &SharedHub) -> ChartResult<(SeriesId, Vec<DataSeries>)> {
        if self.attachment.is_some() {
            return Err(ChartError::AlreadyAttached);
        }
        let id = hub.borrow_mut().allocate_series_id();
        self.attachment = Some(Attachment {
            hub: SharedHub::clone(hub),
            id,
        });
        let drained = std::mem::take(&mut self.pending_drilldowns);
        debug!(%id, drilldowns = drained.len(), "attach data series");
        Ok((id, drained))
    }

    fn publish(&self, update: ChartUpdate) {
        if let Some(attachment) = &self.attachment {
            attachment.hub.borrow_mut().publish(&update);
        }
    }
}

pub(crate) fn ensure_drilldown_id(mut drilldown: DataSeries) -> ChartResult<DataSeries> {
    if drilldown.id.is_none() {
        drilldown.id = drilldown.name.clone();
    }
    if drilldown.id.is_none() {
        return Err(ChartError::InvalidData(
            "drilldown series requires an id or a name".to_owned(),
        ));
    }
    Ok(drilldown)
}
