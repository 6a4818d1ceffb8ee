use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::series::events::{Attachment, ChartUpdate, SeriesId, SharedHub};
use crate::series::point::DataPoint;

/// Flat series of y values positioned by index.
///
/// The lightweight sibling of [`crate::DataSeries`] for category charts
/// where points carry no overrides: `data` serializes as a bare value array.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    data: Vec<Option<f64>>,
    #[serde(skip)]
    attachment: Option<Attachment>,
}

impl ListSeries {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            data: Vec::new(),
            attachment: None,
        }
    }

    #[must_use]
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: Some(name.into()),
            data: values.iter().copied().map(Some).collect(),
            attachment: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn series_id(&self) -> Option<SeriesId> {
        self.attachment.as_ref().map(|attachment| attachment.id)
    }

    #[must_use]
    pub fn data(&self) -> &[Option<f64>] {
        &self.data
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Replaces all values and notifies the attached configuration with a
    /// series-level change.
    pub fn set_data(&mut self, values: Vec<Option<f64>>) {
        debug!(count = values.len(), "set list series data");
        self.data = values;
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::SeriesChanged { series });
        }
    }

    /// Appends one value and notifies the attached configuration.
    pub fn add(&mut self, y: f64) {
        self.data.push(Some(y));
        trace!(count = self.data.len(), "add list value");
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::DataAdded {
                series,
                point: DataPoint::with_y(y),
                shift: false,
            });
        }
    }

    /// Replaces the value at `index` and notifies with the point delta.
    pub fn update_point(&mut self, index: usize, y: f64) -> ChartResult<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(ChartError::IndexOutOfBounds { index, len })?;
        *slot = Some(y);
        trace!(index, y, "update list value");
        if let Some(series) = self.series_id() {
            self.publish(ChartUpdate::DataUpdated {
                series,
                point: DataPoint::with_y(y),
                index,
            });
        }
        Ok(())
    }

    pub(crate) fn attach(&mut self, hub: &SharedHub) -> ChartResult<SeriesId> {
        if self.attachment.is_some() {
            return Err(ChartError::AlreadyAttached);
        }
        let id = hub.borrow_mut().allocate_series_id();
        self.attachment = Some(Attachment {
            hub: SharedHub::clone(hub),
            id,
        });
        debug!(%id, "attach list series");
        Ok(id)
    }

    fn publish(&self, update: ChartUpdate) {
        if let Some(attachment) = &self.attachment {
            attachment.hub.borrow_mut().publish(&update);
        }
    }
}
