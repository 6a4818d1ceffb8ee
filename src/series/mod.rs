//! Series data containers and the incremental-update contract.

pub mod data_series;
pub mod events;
pub mod list_series;
pub mod point;
pub mod primitives;

pub use data_series::DataSeries;
pub use events::{ChartUpdate, ChartUpdateListener, SeriesId};
pub use list_series::ListSeries;
pub use point::{DataPoint, PointValue};

use serde::{Serialize, Serializer};

use crate::error::ChartResult;
use crate::series::events::SharedHub;

/// Series container variants a configuration can own.
#[derive(Debug)]
pub enum ChartSeries {
    Data(DataSeries),
    List(ListSeries),
}

impl ChartSeries {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Data(series) => series.name(),
            Self::List(series) => series.name(),
        }
    }

    #[must_use]
    pub fn series_id(&self) -> Option<SeriesId> {
        match self {
            Self::Data(series) => series.series_id(),
            Self::List(series) => series.series_id(),
        }
    }

    #[must_use]
    pub fn as_data(&self) -> Option<&DataSeries> {
        match self {
            Self::Data(series) => Some(series),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_data_mut(&mut self) -> Option<&mut DataSeries> {
        match self {
            Self::Data(series) => Some(series),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&ListSeries> {
        match self {
            Self::Data(_) => None,
            Self::List(series) => Some(series),
        }
    }

    #[must_use]
    pub fn as_list_mut(&mut self) -> Option<&mut ListSeries> {
        match self {
            Self::Data(_) => None,
            Self::List(series) => Some(series),
        }
    }

    pub(crate) fn attach(&mut self, hub: &SharedHub) -> ChartResult<(SeriesId, Vec<DataSeries>)> {
        match self {
            Self::Data(series) => series.attach(hub),
            Self::List(series) => series.attach(hub).map(|id| (id, Vec::new())),
        }
    }
}

impl From<DataSeries> for ChartSeries {
    fn from(series: DataSeries) -> Self {
        Self::Data(series)
    }
}

impl From<ListSeries> for ChartSeries {
    fn from(series: ListSeries) -> Self {
        Self::List(series)
    }
}

impl Serialize for ChartSeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Data(series) => series.serialize(serializer),
            Self::List(series) => series.serialize(serializer),
        }
    }
}
