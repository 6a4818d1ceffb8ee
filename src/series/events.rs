use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::series::DataPoint;

/// Identity of a series within its owning configuration.
///
/// Assigned when the series is attached; stable for the configuration's
/// lifetime so listeners can correlate deltas with rendered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub(crate) u32);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series#{}", self.0)
    }
}

/// Incremental update emitted by series mutations.
///
/// Payload shapes are the delta contract the rendering layer relies on:
/// the series identity, the affected point or index, and the flags needed
/// to apply a minimal patch instead of a full redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    DataAdded {
        series: SeriesId,
        point: DataPoint,
        shift: bool,
    },
    DataUpdated {
        series: SeriesId,
        point: DataPoint,
        index: usize,
    },
    DataRemoved {
        series: SeriesId,
        index: usize,
    },
    SeriesChanged {
        series: SeriesId,
    },
    ItemSliced {
        series: SeriesId,
        index: usize,
        sliced: bool,
        redraw: bool,
        animate: bool,
    },
    SeriesEnabled {
        series: SeriesId,
        enabled: bool,
    },
    DrilldownAdded {
        series: SeriesId,
        drilldown_id: String,
    },
}

/// Observer interface for incremental chart updates.
///
/// Dispatch is fire-and-forget: listeners cannot veto or reorder updates.
pub trait ChartUpdateListener {
    fn id(&self) -> &str;
    fn on_update(&mut self, update: &ChartUpdate);
}

/// Single-threaded dispatch hub shared between a configuration and its
/// attached series.
#[derive(Default)]
pub(crate) struct UpdateHub {
    next_series: u32,
    listeners: Vec<Box<dyn ChartUpdateListener>>,
}

impl UpdateHub {
    pub(crate) fn allocate_series_id(&mut self) -> SeriesId {
        let id = SeriesId(self.next_series);
        self.next_series += 1;
        id
    }

    pub(crate) fn publish(&mut self, update: &ChartUpdate) {
        trace!(?update, listener_count = self.listeners.len(), "publish chart update");
        for listener in &mut self.listeners {
            listener.on_update(update);
        }
    }

    pub(crate) fn add_listener(
        &mut self,
        listener: Box<dyn ChartUpdateListener>,
    ) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.iter().any(|entry| entry.id() == listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    pub(crate) fn remove_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.iter().any(|entry| entry.id() == listener_id)
    }
}

pub(crate) type SharedHub = Rc<RefCell<UpdateHub>>;

/// Back-reference from an attached series to its configuration's hub.
#[derive(Clone)]
pub(crate) struct Attachment {
    pub(crate) hub: SharedHub,
    pub(crate) id: SeriesId,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attachment").field(&self.id).finish()
    }
}
