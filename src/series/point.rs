use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::{ChartError, ChartResult};
use crate::options::{Color, DataLabels, Marker};
use crate::series::primitives::{datetime_to_epoch_millis, decimal_to_f64};

/// Coordinate payload of a data point, tagged by chart-type family.
///
/// Plot components pattern-match on the variant they expect instead of
/// downcasting through a class hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum PointValue {
    Plain {
        y: Option<f64>,
    },
    Range {
        low: f64,
        high: f64,
    },
    Ohlc {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
    BoxPlot {
        low: f64,
        q1: f64,
        median: f64,
        q3: f64,
        high: f64,
    },
    XRange {
        x2: f64,
        y: f64,
        partial_fill: Option<f64>,
    },
}

impl Default for PointValue {
    fn default() -> Self {
        Self::Plain { y: None }
    }
}

/// One observation within a series: coordinates plus presentational
/// overrides.
///
/// Points with only coordinates serialize in the renderer's compact forms
/// (bare value or positional array); points carrying any override serialize
/// as a full object. See [`DataPoint::is_customized`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPoint {
    pub x: Option<f64>,
    pub value: PointValue,
    pub name: Option<String>,
    pub id: Option<String>,
    pub color: Option<Color>,
    pub marker: Option<Marker>,
    pub data_labels: Option<DataLabels>,
    pub selected: bool,
    pub sliced: bool,
    pub drilldown: Option<String>,
}

impl DataPoint {
    /// Plain (x, y) point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            value: PointValue::Plain { y: Some(y) },
            ..Self::default()
        }
    }

    /// Index-positioned point carrying only a y value.
    #[must_use]
    pub fn with_y(y: f64) -> Self {
        Self {
            value: PointValue::Plain { y: Some(y) },
            ..Self::default()
        }
    }

    /// Named point, as used by category and pie series.
    #[must_use]
    pub fn named(name: impl Into<String>, y: f64) -> Self {
        Self {
            name: Some(name.into()),
            value: PointValue::Plain { y: Some(y) },
            ..Self::default()
        }
    }

    /// Point whose x is a calendar timestamp, normalized to epoch
    /// milliseconds for the wire.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, y: f64) -> Self {
        Self::new(datetime_to_epoch_millis(time), y)
    }

    /// Converts strongly-typed decimal input into a plain point.
    pub fn from_decimal(x: f64, y: Decimal) -> ChartResult<Self> {
        Ok(Self::new(x, decimal_to_f64(y, "y")?))
    }

    /// Index-positioned low/high range point.
    ///
    /// Invariants: both values finite, `low <= high`.
    pub fn range(low: f64, high: f64) -> ChartResult<Self> {
        validate_range(low, high)?;
        Ok(Self {
            value: PointValue::Range { low, high },
            ..Self::default()
        })
    }

    /// Low/high range point at an explicit x.
    pub fn range_at(x: f64, low: f64, high: f64) -> ChartResult<Self> {
        validate_range(low, high)?;
        Ok(Self {
            x: Some(x),
            value: PointValue::Range { low, high },
            ..Self::default()
        })
    }

    /// OHLC point.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn ohlc(x: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !x.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }
        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }
        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }
        Ok(Self {
            x: Some(x),
            value: PointValue::Ohlc {
                open,
                high,
                low,
                close,
            },
            ..Self::default()
        })
    }

    /// Box-plot point with `low <= q1 <= median <= q3 <= high`.
    pub fn box_plot(low: f64, q1: f64, median: f64, q3: f64, high: f64) -> ChartResult<Self> {
        if !low.is_finite()
            || !q1.is_finite()
            || !median.is_finite()
            || !q3.is_finite()
            || !high.is_finite()
        {
            return Err(ChartError::InvalidData(
                "box-plot values must be finite".to_owned(),
            ));
        }
        if !(low <= q1 && q1 <= median && median <= q3 && q3 <= high) {
            return Err(ChartError::InvalidData(
                "box-plot values must satisfy low <= q1 <= median <= q3 <= high".to_owned(),
            ));
        }
        Ok(Self {
            value: PointValue::BoxPlot {
                low,
                q1,
                median,
                q3,
                high,
            },
            ..Self::default()
        })
    }

    /// X-range (Gantt-style) point spanning `[x, x2]` on row `y`.
    pub fn x_range(x: f64, x2: f64, y: f64) -> ChartResult<Self> {
        if !x.is_finite() || !x2.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "x-range values must be finite".to_owned(),
            ));
        }
        if x2 < x {
            return Err(ChartError::InvalidData(
                "x-range x2 must be >= x".to_owned(),
            ));
        }
        Ok(Self {
            x: Some(x),
            value: PointValue::XRange {
                x2,
                y,
                partial_fill: None,
            },
            ..Self::default()
        })
    }

    /// Sets the completed fraction on an x-range point.
    pub fn with_partial_fill(mut self, fraction: f64) -> ChartResult<Self> {
        let PointValue::XRange { partial_fill, .. } = &mut self.value else {
            return Err(ChartError::InvalidData(
                "partial fill applies only to x-range points".to_owned(),
            ));
        };
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ChartError::InvalidData(
                "partial fill must be within [0, 1]".to_owned(),
            ));
        }
        *partial_fill = Some(fraction);
        Ok(self)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_data_labels(mut self, data_labels: DataLabels) -> Self {
        self.data_labels = Some(data_labels);
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn with_sliced(mut self, sliced: bool) -> Self {
        self.sliced = sliced;
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The y value for plain and x-range points, `None` for other variants.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        match self.value {
            PointValue::Plain { y } => y,
            PointValue::XRange { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Whether the point carries anything beyond bare coordinates.
    ///
    /// Derived on demand, so newly added override fields cannot drift out of
    /// sync with a stored flag. Customized points serialize as full objects.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.name.is_some()
            || self.id.is_some()
            || self.color.is_some()
            || self.marker.is_some()
            || self.data_labels.is_some()
            || self.selected
            || self.sliced
            || self.drilldown.is_some()
    }

    fn wire_object(&self) -> WirePoint<'_> {
        let mut wire = WirePoint {
            x: self.x,
            name: self.name.as_deref(),
            id: self.id.as_deref(),
            color: self.color.as_ref(),
            marker: self.marker.as_ref(),
            data_labels: self.data_labels.as_ref(),
            selected: self.selected.then_some(true),
            sliced: self.sliced.then_some(true),
            drilldown: self.drilldown.as_deref(),
            ..WirePoint::default()
        };
        match self.value {
            PointValue::Plain { y } => wire.y = y,
            PointValue::Range { low, high } => {
                wire.low = Some(low);
                wire.high = Some(high);
            }
            PointValue::Ohlc {
                open,
                high,
                low,
                close,
            } => {
                wire.open = Some(open);
                wire.high = Some(high);
                wire.low = Some(low);
                wire.close = Some(close);
            }
            PointValue::BoxPlot {
                low,
                q1,
                median,
                q3,
                high,
            } => {
                wire.low = Some(low);
                wire.q1 = Some(q1);
                wire.median = Some(median);
                wire.q3 = Some(q3);
                wire.high = Some(high);
            }
            PointValue::XRange {
                x2,
                y,
                partial_fill,
            } => {
                wire.x2 = Some(x2);
                wire.y = Some(y);
                wire.partial_fill = partial_fill;
            }
        }
        wire
    }
}

impl Serialize for DataPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_customized() {
            return self.wire_object().serialize(serializer);
        }
        match (&self.value, self.x) {
            (PointValue::Plain { y: None }, None) => serializer.serialize_unit(),
            (PointValue::Plain { y: Some(y) }, None) => serializer.serialize_f64(*y),
            (PointValue::Plain { y }, Some(x)) => (x, y).serialize(serializer),
            (PointValue::Range { low, high }, None) => (low, high).serialize(serializer),
            (PointValue::Range { low, high }, Some(x)) => (x, low, high).serialize(serializer),
            (
                PointValue::Ohlc {
                    open,
                    high,
                    low,
                    close,
                },
                Some(x),
            ) => (x, open, high, low, close).serialize(serializer),
            (
                PointValue::BoxPlot {
                    low,
                    q1,
                    median,
                    q3,
                    high,
                },
                Some(x),
            ) => (x, low, q1, median, q3, high).serialize(serializer),
            // Variants without a compact positional form fall back to the
            // object shape.
            _ => self.wire_object().serialize(serializer),
        }
    }
}

/// Object form of a point on the wire. Unset fields are omitted and the
/// boolean flags are emitted only when true, matching the renderer defaults.
#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct WirePoint<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    q3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partial_fill: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<&'a Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_labels: Option<&'a DataLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sliced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drilldown: Option<&'a str>,
}

fn validate_range(low: f64, high: f64) -> ChartResult<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(ChartError::InvalidData(
            "range values must be finite".to_owned(),
        ));
    }
    if low > high {
        return Err(ChartError::InvalidData(
            "range low must be <= high".to_owned(),
        ));
    }
    Ok(())
}
