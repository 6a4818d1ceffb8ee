use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Logarithmic,
    Datetime,
    Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AxisTitle {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// `xAxis`/`yAxis` option node.
///
/// Category labels are positional: index-based series map point order onto
/// the `categories` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn datetime() -> Self {
        Self {
            axis_type: Some(AxisType::Datetime),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self.axis_type = Some(AxisType::Category);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: AxisTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_extremes(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_opposite(mut self, opposite: bool) -> Self {
        self.opposite = Some(opposite);
        self
    }
}
