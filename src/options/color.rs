use serde::{Deserialize, Serialize};

/// Color value serialized as the renderer's string form
/// (named color, `#rrggbb`, or `rgba(..)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(format!("#{red:02x}{green:02x}{blue:02x}"))
    }

    #[must_use]
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self(format!("rgba({red},{green},{blue},{alpha})"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
