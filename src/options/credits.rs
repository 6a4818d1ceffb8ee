use serde::{Deserialize, Serialize};

/// `credits` option node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Credits {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            text: None,
            href: None,
        }
    }

    #[must_use]
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            text: Some(text.into()),
            href: Some(href.into()),
        }
    }
}
