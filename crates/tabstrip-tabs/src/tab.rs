//! Tab pane descriptor
//!
//! The widget only reads a pane's key and the length of the list. Titles are
//! carried for the selector strip; pane content stays with the host.

use serde::{Deserialize, Serialize};

use crate::key::TabKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabPane {
    /// Explicit key, if the host gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<TabKey>,
    /// Label shown in the selector strip
    #[serde(default)]
    pub title: String,
}

impl TabPane {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
        }
    }

    pub fn keyed(key: impl Into<TabKey>, title: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            title: title.into(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }
}
