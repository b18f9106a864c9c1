//! Destination model for catalog entries

use serde::{Deserialize, Serialize};

/// A named point of interest within a region
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Destination name, also used as the encyclopedia title
    pub name: String,
    /// Display name of the region this destination belongs to
    pub region: String,
    /// Short description shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Destination {
    /// Create a new destination without a description
    #[must_use]
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            description: None,
        }
    }

    /// Attach a short description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
