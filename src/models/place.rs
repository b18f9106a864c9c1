//! Place detail records composed per request

use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Full details for a single place
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceDetail {
    pub name: String,
    /// Encyclopedia summary, or the fallback text when the lookup failed
    pub summary: String,
    /// Recommended season to visit
    pub best_time: String,
    /// Typical things to do, most characteristic first
    pub activities: Vec<String>,
    /// Thumbnail supplied by the summary provider
    pub image_url: Option<String>,
    pub maps_url: String,
}

/// Compact projection used when listing many places at once
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceSummary {
    pub name: String,
    pub summary: String,
    pub best_time: String,
    pub activities: Vec<String>,
}

/// Google Maps search link for a place name
#[must_use]
pub fn maps_url(name: &str) -> String {
    format!("{MAPS_SEARCH_URL}{}", urlencoding::encode(name))
}

impl From<PlaceDetail> for PlaceSummary {
    fn from(detail: PlaceDetail) -> Self {
        Self {
            name: detail.name,
            summary: detail.summary,
            best_time: detail.best_time,
            activities: detail.activities,
        }
    }
}
