//! Place enrichment gateway
//!
//! Composes a [`PlaceDetail`] from one summary lookup plus the static
//! travel hints. A failed lookup degrades to [`FALLBACK_SUMMARY`]; the
//! gateway itself never returns an error.

pub mod hints;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, instrument, warn};

use crate::models::place::maps_url;
use crate::models::PlaceDetail;
use crate::summary::{PageSummary, SummaryError, SummaryProvider};

pub use hints::{TravelHint, TravelHints};

/// Summary used whenever the external lookup does not succeed
pub const FALLBACK_SUMMARY: &str = "No summary is available for this place right now.";

/// Result of the external summary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Found(PageSummary),
    Fallback(SummaryError),
}

impl SummaryOutcome {
    /// Summary text, substituting the fallback on failure
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            SummaryOutcome::Found(page) => &page.text,
            SummaryOutcome::Fallback(_) => FALLBACK_SUMMARY,
        }
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            SummaryOutcome::Found(page) => page.image_url.as_deref(),
            SummaryOutcome::Fallback(_) => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback(_))
    }
}

/// Fetches and composes place details
#[derive(Clone)]
pub struct PlaceGateway {
    provider: Arc<dyn SummaryProvider>,
    hints: Arc<TravelHints>,
}

impl PlaceGateway {
    /// Gateway over `provider` using the built-in hint table
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self {
            provider,
            hints: Arc::new(TravelHints::builtin()),
        }
    }

    /// Run the external lookup for `title` and classify the result
    #[instrument(level = "debug", skip(self))]
    pub async fn lookup_summary(&self, title: &str) -> SummaryOutcome {
        if title.is_empty() {
            return SummaryOutcome::Fallback(SummaryError::NotFound(String::new()));
        }

        match self.provider.fetch_summary(title).await {
            Ok(page) if page.text.trim().is_empty() => {
                warn!("Summary for {} is blank, using fallback", title);
                SummaryOutcome::Fallback(SummaryError::Empty(title.to_string()))
            }
            Ok(page) => {
                debug!("Summary found for {}", title);
                SummaryOutcome::Found(page)
            }
            Err(e) => {
                warn!("Summary lookup for {} failed, using fallback: {}", title, e);
                SummaryOutcome::Fallback(e)
            }
        }
    }

    /// Compose the full detail record for `place_name`
    #[instrument(skip(self))]
    pub async fn describe(&self, place_name: &str) -> PlaceDetail {
        let name = tidy_name(place_name);
        let outcome = self.lookup_summary(&name).await;
        if !self.hints.knows(&name) {
            debug!("No travel hints for {}, using generic ones", name);
        }
        let hint = self.hints.for_place(&name);

        PlaceDetail {
            summary: outcome.text().to_string(),
            image_url: outcome.image_url().map(str::to_string),
            maps_url: maps_url(&name),
            best_time: hint.best_time,
            activities: hint.activities,
            name,
        }
    }

    /// Describe several places concurrently, preserving input order
    pub async fn describe_many<'a, I>(&self, names: I) -> Vec<PlaceDetail>
    where
        I: IntoIterator<Item = &'a str>,
    {
        join_all(names.into_iter().map(|name| self.describe(name))).await
    }
}

/// Trim and collapse whitespace, keeping the caller's casing for display
fn tidy_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
