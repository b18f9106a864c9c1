//! External encyclopedia summary lookups
//!
//! [`SummaryProvider`] is the seam between the place gateway and the
//! network. [`WikipediaClient`] is the production implementation.

pub mod error;
pub mod wikipedia;

use async_trait::async_trait;

pub use error::SummaryError;
pub use wikipedia::WikipediaClient;

/// Summary text and media for a single encyclopedia page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub text: String,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch the summary for a page title. Exactly one outbound request.
    async fn fetch_summary(&self, title: &str) -> Result<PageSummary, SummaryError>;
}
