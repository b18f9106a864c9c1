use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{PageSummary, SummaryError, SummaryProvider};
use crate::config::SummaryConfig;
use crate::{Result, TripMateError};

/// Wikipedia REST summary API client
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

/// `GET /page/summary/{title}` response
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

impl WikipediaClient {
    /// Create a new client. The configured timeout bounds every lookup.
    pub fn new(config: &SummaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TripMateError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn summary_url(&self, title: &str) -> String {
        format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl SummaryProvider for WikipediaClient {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_summary(&self, title: &str) -> std::result::Result<PageSummary, SummaryError> {
        let url = self.summary_url(title);
        debug!("Wikipedia summary request URL: {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(SummaryError::NotFound(title.to_string())),
            status => return Err(SummaryError::Status(status.as_u16())),
        }

        let body: SummaryResponse = response.json().await?;

        let text = body
            .extract
            .filter(|s| !s.trim().is_empty())
            .or(body.description.filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| SummaryError::Empty(title.to_string()))?;

        Ok(PageSummary {
            text,
            image_url: body.thumbnail.map(|t| t.source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> WikipediaClient {
        let config = SummaryConfig {
            base_url: base_url.to_string(),
            ..SummaryConfig::default()
        };
        WikipediaClient::new(&config).unwrap()
    }

    #[test]
    fn test_summary_url_encodes_title() {
        let client = client("https://en.wikipedia.org/api/rest_v1/");
        assert_eq!(
            client.summary_url("Grand Canyon"),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Grand%20Canyon"
        );
    }

    #[test]
    fn test_response_parsing_tolerates_missing_fields() {
        let body: SummaryResponse = serde_json::from_str(r#"{"title": "Sedona"}"#).unwrap();
        assert!(body.extract.is_none());
        assert!(body.thumbnail.is_none());

        let body: SummaryResponse = serde_json::from_str(
            r#"{"extract": "Sedona is a city.", "thumbnail": {"source": "https://img/s.jpg", "width": 320}}"#,
        )
        .unwrap();
        assert_eq!(body.extract.as_deref(), Some("Sedona is a city."));
        assert_eq!(body.thumbnail.unwrap().source, "https://img/s.jpg");
    }
}
