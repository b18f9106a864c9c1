use thiserror::Error;

/// Failure modes of a summary lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("No page found for {0}")]
    NotFound(String),

    #[error("Summary API returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Page {0} has no summary text")]
    Empty(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SummaryError::Timeout(err.to_string())
        } else if err.is_decode() {
            SummaryError::Parse(err.to_string())
        } else {
            SummaryError::Network(err.to_string())
        }
    }
}
