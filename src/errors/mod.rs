use reqwest::StatusCode;
use thiserror::Error;

/// Failures at the fetch boundary. None of these escape the pipeline;
/// they are logged and turned into an absent result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch from: {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned status {status} for: {url}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to read response body from: {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse sections response from: {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// A date string that is not ISO-8601. Callers fall back to the raw text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Malformed date: {0:?}")]
    Malformed(String),
}
